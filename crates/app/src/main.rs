//! `stockroom` — builds the process-wide inventory and prints it as JSON.
//!
//! The forms and screens that drive [`InventoryService`] live outside this
//! workspace; this binary only does the startup half: configuration, logging
//! and the sample seed.

mod config;

use anyhow::Context;
use stockroom_inventory::{Inventory, InventoryService, seed};

use crate::config::AppConfig;

fn main() -> anyhow::Result<()> {
    let (config, warnings) = AppConfig::from_env();
    stockroom_observability::init_with(config.log_format);

    for w in &warnings {
        tracing::warn!(var = w.var, value = %w.value, "ignoring invalid setting; using default");
    }

    let inventory = if config.seed {
        seed::seeded()
    } else {
        Inventory::new()
    };
    let service = InventoryService::new(inventory);

    let snapshot = service.snapshot();
    tracing::info!(
        parts = snapshot.parts.len(),
        products = snapshot.products.len(),
        "inventory ready"
    );

    let json = serde_json::to_string_pretty(&snapshot).context("failed to serialize inventory")?;
    println!("{json}");
    Ok(())
}
