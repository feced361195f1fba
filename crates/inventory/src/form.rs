//! Raw form input for parts and products.
//!
//! The presentation layer fills these with whatever the operator typed; the
//! `to_*` methods turn that text into a validated, placeholder-id entity or
//! the first error encountered. Numeric fields are parsed before any business
//! rule runs.

use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{EntityKind, InventoryError, InventoryResult, PartId, StockLevels};
use stockroom_parts::{Part, Sourcing};
use stockroom_products::Product;

use crate::store::Inventory;
use crate::validation;

/// Which source the part form's last field describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourcingKind {
    #[default]
    InHouse,
    Outsourced,
}

/// Add/modify part form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartForm {
    pub name: String,
    pub price: String,
    pub stock: String,
    pub min: String,
    pub max: String,
    pub sourcing: SourcingKind,
    /// Machine id for in-house parts, company name for outsourced ones.
    pub machine_or_company: String,
}

impl PartForm {
    /// Prefill from an existing part (modify flow).
    pub fn from_part(part: &Part) -> Self {
        let (sourcing, machine_or_company) = match part.sourcing() {
            Sourcing::InHouse { machine_id } => (SourcingKind::InHouse, machine_id.to_string()),
            Sourcing::Outsourced { company_name } => {
                (SourcingKind::Outsourced, company_name.clone())
            }
        };
        Self {
            name: part.name().to_string(),
            price: part.price().to_string(),
            stock: part.stock().to_string(),
            min: part.min().to_string(),
            max: part.max().to_string(),
            sourcing,
            machine_or_company,
        }
    }

    pub fn levels(&self) -> InventoryResult<StockLevels> {
        parse_levels(&self.stock, &self.min, &self.max)
    }

    /// Parse and validate into a part carrying the placeholder id.
    ///
    /// Order: numeric fields, name, range, stock, machine id. An unparseable
    /// machine id discards everything else on the form.
    pub fn to_part(&self) -> InventoryResult<Part> {
        let price = parse_price(&self.price)?;
        let levels = self.levels()?;
        let name = validation::validate(&self.name, &levels)?;

        let part = match self.sourcing {
            SourcingKind::InHouse => {
                let machine_id = validation::parse_machine_id(&self.machine_or_company)?;
                Part::in_house(name, price, levels, machine_id)
            }
            SourcingKind::Outsourced => {
                Part::outsourced(name, price, levels, self.machine_or_company.trim())
            }
        };
        Ok(part)
    }
}

/// Add/modify product form, including the working list of associated parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub stock: String,
    pub min: String,
    pub max: String,
    /// Working association list, in order. Ids of parts deleted from the store
    /// stay here so an unedited save leaves the product unchanged.
    pub associated_parts: Vec<PartId>,
}

impl ProductForm {
    /// Prefill from a stored product, including dangling association entries.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name().to_string(),
            price: product.price().to_string(),
            stock: product.stock().to_string(),
            min: product.min().to_string(),
            max: product.max().to_string(),
            associated_parts: product.associated_parts().to_vec(),
        }
    }

    /// Working list resolved against the store, for display. Entries whose part
    /// no longer exists are skipped.
    pub fn resolved_parts<'a>(&self, inventory: &'a Inventory) -> Vec<&'a Part> {
        self.associated_parts
            .iter()
            .filter_map(|id| inventory.find_part_by_id(*id))
            .collect()
    }

    /// Add the selected part to the working association list. Duplicates allowed.
    pub fn associate(&mut self, selected: Option<&Part>) -> InventoryResult<()> {
        let part = selected.ok_or(InventoryError::NoSelection(EntityKind::Part))?;
        self.associated_parts.push(part.id_typed());
        Ok(())
    }

    /// Drop the first entry for the selected part. Returns whether one was removed.
    ///
    /// Takes an id so entries for deleted parts can be removed too.
    pub fn disassociate(&mut self, selected: Option<PartId>) -> InventoryResult<bool> {
        let part_id = selected.ok_or(InventoryError::NoSelection(EntityKind::Part))?;
        match self.associated_parts.iter().position(|id| *id == part_id) {
            Some(idx) => {
                self.associated_parts.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn levels(&self) -> InventoryResult<StockLevels> {
        parse_levels(&self.stock, &self.min, &self.max)
    }

    /// Parse and validate into a product carrying the placeholder id, with
    /// the working association list attached in order.
    pub fn to_product(&self) -> InventoryResult<Product> {
        let price = parse_price(&self.price)?;
        let levels = self.levels()?;
        let name = validation::validate(&self.name, &levels)?;

        let mut product = Product::draft(name, price, levels);
        for part_id in &self.associated_parts {
            product.add_associated_part_id(*part_id);
        }
        Ok(product)
    }
}

fn parse_price(raw: &str) -> InventoryResult<Decimal> {
    let price =
        Decimal::from_str(raw.trim()).map_err(|_| InventoryError::invalid_field("price", raw))?;
    if price.is_sign_negative() {
        return Err(InventoryError::invalid_field("price", raw));
    }
    Ok(price)
}

fn parse_count(field: &'static str, raw: &str) -> InventoryResult<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| InventoryError::invalid_field(field, raw))
}

fn parse_levels(stock: &str, min: &str, max: &str) -> InventoryResult<StockLevels> {
    Ok(StockLevels::new(
        parse_count("stock", stock)?,
        parse_count("min", min)?,
        parse_count("max", max)?,
    ))
}
