//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by parts, products and
//! the inventory store (no IO, no presentation concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod stock;
pub mod value_object;

pub use entity::{Entity, EntityKind};
pub use error::{InventoryError, InventoryResult};
pub use id::{PartId, ProductId};
pub use stock::StockLevels;
pub use value_object::ValueObject;
