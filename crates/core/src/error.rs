//! Domain error model.

use thiserror::Error;

use crate::entity::EntityKind;
use crate::id::ProductId;

/// Result type used across the inventory domain.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Every variant is recoverable: callers render it and let the operator retry.
/// A failed operation never leaves a partial mutation behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// The name field was blank after trimming.
    #[error("name cannot be empty")]
    EmptyName,

    /// `min` is not in `(0, max)`.
    #[error("min must be greater than 0 and less than max (min: {min}, max: {max})")]
    InvalidRange { min: i32, max: i32 },

    /// `stock` is outside `[min, max]`.
    #[error("stock must be between min and max inclusive (stock: {stock}, min: {min}, max: {max})")]
    StockOutOfRange { stock: i32, min: i32, max: i32 },

    /// In-house machine identifier is not an integer.
    #[error("machine id must be numeric: {0:?}")]
    InvalidMachineId(String),

    /// A form field is blank or does not hold a valid value for its type.
    #[error("invalid value for {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },

    /// An operation that needs a selected entity was invoked without one.
    #[error("no {0} selected")]
    NoSelection(EntityKind),

    /// Products can only be deleted once their association list is empty.
    #[error("product {product_id} still has {count} associated part(s)")]
    ProductHasAssociatedParts { product_id: ProductId, count: usize },

    /// A lookup or search yielded nothing.
    #[error("not found")]
    NotFound,
}

impl InventoryError {
    pub fn invalid_range(min: i32, max: i32) -> Self {
        Self::InvalidRange { min, max }
    }

    pub fn stock_out_of_range(stock: i32, min: i32, max: i32) -> Self {
        Self::StockOutOfRange { stock, min, max }
    }

    pub fn invalid_machine_id(value: impl Into<String>) -> Self {
        Self::InvalidMachineId(value.into())
    }

    pub fn invalid_field(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            value: value.into(),
        }
    }

    pub fn no_selection(kind: EntityKind) -> Self {
        Self::NoSelection(kind)
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Informational outcomes (nothing matched) as opposed to rejected input.
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
