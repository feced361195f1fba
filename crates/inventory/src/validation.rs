//! Business rules gating every add/update commit.
//!
//! Three independent checks, applied in a fixed order by the boundary:
//! name presence, then range validity, then stock bounds. The store never
//! calls these.

use stockroom_core::{InventoryError, InventoryResult, StockLevels};

/// Name must be non-empty after trimming. Returns the trimmed name.
pub fn validate_name(name: &str) -> InventoryResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(InventoryError::EmptyName);
    }
    Ok(trimmed)
}

/// `0 < min < max`.
pub fn validate_range(levels: &StockLevels) -> InventoryResult<()> {
    levels.check_range()
}

/// `min <= stock <= max`.
pub fn validate_stock(levels: &StockLevels) -> InventoryResult<()> {
    levels.check_stock()
}

/// Name, then range, then stock. The first failure wins.
pub fn validate<'a>(name: &'a str, levels: &StockLevels) -> InventoryResult<&'a str> {
    let name = validate_name(name)?;
    validate_range(levels)?;
    validate_stock(levels)?;
    Ok(name)
}

/// In-house machine ids must be integers.
pub fn parse_machine_id(raw: &str) -> InventoryResult<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| InventoryError::invalid_machine_id(raw))
}
