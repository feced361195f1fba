//! Stock level bounds shared by parts and products.

use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, InventoryResult};
use crate::value_object::ValueObject;

/// Current stock plus the admissible inclusive range for it.
///
/// Construction does not validate: forms build levels from raw input and the
/// boundary decides when to call [`StockLevels::check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevels {
    pub stock: i32,
    pub min: i32,
    pub max: i32,
}

impl ValueObject for StockLevels {}

impl StockLevels {
    pub const fn new(stock: i32, min: i32, max: i32) -> Self {
        Self { stock, min, max }
    }

    /// `0 < min < max`.
    pub fn check_range(&self) -> InventoryResult<()> {
        if self.min <= 0 || self.min >= self.max {
            return Err(InventoryError::invalid_range(self.min, self.max));
        }
        Ok(())
    }

    /// `min <= stock <= max`.
    pub fn check_stock(&self) -> InventoryResult<()> {
        if self.stock < self.min || self.stock > self.max {
            return Err(InventoryError::stock_out_of_range(
                self.stock, self.min, self.max,
            ));
        }
        Ok(())
    }

    /// Range first; a bad range is reported even when stock is also out of bounds.
    pub fn check(&self) -> InventoryResult<()> {
        self.check_range()?;
        self.check_stock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_bounds_are_accepted() {
        assert!(StockLevels::new(1, 1, 35).check().is_ok());
        assert!(StockLevels::new(35, 1, 35).check().is_ok());
    }

    #[test]
    fn just_outside_bounds_is_rejected() {
        assert_eq!(
            StockLevels::new(0, 1, 35).check(),
            Err(InventoryError::stock_out_of_range(0, 1, 35))
        );
        assert_eq!(
            StockLevels::new(36, 1, 35).check(),
            Err(InventoryError::stock_out_of_range(36, 1, 35))
        );
    }

    #[test]
    fn range_failure_short_circuits_stock_check() {
        // stock is also outside [10, 5] but the range error wins
        assert_eq!(
            StockLevels::new(100, 10, 5).check(),
            Err(InventoryError::invalid_range(10, 5))
        );
    }

    #[test]
    fn min_must_be_positive_and_below_max() {
        assert!(StockLevels::new(0, 0, 5).check_range().is_err());
        assert!(StockLevels::new(5, 5, 5).check_range().is_err());
        assert!(StockLevels::new(-1, -3, 5).check_range().is_err());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: min=10, max=5 is always an invalid range, whatever the stock.
            #[test]
            fn inverted_range_is_always_invalid(stock in any::<i32>()) {
                prop_assert_eq!(
                    StockLevels::new(stock, 10, 5).check(),
                    Err(InventoryError::invalid_range(10, 5))
                );
            }

            /// Property: with a valid range, check passes iff stock is within [min, max].
            #[test]
            fn stock_check_matches_inclusive_interval(
                min in 1i32..1000,
                span in 1i32..1000,
                stock in -10i32..3000
            ) {
                let max = min + span;
                let levels = StockLevels::new(stock, min, max);
                prop_assert_eq!(levels.check().is_ok(), stock >= min && stock <= max);
            }
        }
    }
}
