//! Strongly-typed identifiers used across the domain.
//!
//! Parts and products draw ids from two independent sequences, so the same
//! number may name both a part and a product. Keeping them as distinct types
//! stops one from being looked up in the other's collection.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Identifier of a part.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartId(u32);

/// Identifier of a product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

macro_rules! impl_sequential_id {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Id carried by a freshly built value before the allocator assigns
            /// the real one. Allocated ids are never zero.
            pub const PLACEHOLDER: Self = Self(0);

            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            pub const fn get(self) -> u32 {
                self.0
            }

            pub const fn is_placeholder(self) -> bool {
                self.0 == 0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u32> for $t {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u32 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = InventoryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| InventoryError::invalid_field($name, s))?;
                Ok(Self(raw))
            }
        }
    };
}

impl_sequential_id!(PartId, "part id");
impl_sequential_id!(ProductId, "product id");
