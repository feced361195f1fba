//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**; two with the same attribute values are
/// equal. To "modify" one, build a new one.
///
/// - **Value Object**: `StockLevels { stock: 3, min: 1, max: 200 }`
/// - **Entity**: a `Part` or `Product`, identified by its id
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
