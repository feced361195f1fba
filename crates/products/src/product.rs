use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, PartId, ProductId, StockLevels};
use stockroom_parts::Part;

/// Entity: Product.
///
/// Associated parts are held as ordered [`PartId`] references. The same part
/// may appear more than once; nothing here checks that a referenced part still
/// exists in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Decimal,
    #[serde(flatten)]
    levels: StockLevels,
    associated_parts: Vec<PartId>,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Decimal,
        levels: StockLevels,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            levels,
            associated_parts: Vec::new(),
        }
    }

    /// Product with a placeholder id and no associations.
    pub fn draft(name: impl Into<String>, price: Decimal, levels: StockLevels) -> Self {
        Self::new(ProductId::PLACEHOLDER, name, price, levels)
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn levels(&self) -> StockLevels {
        self.levels
    }

    pub fn stock(&self) -> i32 {
        self.levels.stock
    }

    pub fn min(&self) -> i32 {
        self.levels.min
    }

    pub fn max(&self) -> i32 {
        self.levels.max
    }

    /// Associated part ids, in the order they were attached.
    pub fn associated_parts(&self) -> &[PartId] {
        &self.associated_parts
    }

    pub fn has_associated_parts(&self) -> bool {
        !self.associated_parts.is_empty()
    }

    pub fn references(&self, part_id: PartId) -> bool {
        self.associated_parts.contains(&part_id)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, price: Decimal) {
        self.price = price;
    }

    pub fn set_stock(&mut self, stock: i32) {
        self.levels.stock = stock;
    }

    pub fn set_min(&mut self, min: i32) {
        self.levels.min = min;
    }

    pub fn set_max(&mut self, max: i32) {
        self.levels.max = max;
    }

    pub fn set_levels(&mut self, levels: StockLevels) {
        self.levels = levels;
    }

    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = id;
        self
    }

    /// Append a reference to `part`. No duplicate check.
    pub fn add_associated_part(&mut self, part: &Part) {
        self.add_associated_part_id(part.id_typed());
    }

    /// Append a reference by id. The id is not resolved, so a reference to a
    /// part that has since been deleted can be carried over unchanged.
    pub fn add_associated_part_id(&mut self, part_id: PartId) {
        self.associated_parts.push(part_id);
    }

    /// Remove the first reference to `part`. Returns whether one was removed.
    pub fn remove_associated_part(&mut self, part: &Part) -> bool {
        self.remove_associated_part_id(part.id_typed())
    }

    /// Same as [`Product::remove_associated_part`], for callers holding only the id
    /// (e.g. the part has already been deleted from the store).
    pub fn remove_associated_part_id(&mut self, part_id: PartId) -> bool {
        match self.associated_parts.iter().position(|id| *id == part_id) {
            Some(idx) => {
                self.associated_parts.remove(idx);
                true
            }
            None => false,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
