use stockroom_core::{PartId, ProductId};

/// Two independent, monotonically increasing id sequences.
///
/// Each counter starts at zero and is bumped before use, so the first id handed
/// out is 1. Ids are never reused, even after the entity is deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdAllocator {
    last_part: u32,
    last_product: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_part_id(&mut self) -> PartId {
        self.last_part += 1;
        PartId::new(self.last_part)
    }

    pub fn next_product_id(&mut self) -> ProductId {
        self.last_product += 1;
        ProductId::new(self.last_product)
    }

    /// Most recently allocated part id, if any.
    pub fn last_part_id(&self) -> Option<PartId> {
        (self.last_part > 0).then(|| PartId::new(self.last_part))
    }

    pub fn last_product_id(&self) -> Option<ProductId> {
        (self.last_product > 0).then(|| ProductId::new(self.last_product))
    }
}
