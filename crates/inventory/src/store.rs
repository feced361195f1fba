use tracing::debug;

use stockroom_core::{InventoryError, InventoryResult, PartId, ProductId};
use stockroom_parts::Part;
use stockroom_products::Product;

use crate::allocator::IdAllocator;

/// In-memory store of every part and product.
///
/// Insertion order is iteration and search order. The store trusts its
/// callers: range/name rules and id uniqueness are enforced by
/// [`crate::InventoryService`] and the allocator, not here.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    parts: Vec<Part>,
    products: Vec<Product>,
    ids: IdAllocator,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_part_id(&mut self) -> PartId {
        self.ids.next_part_id()
    }

    pub fn next_product_id(&mut self) -> ProductId {
        self.ids.next_product_id()
    }

    pub fn all_parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn all_products(&self) -> &[Product] {
        &self.products
    }

    /// Append without checking for duplicate ids.
    pub fn add_part(&mut self, part: Part) {
        debug!(part_id = %part.id_typed(), name = part.name(), "part added");
        self.parts.push(part);
    }

    pub fn add_product(&mut self, product: Product) {
        debug!(product_id = %product.id_typed(), name = product.name(), "product added");
        self.products.push(product);
    }

    /// Last part carrying `id`, so a later duplicate shadows an earlier one.
    pub fn find_part_by_id(&self, id: PartId) -> Option<&Part> {
        self.parts.iter().rev().find(|p| p.id_typed() == id)
    }

    pub fn find_product_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().rev().find(|p| p.id_typed() == id)
    }

    pub fn part_mut(&mut self, id: PartId) -> Option<&mut Part> {
        self.parts.iter_mut().rev().find(|p| p.id_typed() == id)
    }

    pub fn product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().rev().find(|p| p.id_typed() == id)
    }

    /// Case-insensitive substring match against the id text and the name.
    ///
    /// An empty fragment matches every part. No match is an empty vec, not an error.
    pub fn find_parts_by_name(&self, fragment: &str) -> Vec<&Part> {
        let needle = fragment.to_lowercase();
        self.parts
            .iter()
            .filter(|p| matches_fragment(p.id_typed(), p.name(), &needle))
            .collect()
    }

    pub fn find_products_by_name(&self, fragment: &str) -> Vec<&Product> {
        let needle = fragment.to_lowercase();
        self.products
            .iter()
            .filter(|p| matches_fragment(p.id_typed(), p.name(), &needle))
            .collect()
    }

    /// Replace the part with `id` in place. The replacement keeps `id`
    /// regardless of the id it was built with.
    pub fn update_part(&mut self, id: PartId, part: Part) -> InventoryResult<()> {
        let idx = self
            .parts
            .iter()
            .rposition(|p| p.id_typed() == id)
            .ok_or_else(InventoryError::not_found)?;
        self.parts[idx] = part.with_id(id);
        debug!(part_id = %id, "part replaced");
        Ok(())
    }

    pub fn update_product(&mut self, id: ProductId, product: Product) -> InventoryResult<()> {
        let idx = self
            .products
            .iter()
            .rposition(|p| p.id_typed() == id)
            .ok_or_else(InventoryError::not_found)?;
        self.products[idx] = product.with_id(id);
        debug!(product_id = %id, "product replaced");
        Ok(())
    }

    /// Remove the part with `id`. Products referencing it are left untouched,
    /// so their association lists may now hold a dangling id.
    pub fn delete_part(&mut self, id: PartId) -> bool {
        match self.parts.iter().position(|p| p.id_typed() == id) {
            Some(idx) => {
                self.parts.remove(idx);
                debug!(part_id = %id, "part deleted");
                true
            }
            None => false,
        }
    }

    /// Remove the product with `id`, refusing while it still has associated parts.
    ///
    /// `Ok(false)` when no such product exists.
    pub fn delete_product(&mut self, id: ProductId) -> InventoryResult<bool> {
        let Some(idx) = self.products.iter().position(|p| p.id_typed() == id) else {
            return Ok(false);
        };

        let count = self.products[idx].associated_parts().len();
        if count > 0 {
            return Err(InventoryError::ProductHasAssociatedParts {
                product_id: id,
                count,
            });
        }

        self.products.remove(idx);
        debug!(product_id = %id, "product deleted");
        Ok(true)
    }

    /// Associated parts that still exist, in association order.
    pub fn associated_parts(&self, product: &Product) -> Vec<&Part> {
        product
            .associated_parts()
            .iter()
            .filter_map(|id| self.find_part_by_id(*id))
            .collect()
    }

    /// Association entries whose part is no longer in the store.
    pub fn dangling_associations(&self, product: &Product) -> Vec<PartId> {
        product
            .associated_parts()
            .iter()
            .copied()
            .filter(|id| self.find_part_by_id(*id).is_none())
            .collect()
    }

    /// Products whose association list mentions `part_id`.
    pub fn products_referencing(&self, part_id: PartId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.references(part_id))
            .collect()
    }
}

fn matches_fragment(id: impl core::fmt::Display, name: &str, needle: &str) -> bool {
    id.to_string().contains(needle) || name.to_lowercase().contains(needle)
}
