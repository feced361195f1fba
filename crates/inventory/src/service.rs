use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use stockroom_core::{EntityKind, InventoryError, InventoryResult, PartId, ProductId};
use stockroom_parts::Part;
use stockroom_products::Product;

use crate::form::{PartForm, ProductForm};
use crate::store::Inventory;

/// Point-in-time copy of the store, for display or export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub parts: Vec<Part>,
    pub products: Vec<Product>,
}

/// Caller-facing boundary over an [`Inventory`].
///
/// Each command validates input and resolves selections before touching the
/// store, so a rejected command leaves state exactly as it was. Selections are
/// `Option`s because the presentation layer may invoke a command with nothing
/// selected; that surfaces as [`InventoryError::NoSelection`].
#[derive(Debug, Clone, Default)]
pub struct InventoryService {
    inventory: Inventory,
}

impl InventoryService {
    pub fn new(inventory: Inventory) -> Self {
        Self { inventory }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Validate, allocate an id and append. Ids are only consumed on success.
    pub fn add_part(&mut self, form: &PartForm) -> InventoryResult<PartId> {
        let part = form.to_part().inspect_err(|e| rejected(EntityKind::Part, e))?;
        let id = self.inventory.next_part_id();
        self.inventory.add_part(part.with_id(id));
        info!(part_id = %id, "part committed");
        Ok(id)
    }

    /// Replace the selected part with the form's content, keeping its id.
    pub fn modify_part(
        &mut self,
        selected: Option<PartId>,
        form: &PartForm,
    ) -> InventoryResult<()> {
        let id = selected.ok_or(InventoryError::NoSelection(EntityKind::Part))?;
        self.inventory
            .find_part_by_id(id)
            .ok_or_else(InventoryError::not_found)?;
        let part = form.to_part().inspect_err(|e| rejected(EntityKind::Part, e))?;
        self.inventory.update_part(id, part)?;
        info!(part_id = %id, "part updated");
        Ok(())
    }

    /// Delete the selected part. Products referencing it are not touched.
    pub fn delete_part(&mut self, selected: Option<PartId>) -> InventoryResult<bool> {
        let id = selected.ok_or(InventoryError::NoSelection(EntityKind::Part))?;
        let referencing = self.inventory.products_referencing(id).len();
        let removed = self.inventory.delete_part(id);
        if removed && referencing > 0 {
            warn!(
                part_id = %id,
                count = referencing,
                "deleted part is still referenced by products"
            );
        } else if removed {
            info!(part_id = %id, "part deleted");
        }
        Ok(removed)
    }

    pub fn add_product(&mut self, form: &ProductForm) -> InventoryResult<ProductId> {
        let product = form
            .to_product()
            .inspect_err(|e| rejected(EntityKind::Product, e))?;
        let id = self.inventory.next_product_id();
        self.inventory.add_product(product.with_id(id));
        info!(product_id = %id, "product committed");
        Ok(id)
    }

    /// Replace the selected product, including its association list, with the form's content.
    pub fn modify_product(
        &mut self,
        selected: Option<ProductId>,
        form: &ProductForm,
    ) -> InventoryResult<()> {
        let id = selected.ok_or(InventoryError::NoSelection(EntityKind::Product))?;
        self.inventory
            .find_product_by_id(id)
            .ok_or_else(InventoryError::not_found)?;
        let product = form
            .to_product()
            .inspect_err(|e| rejected(EntityKind::Product, e))?;
        self.inventory.update_product(id, product)?;
        info!(product_id = %id, "product updated");
        Ok(())
    }

    /// Delete the selected product, refused while it has associated parts.
    pub fn delete_product(&mut self, selected: Option<ProductId>) -> InventoryResult<bool> {
        let id = selected.ok_or(InventoryError::NoSelection(EntityKind::Product))?;
        let removed = self
            .inventory
            .delete_product(id)
            .inspect_err(|e| info!(product_id = %id, error = %e, "product deletion refused"))?;
        if removed {
            info!(product_id = %id, "product deleted");
        }
        Ok(removed)
    }

    /// Attach the selected part to the selected stored product.
    pub fn associate_part(
        &mut self,
        product: Option<ProductId>,
        part: Option<PartId>,
    ) -> InventoryResult<()> {
        let product_id = product.ok_or(InventoryError::NoSelection(EntityKind::Product))?;
        let part_id = part.ok_or(InventoryError::NoSelection(EntityKind::Part))?;
        let part = self
            .inventory
            .find_part_by_id(part_id)
            .cloned()
            .ok_or_else(InventoryError::not_found)?;
        let product = self
            .inventory
            .product_mut(product_id)
            .ok_or_else(InventoryError::not_found)?;
        product.add_associated_part(&part);
        info!(product_id = %product_id, part_id = %part_id, "part associated");
        Ok(())
    }

    /// Detach the first reference to the selected part. Works for parts that
    /// have already been deleted from the store.
    pub fn remove_associated_part(
        &mut self,
        product: Option<ProductId>,
        part: Option<PartId>,
    ) -> InventoryResult<bool> {
        let product_id = product.ok_or(InventoryError::NoSelection(EntityKind::Product))?;
        let part_id = part.ok_or(InventoryError::NoSelection(EntityKind::Part))?;
        let product = self
            .inventory
            .product_mut(product_id)
            .ok_or_else(InventoryError::not_found)?;
        let removed = product.remove_associated_part_id(part_id);
        if removed {
            info!(product_id = %product_id, part_id = %part_id, "part disassociated");
        }
        Ok(removed)
    }

    /// Store search, with "nothing matched" surfaced as [`InventoryError::NotFound`].
    pub fn search_parts(&self, query: &str) -> InventoryResult<Vec<&Part>> {
        let hits = self.inventory.find_parts_by_name(query);
        if hits.is_empty() {
            return Err(InventoryError::not_found());
        }
        Ok(hits)
    }

    pub fn search_products(&self, query: &str) -> InventoryResult<Vec<&Product>> {
        let hits = self.inventory.find_products_by_name(query);
        if hits.is_empty() {
            return Err(InventoryError::not_found());
        }
        Ok(hits)
    }

    /// Prefilled form for the modify-part flow.
    pub fn part_form(&self, id: PartId) -> InventoryResult<PartForm> {
        self.inventory
            .find_part_by_id(id)
            .map(PartForm::from_part)
            .ok_or_else(InventoryError::not_found)
    }

    pub fn product_form(&self, id: ProductId) -> InventoryResult<ProductForm> {
        self.inventory
            .find_product_by_id(id)
            .map(ProductForm::from_product)
            .ok_or_else(InventoryError::not_found)
    }

    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            parts: self.inventory.all_parts().to_vec(),
            products: self.inventory.all_products().to_vec(),
        }
    }
}

fn rejected(kind: EntityKind, err: &InventoryError) {
    info!(entity = %kind, error = %err, "input rejected");
}
