use rust_decimal::Decimal;

use stockroom_core::{InventoryError, PartId, ProductId, StockLevels};
use stockroom_inventory::{Inventory, InventoryService, PartForm, ProductForm, SourcingKind};
use stockroom_parts::Part;
use stockroom_products::Product;

fn in_house_form(
    name: &str,
    price: &str,
    stock: i32,
    min: i32,
    max: i32,
    machine_id: i32,
) -> PartForm {
    PartForm {
        name: name.to_string(),
        price: price.to_string(),
        stock: stock.to_string(),
        min: min.to_string(),
        max: max.to_string(),
        sourcing: SourcingKind::InHouse,
        machine_or_company: machine_id.to_string(),
    }
}

#[test]
fn tricycle_can_only_be_deleted_once_its_parts_are_removed() {
    let mut inv = Inventory::new();

    let id = inv.next_part_id();
    assert_eq!(id, PartId::new(1));
    let brakes = Part::in_house("Brakes", Decimal::new(1500, 2), StockLevels::new(10, 1, 35), 101)
        .with_id(id);
    inv.add_part(brakes.clone());

    let id = inv.next_part_id();
    assert_eq!(id, PartId::new(2));
    let wheel = Part::in_house("Wheel", Decimal::new(1100, 2), StockLevels::new(16, 1, 55), 102)
        .with_id(id);
    inv.add_part(wheel.clone());

    let product_id = inv.next_product_id();
    assert_eq!(product_id, ProductId::new(1));
    inv.add_product(
        Product::draft("Tricycle", Decimal::new(9999, 2), StockLevels::new(3, 1, 200))
            .with_id(product_id),
    );

    let tricycle = inv.product_mut(product_id).unwrap();
    tricycle.add_associated_part(&brakes);
    tricycle.add_associated_part(&wheel);

    let err = inv.delete_product(product_id).unwrap_err();
    assert_eq!(
        err,
        InventoryError::ProductHasAssociatedParts {
            product_id,
            count: 2
        }
    );
    assert!(inv.find_product_by_id(product_id).is_some());

    let tricycle = inv.product_mut(product_id).unwrap();
    assert!(tricycle.remove_associated_part(&brakes));
    assert!(tricycle.remove_associated_part(&wheel));

    assert_eq!(inv.delete_product(product_id), Ok(true));
    assert!(inv.all_products().is_empty());
}

#[test]
fn same_scenario_through_the_service_boundary() {
    let mut svc = InventoryService::default();
    let brakes = svc
        .add_part(&in_house_form("Brakes", "15.00", 10, 1, 35, 101))
        .unwrap();
    let wheel = svc
        .add_part(&in_house_form("Wheel", "11.00", 16, 1, 55, 102))
        .unwrap();

    let mut form = ProductForm {
        name: "Tricycle".to_string(),
        price: "99.99".to_string(),
        stock: "3".to_string(),
        min: "1".to_string(),
        max: "200".to_string(),
        associated_parts: Vec::new(),
    };
    for id in [brakes, wheel] {
        let part = svc.inventory().find_part_by_id(id).cloned();
        form.associate(part.as_ref()).unwrap();
    }
    let tricycle = svc.add_product(&form).unwrap();

    assert!(matches!(
        svc.delete_product(Some(tricycle)),
        Err(InventoryError::ProductHasAssociatedParts { count: 2, .. })
    ));

    assert_eq!(svc.remove_associated_part(Some(tricycle), Some(brakes)), Ok(true));
    assert_eq!(svc.remove_associated_part(Some(tricycle), Some(wheel)), Ok(true));
    assert_eq!(svc.delete_product(Some(tricycle)), Ok(true));
}

#[test]
fn deleting_a_referenced_part_succeeds_and_leaves_products_alone() {
    let mut inv = stockroom_inventory::seed::seeded();
    let tricycle_id = ProductId::new(1);
    let before = inv.find_product_by_id(tricycle_id).cloned().unwrap();

    assert!(inv.delete_part(PartId::new(1)));

    let after = inv.find_product_by_id(tricycle_id).unwrap();
    assert_eq!(after, &before);
    assert_eq!(inv.dangling_associations(after), vec![PartId::new(1)]);
}

#[test]
fn unchanged_product_form_keeps_dangling_associations() {
    let mut svc = InventoryService::new(stockroom_inventory::seed::seeded());
    let tricycle = ProductId::new(1);
    assert_eq!(svc.delete_part(Some(PartId::new(1))), Ok(true));

    let form = svc.product_form(tricycle).unwrap();
    svc.modify_product(Some(tricycle), &form).unwrap();

    let stored = svc.inventory().find_product_by_id(tricycle).unwrap();
    assert_eq!(stored.associated_parts(), &[PartId::new(1), PartId::new(2)]);
    assert_eq!(
        svc.inventory().dangling_associations(stored),
        vec![PartId::new(1)]
    );
    assert!(matches!(
        svc.delete_product(Some(tricycle)),
        Err(InventoryError::ProductHasAssociatedParts { count: 2, .. })
    ));

    // The dangling entry can still be dropped from the form by id.
    let mut form = svc.product_form(tricycle).unwrap();
    assert_eq!(form.disassociate(Some(PartId::new(1))), Ok(true));
    svc.modify_product(Some(tricycle), &form).unwrap();
    let stored = svc.inventory().find_product_by_id(tricycle).unwrap();
    assert_eq!(stored.associated_parts(), &[PartId::new(2)]);
}

#[test]
fn inverted_range_is_rejected_for_parts_and_products() {
    let mut svc = InventoryService::default();
    assert_eq!(
        svc.add_part(&in_house_form("Wheel", "11.00", 7, 10, 5, 102)),
        Err(InventoryError::invalid_range(10, 5))
    );

    let form = ProductForm {
        name: "Tricycle".to_string(),
        price: "99.99".to_string(),
        stock: "7".to_string(),
        min: "10".to_string(),
        max: "5".to_string(),
        associated_parts: Vec::new(),
    };
    assert_eq!(svc.add_product(&form), Err(InventoryError::invalid_range(10, 5)));
    assert!(svc.snapshot().parts.is_empty());
    assert!(svc.snapshot().products.is_empty());
}

#[test]
fn snapshot_serializes_to_json() {
    let svc = InventoryService::new(stockroom_inventory::seed::seeded());
    let json = serde_json::to_value(svc.snapshot()).unwrap();

    assert_eq!(json["parts"].as_array().unwrap().len(), 2);
    assert_eq!(json["products"][0]["name"], "Tricycle");
    assert_eq!(
        json["products"][0]["associated_parts"],
        serde_json::json!([1, 2])
    );
}
