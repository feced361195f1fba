//! Sample data loaded at process start.
//!
//! Goes through the same allocator and add operations as any other caller.

use rust_decimal::Decimal;

use stockroom_core::StockLevels;
use stockroom_parts::Part;
use stockroom_products::Product;

use crate::store::Inventory;

/// Add two in-house parts and two products; the tricycle references both parts.
pub fn seed(inventory: &mut Inventory) {
    let id = inventory.next_part_id();
    let brakes = Part::in_house(
        "Brakes",
        Decimal::new(1500, 2),
        StockLevels::new(10, 1, 35),
        101,
    )
    .with_id(id);

    let id = inventory.next_part_id();
    let wheel = Part::in_house(
        "Wheel",
        Decimal::new(1100, 2),
        StockLevels::new(16, 1, 55),
        102,
    )
    .with_id(id);

    let id = inventory.next_product_id();
    let mut tricycle = Product::draft(
        "Tricycle",
        Decimal::new(9999, 2),
        StockLevels::new(3, 1, 200),
    )
    .with_id(id);
    tricycle.add_associated_part(&brakes);
    tricycle.add_associated_part(&wheel);

    let id = inventory.next_product_id();
    let mountain_bike = Product::draft(
        "Mountain Bike",
        Decimal::new(29999, 2),
        StockLevels::new(5, 1, 300),
    )
    .with_id(id);

    inventory.add_part(brakes);
    inventory.add_part(wheel);
    inventory.add_product(tricycle);
    inventory.add_product(mountain_bike);
}

/// Fresh inventory holding the sample data.
pub fn seeded() -> Inventory {
    let mut inventory = Inventory::new();
    seed(&mut inventory);
    inventory
}
