use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, PartId, StockLevels};

/// Where a part comes from, with the data only that source carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Sourcing {
    /// Manufactured on one of our own machines.
    InHouse { machine_id: i32 },
    /// Bought from an outside supplier.
    Outsourced { company_name: String },
}

impl Sourcing {
    pub fn is_in_house(&self) -> bool {
        matches!(self, Sourcing::InHouse { .. })
    }

    pub fn is_outsourced(&self) -> bool {
        matches!(self, Sourcing::Outsourced { .. })
    }
}

/// Entity: Part.
///
/// Built by the caller with [`PartId::PLACEHOLDER`]; the inventory boundary
/// swaps in an allocated id on commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    id: PartId,
    name: String,
    price: Decimal,
    #[serde(flatten)]
    levels: StockLevels,
    sourcing: Sourcing,
}

impl Part {
    pub fn new(
        id: PartId,
        name: impl Into<String>,
        price: Decimal,
        levels: StockLevels,
        sourcing: Sourcing,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            levels,
            sourcing,
        }
    }

    /// In-house part with a placeholder id.
    pub fn in_house(
        name: impl Into<String>,
        price: Decimal,
        levels: StockLevels,
        machine_id: i32,
    ) -> Self {
        Self::new(
            PartId::PLACEHOLDER,
            name,
            price,
            levels,
            Sourcing::InHouse { machine_id },
        )
    }

    /// Outsourced part with a placeholder id.
    pub fn outsourced(
        name: impl Into<String>,
        price: Decimal,
        levels: StockLevels,
        company_name: impl Into<String>,
    ) -> Self {
        Self::new(
            PartId::PLACEHOLDER,
            name,
            price,
            levels,
            Sourcing::Outsourced {
                company_name: company_name.into(),
            },
        )
    }

    pub fn id_typed(&self) -> PartId {
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

    pub fn sourcing(&self) -> &Sourcing {
        &self.sourcing
    }

    /// `Some` only for in-house parts.
    pub fn machine_id(&self) -> Option<i32> {
        match &self.sourcing {
            Sourcing::InHouse { machine_id } => Some(*machine_id),
            Sourcing::Outsourced { .. } => None,
        }
    }

    /// `Some` only for outsourced parts.
    pub fn company_name(&self) -> Option<&str> {
        match &self.sourcing {
            Sourcing::Outsourced { company_name } => Some(company_name),
            Sourcing::InHouse { .. } => None,
        }
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

    /// Switching source replaces the variant payload wholesale.
    pub fn set_sourcing(&mut self, sourcing: Sourcing) {
        self.sourcing = sourcing;
    }

    /// Builder-style id assignment, used when committing a placeholder part.
    pub fn with_id(mut self, id: PartId) -> Self {
        self.id = id;
        self
    }
}

impl Entity for Part {
    type Id = PartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn brakes() -> Part {
        Part::in_house(
            "Brakes",
            Decimal::new(1500, 2),
            StockLevels::new(10, 1, 35),
            101,
        )
    }

    #[test]
    fn builders_use_placeholder_id() {
        let part = brakes();
        assert!(part.id_typed().is_placeholder());
        assert_eq!(part.name(), "Brakes");
        assert_eq!(part.price(), Decimal::new(1500, 2));
        assert_eq!((part.stock(), part.min(), part.max()), (10, 1, 35));
    }

    #[test]
    fn variant_accessors_follow_the_tag() {
        let inhouse = brakes();
        assert_eq!(inhouse.machine_id(), Some(101));
        assert_eq!(inhouse.company_name(), None);
        assert!(inhouse.sourcing().is_in_house());

        let seat = Part::outsourced(
            "Seat",
            Decimal::new(1500, 2),
            StockLevels::new(10, 1, 65),
            "The Seat Company",
        );
        assert_eq!(seat.machine_id(), None);
        assert_eq!(seat.company_name(), Some("The Seat Company"));
        assert!(seat.sourcing().is_outsourced());
    }

    #[test]
    fn setters_mutate_in_place() {
        let mut part = brakes();
        part.set_name("Disc Brakes");
        part.set_stock(20);
        part.set_max(40);
        part.set_sourcing(Sourcing::Outsourced {
            company_name: "Acme".to_string(),
        });

        assert_eq!(part.name(), "Disc Brakes");
        assert_eq!(part.levels(), StockLevels::new(20, 1, 40));
        assert_eq!(part.company_name(), Some("Acme"));
    }

    #[test]
    fn identity_is_by_id() {
        let a = brakes().with_id(PartId::new(1));
        let mut b = a.clone();
        b.set_name("Renamed");
        assert!(a.same_entity(&b));
        assert_ne!(a, b);

        let c = brakes().with_id(PartId::new(2));
        assert!(!a.same_entity(&c));
    }

    #[test]
    fn serializes_with_flat_levels_and_tagged_sourcing() {
        let part = brakes().with_id(PartId::new(1));
        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["stock"], 10);
        assert_eq!(json["sourcing"]["kind"], "in_house");
        assert_eq!(json["sourcing"]["machine_id"], 101);
    }
}
