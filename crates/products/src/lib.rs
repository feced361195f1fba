//! Products domain module.
//!
//! A product is a sellable item that references zero or more parts. It never
//! owns those parts; the inventory store does.

pub mod product;

pub use product::Product;
