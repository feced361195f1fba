//! Inventory data-management and validation engine.
//!
//! - [`Inventory`]: the store of all parts and products plus the id allocator.
//!   It performs no validation of its own.
//! - [`InventoryService`]: the caller-facing boundary. Parses form input, runs
//!   the business rules and commits to the store all-or-nothing.
//!
//! Everything is synchronous and single-threaded. Callers that share an
//! `Inventory` across threads must wrap it in their own lock.

pub mod allocator;
pub mod form;
pub mod seed;
pub mod service;
pub mod store;
pub mod validation;

pub use allocator::IdAllocator;
pub use form::{PartForm, ProductForm, SourcingKind};
pub use service::{InventoryService, InventorySnapshot};
pub use store::Inventory;
