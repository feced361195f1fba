//! Parts domain module.
//!
//! A part is a sourced inventory component, either manufactured in-house or
//! bought from an outside company.

pub mod part;

pub use part::{Part, Sourcing};
