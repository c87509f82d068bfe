//! `stockroom-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no I/O): the error model,
//! identifiers, value objects and the rules shared by every inventory record.

pub mod entity;
pub mod error;
pub mod id;
pub mod validation;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{IdSequence, PartId, ProductId};
pub use validation::{Violation, Violations, check_common};
pub use value_object::{Price, StockLevels, ValueObject, parse_count};
