//! Products domain module.
//!
//! This crate contains business rules for products (items assembled from
//! parts), implemented purely as deterministic domain logic (no I/O, no storage).

pub mod form;
pub mod product;
pub mod validation;

pub use form::{AssociatedParts, ProductCandidate, ProductForm};
pub use product::Product;
pub use validation::validate_product;
