//! Parts domain module.
//!
//! This crate contains the part record, its form parsing and its validation
//! rules, implemented purely as deterministic domain logic (no I/O, no storage).

pub mod form;
pub mod part;
pub mod validation;

pub use form::{PartCandidate, PartForm, SourceField};
pub use part::{MachineId, Part, PartSource};
pub use validation::validate_part;
