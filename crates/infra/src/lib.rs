//! Infrastructure layer: the in-memory inventory store and the command
//! handlers that move validated form input into it.

pub mod commands;
pub mod lookup;
pub mod store;

pub use lookup::{LookupPolicy, SearchTerm};
pub use store::Inventory;
