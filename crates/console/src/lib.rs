//! Terminal front end: a main overview of parts and products plus the
//! add/modify forms, driven through a [`Prompter`].

pub mod alert;
pub mod config;
pub mod prompt;
pub mod screens;
pub mod table;

#[cfg(test)]
pub(crate) mod testing;

pub use alert::{Alert, AlertKind};
pub use config::{ConsoleArgs, LookupArg};
pub use prompt::{Prompter, TerminalPrompter};
pub use screens::{MainScreen, Outcome, PartScreen, ProductScreen};
