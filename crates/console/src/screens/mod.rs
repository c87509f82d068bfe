//! Interactive screens: the main overview and the part/product forms.

pub mod main_screen;
pub mod part_screen;
pub mod product_screen;

pub use main_screen::{MainAction, MainScreen};
pub use part_screen::{PartAction, PartMode, PartScreen};
pub use product_screen::{ProductAction, ProductMode, ProductScreen};

use anyhow::Result;

use crate::prompt::Prompter;

/// How a form screen was closed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Saved,
    Cancelled,
}

/// A fixed menu whose entries are offered in declaration order.
pub trait MenuItem: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;

    fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|item| *item == self)
            .unwrap_or_default()
    }
}

/// Offer a menu; `None` when the user backs out.
pub(crate) fn choose<M: MenuItem, P: Prompter>(prompter: &mut P, prompt: &str) -> Result<Option<M>> {
    let labels: Vec<String> = M::ALL.iter().map(|item| item.label().to_string()).collect();
    let choice = prompter.select(prompt, &labels)?;
    Ok(choice.and_then(|i| M::ALL.get(i).copied()))
}

/// Offer one row per record; `None` when there is nothing to pick or the
/// user backs out.
pub(crate) fn choose_row<P: Prompter>(
    prompter: &mut P,
    prompt: &str,
    rows: Vec<String>,
) -> Result<Option<usize>> {
    if rows.is_empty() {
        return Ok(None);
    }
    prompter.select(prompt, &rows)
}
