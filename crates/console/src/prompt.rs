//! User interaction seam.
//!
//! Screens talk to a [`Prompter`] only, so every flow can be driven by a
//! script in tests and by `dialoguer` on a real terminal.

use anyhow::Result;
use console::Term;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

use crate::alert::Alert;

pub trait Prompter {
    /// Pick one of `items`; `None` when the user backs out with Esc.
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>>;

    /// Free text, pre-filled with `initial`. Blank answers are allowed.
    fn input(&mut self, prompt: &str, initial: &str) -> Result<String>;

    /// Yes/no question. `true` means OK.
    fn confirm(&mut self, question: &Alert) -> Result<bool>;

    /// Information, warning and error dialogs.
    fn alert(&mut self, alert: &Alert) -> Result<()>;

    /// Plain output such as tables and form headers.
    fn show(&mut self, text: &str) -> Result<()>;
}

/// [`Prompter`] backed by the controlling terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
    term: Term,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            term: Term::stdout(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        let choice = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()?;
        Ok(choice)
    }

    fn input(&mut self, prompt: &str, initial: &str) -> Result<String> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()?;
        Ok(value)
    }

    fn confirm(&mut self, question: &Alert) -> Result<bool> {
        let prompt = match &question.header {
            Some(header) => format!("{header}: {}", question.message),
            None => question.message.clone(),
        };
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        Ok(answer)
    }

    fn alert(&mut self, alert: &Alert) -> Result<()> {
        self.term.write_line(&alert.render())?;
        Ok(())
    }

    fn show(&mut self, text: &str) -> Result<()> {
        self.term.write_line(text)?;
        Ok(())
    }
}
