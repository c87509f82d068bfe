//! Typed alert dialogs.

use console::style;

use stockroom_core::DomainError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AlertKind {
    Information,
    Warning,
    Error,
    Confirmation,
}

/// A message box: informational, warning, error, or a yes/no question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub header: Option<String>,
    pub message: String,
}

impl Alert {
    pub fn new(kind: AlertKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            header: None,
            message: message.into(),
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn information(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertKind::Information, title, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Warning, "Warning", message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertKind::Error, title, message)
    }

    pub fn confirmation(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Confirmation, "Confirmation", message)
    }

    pub fn part_not_found() -> Self {
        Self::information("Search", "The search term entered does not match any known parts.")
    }

    pub fn product_not_found() -> Self {
        Self::information(
            "Search",
            "The search term entered does not match any known products.",
        )
    }

    pub fn selection_error(message: impl Into<String>) -> Self {
        Self::error("Selection", message)
    }

    /// Map a rejected command to the alert shown on the form that issued it.
    pub fn from_error(header: &str, err: &DomainError) -> Self {
        let message = match err {
            DomainError::MalformedInput => "Form contains blank or invalid fields.".to_string(),
            DomainError::ValidationFailed(violations) => violations.to_string(),
            DomainError::NotFound => "The selected record no longer exists.".to_string(),
            DomainError::Conflict(msg) | DomainError::InvariantViolation(msg) => msg.clone(),
        };
        Self::error("Error", message).with_header(header)
    }

    /// Styled text for the terminal.
    pub fn render(&self) -> String {
        let badge = match self.kind {
            AlertKind::Information => style("i").cyan().bold(),
            AlertKind::Warning => style("!").yellow().bold(),
            AlertKind::Error => style("x").red().bold(),
            AlertKind::Confirmation => style("?").cyan().bold(),
        };
        let mut out = format!("{badge} {}", style(&self.title).bold());
        if let Some(header) = &self.header {
            out.push_str(&format!(": {header}"));
        }
        out.push_str(&format!("\n  {}", self.message));
        out
    }
}
