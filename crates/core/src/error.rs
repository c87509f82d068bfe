//! Domain error model.

use thiserror::Error;

use crate::validation::Violations;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (parsing,
/// validation, invariants, blocked deletions). Terminal I/O belongs elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A form field could not be parsed as its expected type.
    ///
    /// Reported generically: the caller is told the form is malformed, not
    /// which field.
    #[error("form contains blank or malformed fields")]
    MalformedInput,

    /// One or more business rules rejected the candidate record.
    #[error("validation failed: {0}")]
    ValidationFailed(Violations),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A requested record or position does not exist.
    #[error("not found")]
    NotFound,

    /// The operation is blocked by an association between records.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// The accumulated violations, if this is a validation failure.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::ValidationFailed(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Violations> for DomainError {
    fn from(value: Violations) -> Self {
        Self::ValidationFailed(value)
    }
}
