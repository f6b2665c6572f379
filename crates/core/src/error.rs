//! Domain error model.

use thiserror::Error;

use crate::validation::Violations;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Entities never produce these on their own; they are raised by callers
/// that decide a validation outcome is fatal for the enclosing operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more field constraints failed under the active operation.
    #[error("validation failed: {0}")]
    Validation(Violations),

    /// An operation name could not be parsed.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
}

impl DomainError {
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation(name.into())
    }

    /// Violations carried by a validation failure, if any.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::Validation(v) => Some(v),
            _ => None,
        }
    }
}
