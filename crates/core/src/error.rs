//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Deterministic business failures only (validation, invariants, lookups).
/// Collaborator failures such as an unreachable catalog or a rejected
/// submission have their own error types in the crates that define them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a required form field is empty).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A referenced item does not exist (e.g. a product id absent from the basket).
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Whether this error is a lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_the_missing_item() {
        let err = DomainError::not_found("product 'X'");
        assert_eq!(err.to_string(), "not found: product 'X'");
        assert!(err.is_not_found());
    }

    #[test]
    fn validation_is_not_a_lookup_miss() {
        let err = DomainError::validation("name is required");
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "validation failed: name is required");
    }
}
