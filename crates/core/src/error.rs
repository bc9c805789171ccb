//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: operations that fail leave state untouched
/// and the caller decides how to report it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The referenced item does not exist.
    #[error("item with ID: {0} not found")]
    NotFound(String),

    /// An argument was rejected before any state was mutated.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_id() {
        let err = DomainError::not_found("104");
        assert_eq!(err, DomainError::NotFound("104".to_string()));
        assert_eq!(err.to_string(), "item with ID: 104 not found");
    }

    #[test]
    fn invalid_argument_carries_message() {
        let err = DomainError::invalid_argument("quantity cannot be negative");
        assert_eq!(err.to_string(), "invalid argument: quantity cannot be negative");
    }
}
