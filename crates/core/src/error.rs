//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Identifiers can only fail on the way *in* (malformed text). Equality,
/// ordering, hashing and rendering never fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A candidate string violated a format constraint.
    ///
    /// Carries the argument name and the rejected value so a calling layer
    /// (e.g. a form-submission handler) can surface a precise message.
    #[error("the argument '{name}' is not valid: '{value}'")]
    ConstraintViolation { name: String, value: String },

    /// An identifier string could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn constraint_violation(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ConstraintViolation {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_violation_message_names_argument_and_value() {
        let err = DomainError::constraint_violation("order_id", "not-a-uuid");
        assert_eq!(
            err.to_string(),
            "the argument 'order_id' is not valid: 'not-a-uuid'"
        );
    }

    #[test]
    fn invalid_id_message() {
        let err = DomainError::invalid_id("OrderId: bad length");
        assert_eq!(err.to_string(), "invalid identifier: OrderId: bad length");
    }
}
