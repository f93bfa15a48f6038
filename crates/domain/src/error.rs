//! Unified error types for the domain layer
//!
//! Only construction of value types can fail. Matching and vocabulary
//! derivation are total over well-typed inputs and never return errors.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., empty description, malformed kind tag)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for grammar templates)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for invariant violations.
    ///
    /// Use this when a value object cannot be constructed:
    /// - Required text is empty after tokenizing
    /// - A tag contains characters outside the word alphabet
    ///
    /// # Example
    /// ```ignore
    /// if words.is_empty() {
    ///     return Err(DomainError::validation("Object description cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-template conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("description cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: description cannot be empty"
        );
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("template cannot start with a slot");
        assert!(matches!(err, DomainError::Parse(_)));
        assert_eq!(
            err.to_string(),
            "Parse error: template cannot start with a slot"
        );
    }
}
