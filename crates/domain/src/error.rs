//! Unified error types for the domain layer
//!
//! Budget violations are never errors: they are reported as data by the
//! budget validator. `DomainError` covers misuse of the core API, such as
//! addressing a trait that does not exist or parsing an unknown category.

use thiserror::Error;

use crate::types::TraitKind;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A fixed-set trait (attribute or skill) was addressed by an unknown name
    #[error("Unknown {kind} trait: {name}")]
    UnknownTrait { kind: TraitKind, name: String },

    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Business rule violation
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Parse error (for vocabulary types)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Create an unknown trait error
    pub fn unknown_trait(kind: TraitKind, name: impl Into<String>) -> Self {
        Self::UnknownTrait {
            kind,
            name: name.into(),
        }
    }

    /// Creates a validation error for malformed input.
    ///
    /// # Example
    /// ```ignore
    /// if name.trim().is_empty() {
    ///     return Err(DomainError::validation("Trait name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a constraint violation error
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Check if this error refers to an unknown trait.
    pub fn is_unknown_trait(&self) -> bool {
        matches!(self, Self::UnknownTrait { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_trait_error() {
        let err = DomainError::unknown_trait(TraitKind::Skill, "basket_weaving");
        assert!(err.is_unknown_trait());
        assert_eq!(err.to_string(), "Unknown skill trait: basket_weaving");
    }

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("name cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: name cannot be empty");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown category: spiritual");
        assert!(!err.is_unknown_trait());
        assert_eq!(err.to_string(), "Parse error: Unknown category: spiritual");
    }
}
