//! Domain error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// A text field that must be non-empty before a record is accepted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequiredField {
    Id,
    CustomerName,
    ProductName,
}

impl RequiredField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::Id => "id",
            RequiredField::CustomerName => "customerName",
            RequiredField::ProductName => "productName",
        }
    }
}

impl core::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input rejected before it could touch the collection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field was empty.
    #[error("missing required field `{0}`")]
    MissingField(RequiredField),

    /// A record with this id already exists.
    #[error("duplicate id `{0}`")]
    DuplicateId(String),
}

/// Domain-level error.
///
/// Every variant is recoverable: the operation that produced it left state unchanged,
/// and the caller decides how to surface it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A candidate record failed validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The targeted record does not exist.
    #[error("no record with id `{0}`")]
    NotFound(String),
}

impl DomainError {
    pub fn missing_field(field: RequiredField) -> Self {
        Self::Validation(ValidationError::MissingField(field))
    }

    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::Validation(ValidationError::DuplicateId(id.into()))
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// True for failures the user can fix by correcting the form.
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(
            DomainError::missing_field(RequiredField::CustomerName).to_string(),
            "validation failed: missing required field `customerName`"
        );
        assert_eq!(
            DomainError::duplicate_id("HD001").to_string(),
            "validation failed: duplicate id `HD001`"
        );
        assert_eq!(
            DomainError::not_found("NOPE").to_string(),
            "no record with id `NOPE`"
        );
    }

    #[test]
    fn validation_errors_convert_into_domain_errors() {
        let err: DomainError = ValidationError::DuplicateId("HD002".to_string()).into();
        assert!(err.is_validation());
        assert!(!DomainError::not_found("HD002").is_validation());
    }
}
