//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object and problem construction.
///
/// The calculation pipeline itself is total and never returns an error;
/// everything that can be invalid is rejected here, before a computation
/// is attempted.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("Invalid triangular number: {reason}")]
    InvalidTriangle { reason: String },

    #[error("Duplicate term code '{code}' in vocabulary")]
    DuplicateTermCode { code: String },

    #[error("Vocabulary needs at least {minimum} terms, got {actual}")]
    TooFewTerms { minimum: usize, actual: usize },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: usize, max: usize, actual: usize) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid triangular number error.
    pub fn invalid_triangle(reason: impl Into<String>) -> Self {
        ValidationError::InvalidTriangle { reason: reason.into() }
    }

    /// Creates a duplicate term code error.
    pub fn duplicate_term_code(code: impl Into<String>) -> Self {
        ValidationError::DuplicateTermCode { code: code.into() }
    }

    /// Creates a too few terms error.
    pub fn too_few_terms(minimum: usize, actual: usize) -> Self {
        ValidationError::TooFewTerms { minimum, actual }
    }
}
