//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction and sequence validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Sequence has no items")]
    EmptySequence,

    #[error("Item at index {index} is out of lifecycle order")]
    NonMonotonic { index: usize },

    #[error("Sequence has more than one current item (indices {first} and {second})")]
    MultipleCurrent { first: usize, second: usize },

    #[error("Unknown reminder channel '{value}'")]
    UnknownChannel { value: String },

    #[error("Cannot transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a non-monotonic sequence error for the offending index.
    pub fn non_monotonic(index: usize) -> Self {
        ValidationError::NonMonotonic { index }
    }

    /// Creates a multiple-current sequence error for the two offending indices.
    pub fn multiple_current(first: usize, second: usize) -> Self {
        ValidationError::MultipleCurrent { first, second }
    }

    /// Creates an unknown channel error.
    pub fn unknown_channel(value: impl Into<String>) -> Self {
        ValidationError::UnknownChannel { value: value.into() }
    }

    /// Creates an invalid state transition error.
    pub fn invalid_transition(from: impl ToString, to: impl ToString) -> Self {
        ValidationError::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
