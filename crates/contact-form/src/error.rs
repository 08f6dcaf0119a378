// File: src/error.rs
// Purpose: Validation error taxonomy and form-level errors

use crate::field::Field;
use thiserror::Error;

/// A single field's validation failure. `Display` is the inline message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", required_message(*field))]
    Required { field: Field },

    #[error("{field} must have at least {min} characters")]
    TooShort { field: Field, min: usize },

    #[error("{field} must be a valid email address")]
    InvalidFormat { field: Field },
}

impl ValidationError {
    /// Field the error belongs to
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::InvalidFormat { field } => *field,
        }
    }
}

fn required_message(field: Field) -> String {
    match field {
        Field::LastName => format!("{} is a required field", field),
        _ => format!("{} is required", field),
    }
}

/// Errors raised outside of validation (bad requests against the form)
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Malformed form body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}
