// File: src/validation/mod.rs
// Purpose: Per-field rules and the error state they produce

use crate::error::ValidationError;
use crate::field::Field;
use crate::form::FormState;
use std::collections::BTreeMap;

pub mod validators;

/// Default minimum length of the first name
pub const DEFAULT_FIRST_NAME_MIN_LENGTH: usize = 5;

/// Tunable parameters of the field rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub first_name_min_length: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            first_name_min_length: DEFAULT_FIRST_NAME_MIN_LENGTH,
        }
    }
}

/// Check one field's value against its rule.
///
/// The value is trimmed first. The first failing check wins, so a field
/// reports at most one error.
pub fn validate_field(
    field: Field,
    value: &str,
    rules: &ValidationRules,
) -> Result<(), ValidationError> {
    let value = value.trim();

    if field.is_required() && validators::is_blank(value) {
        return Err(ValidationError::Required { field });
    }

    match field {
        Field::FirstName if !validators::meets_min_length(value, rules.first_name_min_length) => {
            Err(ValidationError::TooShort {
                field,
                min: rules.first_name_min_length,
            })
        }
        Field::Email if !validators::is_valid_email(value) => {
            Err(ValidationError::InvalidFormat { field })
        }
        _ => Ok(()),
    }
}

/// Validate every field of a form state
pub fn validate_all(values: &FormState, rules: &ValidationRules) -> ErrorState {
    let mut errors = ErrorState::new();
    for field in Field::ALL {
        errors.apply(field, validate_field(field, values.get(field), rules));
    }
    errors
}

/// Current error per field. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState {
    errors: BTreeMap<Field, ValidationError>,
}

impl ErrorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of validating `field`: set on failure, clear on success
    pub fn apply(&mut self, field: Field, outcome: Result<(), ValidationError>) {
        match outcome {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(err) => {
                self.errors.insert(field, err);
            }
        }
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Get the error for a field
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// Inline message for a field, empty string when the field is valid
    pub fn message(&self, field: Field) -> String {
        self.get(field).map(|e| e.to_string()).unwrap_or_default()
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors in field display order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.errors.iter().map(|(field, err)| (*field, err))
    }

    /// Field names to messages, for JSON responses
    pub fn to_messages(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(field, err)| (field.name().to_string(), err.to_string()))
            .collect()
    }
}
