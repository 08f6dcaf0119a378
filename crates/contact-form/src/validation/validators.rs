// File: src/validation/validators.rs
// Purpose: Primitive string checks used by the field rules

use once_cell::sync::Lazy;
use regex::Regex;

// local@domain.tld, TLD of two or more letters
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)*\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// True when the value is empty once surrounding whitespace is removed
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Length in characters, not bytes
pub fn char_length(value: &str) -> usize {
    value.chars().count()
}

pub fn meets_min_length(value: &str, min: usize) -> bool {
    char_length(value) >= min
}
