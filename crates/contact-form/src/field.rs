// File: src/field.rs
// Purpose: The four inputs of the contact form and their DOM metadata

use crate::error::FormError;
use std::fmt;
use std::str::FromStr;

/// One labeled input of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 4] = [Field::FirstName, Field::LastName, Field::Email, Field::Message];

    /// Name used for the `name`/`id` attributes and in error messages
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Visible label text
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name*",
            Field::LastName => "Last Name*",
            Field::Email => "Email*",
            Field::Message => "Message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Field::Message)
    }

    /// `inputmode` keyboard hint. Inputs stay `type="text"` so the browser
    /// never blocks a submit with its own constraint validation.
    pub fn input_mode(self) -> &'static str {
        match self {
            Field::Email => "email",
            _ => "text",
        }
    }

    /// Resolve a wire name (`firstName`, `lastName`, ...) into a field
    pub fn parse(name: &str) -> Result<Self, FormError> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        assert_eq!(Field::parse("firstName").unwrap(), Field::FirstName);
        assert_eq!(Field::parse("lastName").unwrap(), Field::LastName);
        assert_eq!("email".parse::<Field>().unwrap(), Field::Email);
        assert_eq!("message".parse::<Field>().unwrap(), Field::Message);
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = Field::parse("phone").unwrap_err();
        assert_eq!(err.to_string(), "Unknown form field: phone");
        // Wire names are case-sensitive
        assert!(Field::parse("firstname").is_err());
    }

    #[test]
    fn test_only_message_is_optional() {
        let required: Vec<Field> = Field::ALL.into_iter().filter(|f| f.is_required()).collect();
        assert_eq!(required, vec![Field::FirstName, Field::LastName, Field::Email]);
    }
}
