// File: src/form_data.rs
// Purpose: Posted request bodies (url-encoded or JSON) as trimmed field values

use crate::error::FormError;
use crate::field::Field;
use crate::form::FormState;
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// Form data from POST requests
#[derive(Debug, Clone, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
}

impl FormData {
    /// Create empty form data
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from form fields with automatic trimming
    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        let fields = fields
            .into_iter()
            .map(|(k, v)| (k, v.trim().to_string()))
            .collect();

        Self { fields }
    }

    /// Parse an `application/x-www-form-urlencoded` body
    pub fn from_urlencoded(body: &str) -> Self {
        let fields = body
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(k), decode_component(v))
            })
            .collect();

        Self::from_fields(fields)
    }

    /// Create from a JSON object; non-string values keep their JSON text
    pub fn from_json(json: &JsonValue) -> Self {
        let mut fields = HashMap::new();

        if let JsonValue::Object(map) = json {
            for (key, value) in map {
                let text = match value {
                    JsonValue::String(s) => s.clone(),
                    JsonValue::Null => String::new(),
                    other => other.to_string(),
                };
                fields.insert(key.clone(), text);
            }
        }

        Self::from_fields(fields)
    }

    /// Parse a request body according to its content type.
    ///
    /// Anything that is not JSON is treated as url-encoded.
    pub fn from_body(content_type: Option<&str>, body: &[u8]) -> Result<Self, FormError> {
        match content_type {
            Some(ct) if ct.contains("application/json") => {
                let json: JsonValue = serde_json::from_slice(body)?;
                Ok(Self::from_json(&json))
            }
            _ => Ok(Self::from_urlencoded(&String::from_utf8_lossy(body))),
        }
    }

    /// Get a form field value
    pub fn get(&self, key: &str) -> Option<&String> {
        self.fields.get(key)
    }

    /// Value posted for a field, empty when absent
    pub fn value(&self, field: Field) -> &str {
        self.get(field.name()).map(String::as_str).unwrap_or("")
    }

    /// Check if a field exists
    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Check if form is empty
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Collect the four contact fields; missing ones become empty strings
    pub fn to_form_state(&self) -> FormState {
        let mut state = FormState::default();
        for field in Field::ALL {
            state.set(field, self.value(field));
        }
        state
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(spaced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_form_data_empty() {
        let form = FormData::new();
        assert!(form.is_empty());
        assert_eq!(form.to_form_state(), FormState::default());
    }

    #[test]
    fn test_form_data_trimming() {
        let mut fields = HashMap::new();
        fields.insert("firstName".to_string(), "  daniel  ".to_string());
        fields.insert("email".to_string(), "\tdaniel@gmail.com\n".to_string());

        let form = FormData::from_fields(fields);

        assert_eq!(form.get("firstName"), Some(&"daniel".to_string()));
        assert_eq!(form.value(Field::Email), "daniel@gmail.com");
    }

    #[test]
    fn test_urlencoded_decoding() {
        let form = FormData::from_urlencoded(
            "firstName=alejandro&lastName=cervantes&email=ale%40gmail.com&message=hello+there",
        );

        assert_eq!(
            form.to_form_state(),
            FormState::new("alejandro", "cervantes", "ale@gmail.com", "hello there")
        );
    }

    #[test]
    fn test_urlencoded_keeps_empty_values() {
        let form = FormData::from_urlencoded("firstName=&lastName");
        assert!(form.has("firstName"));
        assert!(form.has("lastName"));
        assert_eq!(form.value(Field::FirstName), "");
        assert!(!form.has("email"));
    }

    #[test]
    fn test_json_body() {
        let form = FormData::from_body(
            Some("application/json"),
            br#"{"firstName":"daniel","lastName":null,"email":" daniel@gmail.com "}"#,
        )
        .unwrap();

        assert_eq!(form.value(Field::FirstName), "daniel");
        assert_eq!(form.value(Field::LastName), "");
        assert_eq!(form.value(Field::Email), "daniel@gmail.com");
    }

    #[test]
    fn test_malformed_json_body() {
        let err = FormData::from_body(Some("application/json"), b"{not json").unwrap_err();
        assert!(matches!(err, FormError::MalformedBody(_)));
    }

    #[test]
    fn test_body_without_content_type_is_urlencoded() {
        let form = FormData::from_body(None, b"email=x%40y.io").unwrap();
        assert_eq!(form.value(Field::Email), "x@y.io");
    }
}
