// File: src/form.rs
// Purpose: Contact form component state and its change/submit transitions

use crate::field::Field;
use crate::validation::{self, ErrorState, ValidationRules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Values of the four inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FormState {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Current value of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// True when a message was entered
    pub fn has_message(&self) -> bool {
        !self.message.trim().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|field| self.get(field).is_empty())
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All rules passed; carries the snapshot now on display
    Accepted(FormState),
    /// At least one rule failed; carries the failing fields
    Rejected(ErrorState),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// The contact form component
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    rules: ValidationRules,
    values: FormState,
    errors: ErrorState,
    submitted: Option<FormState>,
}

impl ContactForm {
    /// Create an empty form with the default rules
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: ValidationRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    /// Store a new value for `field` and re-validate that field only
    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        let outcome = validation::validate_field(field, self.values.get(field), &self.rules);
        debug!(field = %field, valid = outcome.is_ok(), "Field changed");
        self.errors.apply(field, outcome);
    }

    /// Append `text` one character at a time, as a user typing would
    pub fn type_text(&mut self, field: Field, text: &str) {
        for ch in text.chars() {
            let mut next = self.values.get(field).to_string();
            next.push(ch);
            self.change(field, next);
        }
    }

    /// Validate every field; on success snapshot and clear the form
    pub fn submit(&mut self) -> SubmitOutcome {
        let errors = validation::validate_all(&self.values, &self.rules);

        if errors.has_errors() {
            debug!(errors = errors.len(), "Submit rejected");
            self.errors = errors.clone();
            return SubmitOutcome::Rejected(errors);
        }

        let snapshot = std::mem::take(&mut self.values);
        info!(message = snapshot.has_message(), "Contact form submitted");
        self.errors.clear();
        self.submitted = Some(snapshot.clone());
        SubmitOutcome::Accepted(snapshot)
    }

    /// Replace all values (e.g. from a posted form) and submit
    pub fn submit_values(&mut self, values: FormState) -> SubmitOutcome {
        self.values = values;
        self.submit()
    }

    pub fn values(&self) -> &FormState {
        &self.values
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    /// Number of fields currently showing an error
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Snapshot of the last accepted submit, if any
    pub fn submitted(&self) -> Option<&FormState> {
        self.submitted.as_ref()
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }
}
