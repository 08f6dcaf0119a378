// Contact Form - server-rendered HTMX component
// Field validation, component state and Maud markup for a four-field contact form

pub mod config;
pub mod error;
pub mod field;
pub mod form;
pub mod form_data;
pub mod render;
pub mod validation;

pub use config::Config;
pub use error::{FormError, ValidationError};
pub use field::Field;
pub use form::{ContactForm, FormState, SubmitOutcome};
pub use form_data::FormData;
pub use validation::{validate_all, validate_field, ErrorState, ValidationRules};

// Re-export Maud for callers composing pages
pub use maud::Markup;
