//! Behavioral tests for the contact form component.
//!
//! Each test drives the component the way a user would (typing into
//! fields, clicking submit) and inspects the rendered markup.

use contact_form::render::{self, ERROR_TEST_ID};
use contact_form::{ContactForm, Field, ValidationRules};
use pretty_assertions::assert_eq;
use rstest::rstest;

const TITLE: &str = "Contact Form";

fn rendered(form: &ContactForm) -> String {
    render::component(form, TITLE).into_string()
}

fn error_elements(html: &str) -> usize {
    html.matches(&format!("data-testid=\"{}\"", ERROR_TEST_ID)).count()
}

#[test]
fn renders_without_errors() {
    let form = ContactForm::new();
    let html = rendered(&form);
    assert!(!html.is_empty());
}

#[test]
fn renders_the_contact_form_header() {
    let html = rendered(&ContactForm::new());
    assert!(html.contains("<h1>Contact Form</h1>"));
    assert_eq!(error_elements(&html), 0);
}

#[test]
fn one_error_when_first_name_is_too_short() {
    let mut form = ContactForm::new();
    form.type_text(Field::FirstName, "123");

    let html = rendered(&form);
    assert_eq!(error_elements(&html), 1);
    assert!(html.contains("firstName must have at least 5 characters"));
}

#[test]
fn three_errors_when_submitting_empty_form() {
    let mut form = ContactForm::new();
    form.submit();

    let html = rendered(&form);
    assert_eq!(error_elements(&html), 3);
    assert!(html.contains("firstName is required"));
    assert!(html.contains("lastName is a required field"));
    assert!(html.contains("email is required"));
}

#[test]
fn one_error_when_email_is_missing() {
    let mut form = ContactForm::new();
    form.type_text(Field::FirstName, "daniel");
    form.type_text(Field::LastName, "castillo");
    form.submit();

    let html = rendered(&form);
    assert_eq!(error_elements(&html), 1);
    assert!(html.contains("email is required"));
}

#[test]
fn invalid_email_message_while_typing() {
    let mut form = ContactForm::new();
    form.type_text(Field::Email, "daniel@gmail");

    let html = rendered(&form);
    assert!(html.contains("email must be a valid email address"));
    assert_eq!(error_elements(&html), 1);
}

#[test]
fn last_name_required_on_submit() {
    let mut form = ContactForm::new();
    form.submit();

    assert!(rendered(&form).contains("lastName is a required field"));
}

#[test]
fn renders_submitted_values_without_message() {
    let mut form = ContactForm::new();
    form.type_text(Field::FirstName, "daniel");
    form.type_text(Field::LastName, "castillo");
    form.type_text(Field::Email, "daniel@gmail.com");
    assert!(form.submit().is_accepted());

    let html = rendered(&form);
    assert!(html.contains("<span>daniel</span>"));
    assert!(html.contains("<span>castillo</span>"));
    assert!(html.contains("<span>daniel@gmail.com</span>"));
    assert!(!html.contains("messageDisplay"));
    assert_eq!(error_elements(&html), 0);
}

#[test]
fn renders_all_fields_when_all_are_submitted() {
    let mut form = ContactForm::new();
    form.type_text(Field::FirstName, "alejandro");
    form.type_text(Field::LastName, "cervantes");
    form.type_text(Field::Email, "ale@gmail.com");
    form.type_text(Field::Message, "message");
    assert!(form.submit().is_accepted());

    let html = rendered(&form);
    assert!(html.contains("<span>alejandro</span>"));
    assert!(html.contains("<span>cervantes</span>"));
    assert!(html.contains("<span>ale@gmail.com</span>"));
    assert!(html.contains("data-testid=\"messageDisplay\""));
    assert!(html.contains("<span>message</span>"));
}

#[test]
fn accepted_submit_clears_inputs() {
    let mut form = ContactForm::new();
    form.type_text(Field::FirstName, "alejandro");
    form.type_text(Field::LastName, "cervantes");
    form.type_text(Field::Email, "ale@gmail.com");
    form.submit();

    let html = rendered(&form);
    assert!(html.contains(r#"id="firstName" name="firstName" value="""#));
    assert!(html.contains(r#"id="email" name="email" value="""#));
}

#[test]
fn rendering_is_idempotent() {
    let mut form = ContactForm::new();
    form.type_text(Field::Email, "daniel@gmail");
    assert_eq!(rendered(&form), rendered(&form));
}

#[rstest]
#[case("", 3)]
#[case("daniel", 2)]
#[case("dan", 3)]
fn error_count_on_submit_depends_on_first_name(#[case] first_name: &str, #[case] expected: usize) {
    let mut form = ContactForm::new();
    form.change(Field::FirstName, first_name);
    form.type_text(Field::Message, "only a message");
    form.submit();

    assert_eq!(form.error_count(), expected);
    assert_eq!(error_elements(&rendered(&form)), expected);
}

#[rstest]
#[case("daniel@gmail", Some("email must be a valid email address"))]
#[case("daniel@gmail.", Some("email must be a valid email address"))]
#[case("daniel.gmail.com", Some("email must be a valid email address"))]
#[case("daniel@gmail.com", None)]
fn email_format_feedback(#[case] email: &str, #[case] expected: Option<&str>) {
    let mut form = ContactForm::new();
    form.change(Field::Email, email);

    let message = form.errors().get(Field::Email).map(|e| e.to_string());
    assert_eq!(message.as_deref(), expected);
}

#[test]
fn custom_minimum_length_applies_to_first_name() {
    let mut form = ContactForm::with_rules(ValidationRules { first_name_min_length: 2 });
    form.type_text(Field::FirstName, "Al");
    assert_eq!(form.error_count(), 0);
}
