// File: src/render.rs
// Purpose: Maud markup for the contact form component

use crate::field::Field;
use crate::form::{ContactForm, FormState};
use maud::{html, Markup, DOCTYPE};

/// Marker attribute value on every inline error element
pub const ERROR_TEST_ID: &str = "error";

/// Id of the element HTMX swaps on submit
pub const COMPONENT_ID: &str = "contact-component";

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

/// Id of a field's error slot
pub fn error_slot_id(field: Field) -> String {
    format!("{}-error", field.name())
}

/// Route that receives keystrokes for a field
pub fn change_url(field: Field) -> String {
    format!("/contact/change/{}", field.name())
}

/// Full HTML document around the component
pub fn page(form: &ContactForm, title: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                script src=(HTMX_SRC) {}
            }
            body {
                (component(form, title))
            }
        }
    }
}

/// The component: header, inputs with error slots, submit button, submitted values
pub fn component(form: &ContactForm, title: &str) -> Markup {
    html! {
        div id=(COMPONENT_ID) class="contact-form" {
            form method="post" action="/contact/submit" novalidate
                hx-post="/contact/submit"
                hx-target={ "#" (COMPONENT_ID) }
                hx-swap="outerHTML" {
                h1 { (title) }
                @for field in Field::ALL {
                    (field_group(form, field))
                }
                button type="submit" { "Submit" }
            }
            @if let Some(submitted) = form.submitted() {
                (submitted_display(submitted))
            }
        }
    }
}

fn field_group(form: &ContactForm, field: Field) -> Markup {
    let value = form.values().get(field);

    html! {
        div class="field" {
            label for=(field.name()) { (field.label()) }
            @if field == Field::Message {
                textarea id=(field.name()) name=(field.name())
                    hx-post=(change_url(field))
                    hx-trigger="input changed"
                    hx-target={ "#" (error_slot_id(field)) }
                    hx-swap="outerHTML" { (value) }
            } @else {
                input type="text" id=(field.name()) name=(field.name()) value=(value)
                    inputmode=(field.input_mode())
                    hx-post=(change_url(field))
                    hx-trigger="input changed"
                    hx-target={ "#" (error_slot_id(field)) }
                    hx-swap="outerHTML";
            }
            (field_error(form, field))
        }
    }
}

/// A field's error slot, holding one error element or nothing
pub fn field_error(form: &ContactForm, field: Field) -> Markup {
    html! {
        div id=(error_slot_id(field)) class="error-slot" {
            @if let Some(err) = form.errors().get(field) {
                p class="error" data-testid=(ERROR_TEST_ID) { "Error: " (err.to_string()) }
            }
        }
    }
}

fn submitted_display(submitted: &FormState) -> Markup {
    html! {
        div class="submitted" data-testid="submitted" {
            h2 { "You Submitted:" }
            p data-testid="firstnameDisplay" {
                span class="display-label" { "First Name: " }
                span { (submitted.first_name) }
            }
            p data-testid="lastnameDisplay" {
                span class="display-label" { "Last Name: " }
                span { (submitted.last_name) }
            }
            p data-testid="emailDisplay" {
                span class="display-label" { "Email: " }
                span { (submitted.email) }
            }
            @if submitted.has_message() {
                p data-testid="messageDisplay" {
                    span class="display-label" { "Message: " }
                    span { (submitted.message) }
                }
            }
        }
    }
}
