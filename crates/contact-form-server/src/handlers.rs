// File: src/handlers.rs
// Purpose: HTTP handlers driving the contact form component

use crate::session::{Session, SessionLimits, SessionStore};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use contact_form::config::FormConfig;
use contact_form::{render, Field, FormData, FormState, SubmitOutcome};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub form: Arc<FormConfig>,
}

impl AppState {
    pub fn new(form: FormConfig, limits: SessionLimits) -> Self {
        Self {
            sessions: Arc::new(SessionStore::new(form.rules(), limits)),
            form: Arc::new(form),
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/contact/change/:field", post(change_handler))
        .route("/contact/submit", post(submit_handler))
        .route("/contact/reset", post(reset_handler))
        .route("/health", get(|| async { "ok" }))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// JSON body returned to `Accept: application/json` submits
#[derive(Debug, Serialize)]
pub struct SubmitSummary {
    pub accepted: bool,
    pub errors: BTreeMap<String, String>,
    pub submitted: Option<FormState>,
}

async fn index_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let id = SessionStore::session_id(&headers);
    let (session, markup) = state
        .sessions
        .with_form(id, |form| render::page(form, &state.form.title))
        .await;

    with_session(Html(markup.into_string()).into_response(), session)
}

/// One keystroke: store the field's value and return its error slot
async fn change_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let field = match Field::parse(&name) {
        Ok(field) => field,
        Err(e) => {
            warn!("Rejected change: {}", e);
            return error_response(StatusCode::NOT_FOUND, "Unknown Field", &e.to_string());
        }
    };

    let data = match FormData::from_body(content_type(&headers), &body) {
        Ok(data) => data,
        Err(e) => {
            warn!("Rejected change for {}: {}", field, e);
            return error_response(StatusCode::BAD_REQUEST, "Bad Request", &e.to_string());
        }
    };

    let id = SessionStore::session_id(&headers);
    let (session, markup) = state
        .sessions
        .with_form(id, |form| {
            form.change(field, data.value(field));
            render::field_error(form, field)
        })
        .await;

    with_session(Html(markup.into_string()).into_response(), session)
}

async fn submit_handler(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let data = match FormData::from_body(content_type(&headers), &body) {
        Ok(data) => data,
        Err(e) => {
            warn!("Rejected submit: {}", e);
            return error_response(StatusCode::BAD_REQUEST, "Bad Request", &e.to_string());
        }
    };

    let id = SessionStore::session_id(&headers);
    let title = state.form.title.as_str();
    let wants_json = accepts_json(&headers);
    let is_htmx = headers.contains_key("hx-request");

    let (session, response) = state
        .sessions
        .with_form(id, |form| {
            let outcome = form.submit_values(data.to_form_state());

            if wants_json {
                let summary = SubmitSummary {
                    accepted: outcome.is_accepted(),
                    errors: form.errors().to_messages(),
                    submitted: form.submitted().cloned(),
                };
                let status = match outcome {
                    SubmitOutcome::Accepted(_) => StatusCode::OK,
                    SubmitOutcome::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
                };
                return (status, Json(summary)).into_response();
            }

            let markup = if is_htmx {
                render::component(form, title)
            } else {
                render::page(form, title)
            };
            Html(markup.into_string()).into_response()
        })
        .await;

    info!(session = %session.id, "Handled contact form submit");
    with_session(response, session)
}

async fn reset_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let id = SessionStore::session_id(&headers);
    let (session, markup) = state
        .sessions
        .reset(id, |form| render::component(form, &state.form.title))
        .await;

    with_session(Html(markup.into_string()).into_response(), session)
}

fn content_type(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::CONTENT_TYPE)?.to_str().ok()
}

/// Check if request accepts JSON
fn accepts_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|accept| accept.to_str().ok())
        .map(|accept| accept.contains("application/json"))
        .unwrap_or(false)
}

/// Attach the session cookie when the session was just created
fn with_session(mut response: Response, session: Session) -> Response {
    if session.created {
        if let Ok(cookie) = HeaderValue::from_str(&session.cookie()) {
            response.headers_mut().insert(header::SET_COOKIE, cookie);
        }
    }
    response
}

fn error_response(status: StatusCode, title: &str, message: &str) -> Response {
    let markup = maud::html! {
        (maud::DOCTYPE)
        html {
            head { title { (title) } }
            body {
                h1 { (status.as_u16()) " " (title) }
                p { (message) }
                a href="/" { "Go Home" }
            }
        }
    };
    (status, Html(markup.into_string())).into_response()
}
