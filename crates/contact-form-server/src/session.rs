// File: src/session.rs
// Purpose: One contact form component per browser session, keyed by cookie

use axum::http::HeaderMap;
use contact_form::{ContactForm, ValidationRules};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Cookie carrying the session id
pub const SESSION_COOKIE: &str = "contact_session";

/// Session resolved for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub id: Uuid,
    /// True when the request carried no usable session and a new one was started
    pub created: bool,
}

impl Session {
    /// `Set-Cookie` value for this session
    pub fn cookie(&self) -> String {
        format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, self.id)
    }
}

/// Bounds on the number and lifetime of stored sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    pub max_sessions: usize,
    /// Sessions untouched for longer than this are dropped
    pub idle_timeout: Duration,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            max_sessions: 10_000,
            idle_timeout: Duration::from_secs(30 * 60),
        }
    }
}

struct SessionEntry {
    form: ContactForm,
    last_seen: Instant,
}

/// In-memory component state for every session
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, SessionEntry>>,
    rules: ValidationRules,
    limits: SessionLimits,
}

impl SessionStore {
    pub fn new(rules: ValidationRules, limits: SessionLimits) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            rules,
            limits,
        }
    }

    /// Session id from the Cookie header, if present and well-formed
    pub fn session_id(headers: &HeaderMap) -> Option<Uuid> {
        parse_cookies(headers)
            .get(SESSION_COOKIE)
            .and_then(|raw| Uuid::parse_str(raw).ok())
    }

    /// Run `f` against the session's component, creating it when unknown or expired
    pub async fn with_form<R>(
        &self,
        id: Option<Uuid>,
        f: impl FnOnce(&mut ContactForm) -> R,
    ) -> (Session, R) {
        let mut sessions = self.sessions.write().await;
        let now = Instant::now();

        let live = id.filter(|id| {
            sessions
                .get(id)
                .is_some_and(|entry| now.duration_since(entry.last_seen) <= self.limits.idle_timeout)
        });

        let session = match live {
            Some(id) => Session { id, created: false },
            None => {
                self.make_room(&mut sessions, now);
                let id = Uuid::new_v4();
                tracing::debug!(session = %id, "Started contact form session");
                Session { id, created: true }
            }
        };

        let entry = sessions.entry(session.id).or_insert_with(|| SessionEntry {
            form: ContactForm::with_rules(self.rules),
            last_seen: now,
        });
        entry.last_seen = now;
        let result = f(&mut entry.form);
        (session, result)
    }

    /// Replace the session's component with a fresh one
    pub async fn reset<R>(
        &self,
        id: Option<Uuid>,
        f: impl FnOnce(&mut ContactForm) -> R,
    ) -> (Session, R) {
        self.with_form(id, |form| {
            *form = ContactForm::with_rules(*form.rules());
            f(form)
        })
        .await
    }

    /// Number of stored sessions
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drop idle sessions, then the least recently used ones until a new session fits
    fn make_room(&self, sessions: &mut HashMap<Uuid, SessionEntry>, now: Instant) {
        let idle_timeout = self.limits.idle_timeout;
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) <= idle_timeout);

        let max = self.limits.max_sessions.max(1);
        while sessions.len() >= max {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| *id);
            match oldest {
                Some(id) => {
                    sessions.remove(&id);
                    tracing::debug!(session = %id, "Evicted contact form session");
                }
                None => break,
            }
        }
    }
}

/// Parse cookies from Cookie header
fn parse_cookies(headers: &HeaderMap) -> HashMap<String, String> {
    let mut cookies = HashMap::new();

    if let Some(cookie_header) = headers.get("cookie") {
        if let Ok(cookie_str) = cookie_header.to_str() {
            for cookie in cookie_str.split(';') {
                let cookie = cookie.trim();
                if let Some((key, value)) = cookie.split_once('=') {
                    cookies.insert(key.to_string(), value.to_string());
                }
            }
        }
    }

    cookies
}
