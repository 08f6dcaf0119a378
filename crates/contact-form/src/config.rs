// File: src/config.rs
// Purpose: Configuration parsing from contact.toml

use crate::validation::{ValidationRules, DEFAULT_FIRST_NAME_MIN_LENGTH};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Default config file name
pub const DEFAULT_CONFIG_PATH: &str = "contact.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub form: FormConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    /// Upper bound on concurrently stored form sessions
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    /// Seconds of inactivity after which a session is dropped
    #[serde(default = "default_session_idle_secs")]
    pub session_idle_secs: u64,
}

/// Contact form configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Header text (default: "Contact Form")
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_first_name_min_length")]
    pub first_name_min_length: usize,
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_sessions() -> usize {
    10_000
}

fn default_session_idle_secs() -> u64 {
    30 * 60
}

fn default_title() -> String {
    "Contact Form".to_string()
}

fn default_first_name_min_length() -> usize {
    DEFAULT_FIRST_NAME_MIN_LENGTH
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            max_sessions: default_max_sessions(),
            session_idle_secs: default_session_idle_secs(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            first_name_min_length: default_first_name_min_length(),
        }
    }
}

impl FormConfig {
    pub fn rules(&self) -> ValidationRules {
        ValidationRules {
            first_name_min_length: self.first_name_min_length,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from `CONTACT_CONFIG` or ./contact.toml, then apply env overrides
    pub fn load_default() -> Self {
        let path = std::env::var("CONTACT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::resolve(path, |key| std::env::var(key).ok())
    }

    /// File (or defaults when it cannot be loaded) with env overrides on top.
    ///
    /// A bad override is logged and skipped; it never discards the file's settings.
    pub fn resolve<F>(path: impl AsRef<Path>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::load(path).unwrap_or_else(|e| {
            warn!("Failed to load config: {:#}, using defaults", e);
            Self::default()
        });

        if let Err(e) = config.apply_env_overrides(lookup) {
            warn!("Ignoring environment override: {:#}", e);
        }

        config
    }

    /// Override server settings from `CONTACT_HOST` / `CONTACT_PORT`
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("CONTACT_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("CONTACT_PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("Invalid CONTACT_PORT: {:?}", port))?;
        }
        Ok(())
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
