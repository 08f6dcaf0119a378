mod handlers;
mod session;

use anyhow::{Context, Result};
use contact_form::Config;
use handlers::{router, AppState};
use session::SessionLimits;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load_default();

    info!(
        "Form '{}', firstName min length {}",
        config.form.title, config.form.first_name_min_length
    );

    let addr = config.bind_addr();
    let limits = SessionLimits {
        max_sessions: config.server.max_sessions,
        idle_timeout: Duration::from_secs(config.server.session_idle_secs),
    };
    let app = router(AppState::new(config.form, limits));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
