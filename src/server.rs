//! Process bootstrap shared by the server binaries.

use std::sync::Arc;

use anyhow::Context;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db;
use crate::repositories::MySqlRepository;
use crate::{
    create_auth_app, create_contact_app, create_feedback_app, AppState, AuthService, AUTH_SERVICE,
    CONTACT_SERVICE, FEEDBACK_SERVICE,
};

/// Which of the three HTTP servers to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Auth,
    Contact,
    Feedback,
}

impl Backend {
    pub fn name(self) -> &'static str {
        match self {
            Backend::Auth => AUTH_SERVICE,
            Backend::Contact => CONTACT_SERVICE,
            Backend::Feedback => FEEDBACK_SERVICE,
        }
    }

    /// Port used when `PORT` is unset.
    pub fn default_port(self) -> u16 {
        match self {
            Backend::Auth => 3001,
            Backend::Contact => 5503,
            Backend::Feedback => 5504,
        }
    }

    pub fn router(self, state: AppState) -> axum::Router {
        match self {
            Backend::Auth => create_auth_app(state),
            Backend::Contact => create_contact_app(state),
            Backend::Feedback => create_feedback_app(state),
        }
    }
}

/// `RUST_LOG` wins; otherwise `LOG_LEVEL` from config.
pub fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;
    Ok(())
}

/// Load config, connect to MySQL, and serve `backend` until the process stops.
pub async fn run(backend: Backend) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config =
        Config::from_env(backend.default_port()).map_err(|e| anyhow::anyhow!("config: {}", e))?;
    init_tracing(&config.log_level)?;

    let pool = db::create_pool(&config.database)
        .await
        .with_context(|| format!("connect to MySQL database {}", config.database.name))?;
    tracing::info!(host = %config.database.host, db = %config.database.name, "connected to MySQL");

    let repo = Arc::new(MySqlRepository::new(pool));
    let auth_service =
        AuthService::new(repo.clone()).with_redirect_url(config.login_redirect_url.clone());
    let state = AppState::new(auth_service, repo);

    let app = backend
        .router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!(backend = backend.name(), addr = %config.server_addr, "listening");
    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backends_keep_their_legacy_ports() {
        assert_eq!(Backend::Auth.default_port(), 3001);
        assert_eq!(Backend::Contact.default_port(), 5503);
        assert_eq!(Backend::Feedback.default_port(), 5504);
    }
}
