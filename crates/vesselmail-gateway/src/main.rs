//! vesselmail gateway
//!
//! - `GET /health`, `POST /send-message`, `GET /check-messages`
//! - Config from `vesselmail.yaml` (or `$VESSELMAIL_CONFIG`), secret from the
//!   environment variable it names
//! - Graceful shutdown on Ctrl+C / SIGTERM

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vesselmail_core::error::{MailError, Result};
use vesselmail_gateway::{app_state::AppState, config, router};

#[tokio::main]
async fn main() {
    let filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "vesselmail-gateway failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = std::env::var("VESSELMAIL_CONFIG").unwrap_or_else(|_| "vesselmail.yaml".into());
    let cfg = config::load_from_file(&path)?;
    // Missing secret is fatal at startup, never a runtime error.
    let secret = cfg.secret.load()?;

    let state = AppState::new(cfg, secret);
    let listen = state.cfg().gateway.listen_addr()?;
    tracing::info!(secret_env = %state.cfg().secret.env, "shared secret loaded");
    let app = router::build_router(state);

    tracing::info!(%listen, "vesselmail-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| MailError::Internal(format!("failed to bind {listen}: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| MailError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
