//! ssrhead server
//!
//! - Document shell on every GET path, head from route or site metadata
//! - `/api/head?path=` for tag descriptors
//! - Config from `SSRHEAD_CONFIG` (default `ssrhead.yaml`); missing file means defaults

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use ssrhead_core::error::{HeadError, Result};
use ssrhead_server::{app_state, config, router};

const CONFIG_ENV: &str = "SSRHEAD_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "ssrhead.yaml";

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, code = e.client_code().as_str(), "ssrhead-server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_or_default(&path)?;
    let listen = cfg.server.listen_addr()?;

    let state = app_state::AppState::new(cfg)?;
    tracing::info!(
        routes = state.route_count(),
        title = %state.site().long_title,
        "metadata resolved"
    );
    let app = router::build_router(state);

    tracing::info!(%listen, "ssrhead-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| HeadError::Internal(format!("failed to bind {listen}: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| HeadError::Internal(format!("server failed: {e}")))?;

    tracing::info!("ssrhead-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
