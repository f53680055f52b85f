//! Server Implementation
//!
//! HTTP server startup. The secondary store warm-up runs to completion
//! before the listener binds: it is a blocking startup barrier, not a
//! background task.

use std::net::SocketAddr;

use crate::api;
use crate::core::{Config, ServerState};
use crate::services::MirrorService;
use crate::utils::{AppError, AppResult};

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state (for tests and embedding)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> AppResult<()> {
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config).await?,
        };

        // Warm the in-memory mirror before accepting any traffic.
        // A primary read failure aborts startup here.
        let mirror = MirrorService::new(state.primary.clone(), state.secondary.clone());
        let report = mirror.warm_up().await?;
        tracing::info!(
            copied = report.copied,
            failed = report.failed,
            "Secondary store mirror ready"
        );

        let app = api::router().with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        tracing::info!("Catalog server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutting down...");
}
