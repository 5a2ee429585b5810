//! HTTP surface
//!
//! Every endpoint validates its body, applies its persistence policy and
//! returns JSON. The store handle and the compiled pitch template are shared
//! through [`ApiState`].

pub mod diagnostics;
pub mod error;
pub mod extract;
pub mod handlers;

pub use diagnostics::EnvStatus;
pub use error::ApiError;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::pitch::PitchTemplater;
use crate::store::SharedStore;

/// Shared API state
pub struct ApiState {
    pub store: SharedStore,
    pub templater: PitchTemplater,
    pub env: EnvStatus,
}

impl ApiState {
    pub fn new(store: SharedStore, env: EnvStatus) -> crate::error::Result<Self> {
        Ok(Self {
            store,
            templater: PitchTemplater::new()?,
            env,
        })
    }
}

/// Build the API router
///
/// CORS mirrors the caller's origin, method and headers and allows
/// credentials.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(diagnostics::root))
        .route("/test", get(diagnostics::test_database))
        .route("/api/quickscan", post(handlers::submit_quickscan))
        .route("/api/use-cases", get(handlers::list_use_cases))
        .route("/api/contact", post(handlers::submit_contact))
        .route("/api/pitch", post(handlers::generate_pitch))
        .route(
            "/api/workflows",
            get(handlers::list_workflows).post(handlers::create_workflow),
        )
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// HTTP server for the API
pub struct ApiServer {
    state: ApiState,
    addr: SocketAddr,
}

impl ApiServer {
    pub fn new(state: ApiState, addr: SocketAddr) -> Self {
        Self { state, addr }
    }

    /// Serve until Ctrl-C
    pub async fn start(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        info!("Starting Flomote API on {}", listener.local_addr()?);

        axum::serve(listener, router(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Flomote API stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
