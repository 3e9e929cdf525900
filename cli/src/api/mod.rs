//! HTTP boundary — axum router over the dispatch and shortcut services.
//!
//! Routes:
//! - `POST /api/execute`                 dispatch one request
//! - `GET  /api/health`                  liveness probe
//! - `GET  /api/system-info`             host description
//! - `GET  /api/shortcuts`               stored list
//! - `POST /api/shortcuts`               replace stored list
//! - `POST /api/shortcuts/{id}/execute`  dispatch a stored shortcut

pub mod error;
pub mod handlers;

use std::future::Future;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use crate::application::services::dispatch::DispatchSettings;
use crate::infra::{JsonShortcutStore, TokioLauncher};

/// Shared state behind every route.
pub struct ApiState {
    pub launcher: TokioLauncher,
    pub store: JsonShortcutStore,
    pub settings: DispatchSettings,
    /// Serializes load-modify-save cycles against the store.
    store_lock: Mutex<()>,
}

impl ApiState {
    #[must_use]
    pub fn new(store: JsonShortcutStore, settings: DispatchSettings) -> Self {
        Self {
            launcher: TokioLauncher,
            store,
            settings,
            store_lock: Mutex::new(()),
        }
    }
}

/// Build the router with `state` attached.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/system-info", get(handlers::system_info))
        .route("/api/execute", post(handlers::execute))
        .route(
            "/api/shortcuts",
            get(handlers::list_shortcuts).post(handlers::save_shortcuts),
        )
        .route("/api/shortcuts/{id}/execute", post(handlers::execute_shortcut))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the API on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve(
    listener: TcpListener,
    state: Arc<ApiState>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let addr = listener.local_addr().context("reading listener address")?;
    tracing::info!(
        %addr,
        timeout_ms = %state.settings.timeout.as_millis(),
        store = %state.store.path().display(),
        "shortcut hub listening",
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server error")?;

    tracing::info!("shortcut hub shut down");
    Ok(())
}

/// Resolve on Ctrl-C. If the handler cannot be installed, never resolves.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("received shutdown signal");
}
