//! HTTP server for Prompt Coach (axum).
//!
//! Listens on http://127.0.0.1:3000 by default and serves the analyze, models and
//! health routes on top of a shared [`FeedbackService`].
//!
//! **Public API**: [`run_serve`], [`run_serve_on_listener`], [`ServerConfig`].

mod app;
mod handlers;
mod response;

use std::sync::Arc;

use coach_feedback::FeedbackService;
use tokio::net::TcpListener;
use tracing::info;

use app::{router, AppState};

pub use app::{ServerConfig, DEFAULT_ADDR};

/// Serves on an existing listener until the process receives Ctrl-C.
/// Used by tests (bind to 127.0.0.1:0 then pass the listener).
pub async fn run_serve_on_listener(
    listener: TcpListener,
    service: Arc<FeedbackService>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = listener.local_addr()?;
    info!("HTTP server listening on http://{}", addr);

    let app = router(AppState { service });

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

/// Binds `addr` (default 127.0.0.1:3000) and serves.
pub async fn run_serve(
    addr: Option<&str>,
    service: Arc<FeedbackService>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = addr.unwrap_or(DEFAULT_ADDR);
    let listener = TcpListener::bind(addr).await?;
    run_serve_on_listener(listener, service).await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; serve until the task is dropped.
        std::future::pending::<()>().await;
    }
}
