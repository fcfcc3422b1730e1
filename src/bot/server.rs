//! Webhook server exposing the slash command over HTTP.
//!
//! `POST /v1/commands/thesaurize` with a JSON [`CommandRequest`] body returns
//! a JSON [`CommandReply`]. The server runs until Ctrl+C or SIGTERM and
//! drains in-flight requests before exiting.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use log::{error, info};
use tokio::net::TcpListener;

use crate::bot::command::{self, CommandReply, CommandRequest};
use crate::error::{Result, ThesaurizeError};
use crate::rewrite::PhraseRewriter;

/// Build the command router.
pub fn router(rewriter: Arc<PhraseRewriter>) -> Router {
    let path = format!("/v1/commands/{}", command::COMMAND_NAME);
    Router::new()
        .route(&path, post(rewrite_command))
        .with_state(rewriter)
}

/// Run the webhook server until a shutdown signal arrives.
pub async fn run_server(rewriter: Arc<PhraseRewriter>, host: IpAddr, port: u16) -> Result<()> {
    let addr = SocketAddr::from((host, port));
    let app = router(rewriter);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ThesaurizeError::server(format!("failed to bind {addr}: {e}")))?;

    info!(
        "listening on {addr}, command '/{}' ready",
        command::COMMAND_NAME
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ThesaurizeError::server(format!("server failed: {e}")))?;

    info!("gracefully shutting down");
    Ok(())
}

/// Handle one slash-command webhook call.
async fn rewrite_command(
    State(rewriter): State<Arc<PhraseRewriter>>,
    Json(request): Json<CommandRequest>,
) -> Json<CommandReply> {
    Json(command::handle_command(rewriter.as_ref(), request).await)
}

/// Resolve when Ctrl+C or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {e}");
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

    info!("shutdown signal received");
}
