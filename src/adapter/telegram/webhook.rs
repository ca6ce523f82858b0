//! Webhook transport.
//!
//! Accepts one platform update object per `POST /webhook` call: 200 on
//! success, 500 when handling fails, and a plain 200 "OK" for any other
//! method or path (health probes included).

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Json;
use teloxide::types::{Update, UpdateKind};
use tracing::{error, info};

use crate::error::Result;
use crate::port::outbound::messenger::Messenger;

use super::handle_message;
use super::router::Router;

#[derive(Clone)]
struct WebhookState {
    router: Arc<Router>,
    messenger: Arc<dyn Messenger>,
}

/// Serve the webhook endpoint until the process is stopped.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn serve(
    addr: SocketAddr,
    router: Arc<Router>,
    messenger: Arc<dyn Messenger>,
) -> Result<()> {
    let state = WebhookState { router, messenger };
    let app = axum::Router::new()
        .route("/webhook", post(receive_update))
        .fallback(plain_ok)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "webhook server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn receive_update(
    State(state): State<WebhookState>,
    Json(update): Json<Update>,
) -> StatusCode {
    match update.kind {
        UpdateKind::Message(message) => {
            match handle_message(&state.router, state.messenger.as_ref(), &message).await {
                Ok(()) => StatusCode::OK,
                Err(e) => {
                    error!(error = %e, "webhook update handling failed");
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        }
        _ => StatusCode::OK,
    }
}

async fn plain_ok() -> &'static str {
    "OK"
}
