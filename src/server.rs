use std::net::SocketAddr;

use axum::{Router, routing::get};
use tokio::net::TcpListener;

use crate::api::{self, AuthOutcome, CallbackState};

pub fn router(state: CallbackState) -> Router {
    Router::new()
        .route("/callback", get(api::callback))
        .with_state(state)
}

/// Serves the callback route on `listener` until a code has been exchanged
/// and the tokens saved, then returns the outcome.
pub async fn serve(
    listener: TcpListener,
    state: CallbackState,
) -> std::io::Result<Option<AuthOutcome>> {
    let shutdown = state.shutdown.clone();

    axum::serve(listener, router(state.clone()))
        .with_graceful_shutdown(async move { shutdown.notified().await })
        .await?;

    Ok(state.outcome().await)
}

pub async fn start_api_server(
    addr: SocketAddr,
    state: CallbackState,
) -> std::io::Result<Option<AuthOutcome>> {
    let listener = TcpListener::bind(addr).await?;
    serve(listener, state).await
}
