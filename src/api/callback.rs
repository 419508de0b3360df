use std::{collections::HashMap, path::PathBuf, sync::Arc};

use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use reqwest::Client;
use tokio::sync::{Mutex, Notify};

use crate::{
    config::Config, error::ApiError, management::TokenManager, spotify, success, warning,
};

/// Result of the one callback that carried an authorization code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authorized,
    Failed(String),
}

/// Everything the callback handler needs, passed in rather than global.
#[derive(Clone)]
pub struct CallbackState {
    pub config: Arc<Config>,
    pub client: Client,
    pub tokens_path: PathBuf,
    pub outcome: Arc<Mutex<Option<AuthOutcome>>>,
    pub shutdown: Arc<Notify>,
}

impl CallbackState {
    pub fn new(config: Config, client: Client, tokens_path: PathBuf) -> Self {
        Self {
            config: Arc::new(config),
            client,
            tokens_path,
            outcome: Arc::new(Mutex::new(None)),
            shutdown: Arc::new(Notify::new()),
        }
    }

    pub async fn outcome(&self) -> Option<AuthOutcome> {
        self.outcome.lock().await.clone()
    }
}

pub async fn callback(
    State(state): State<CallbackState>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    handle_code(&state, params.get("code").map(String::as_str)).await
}

/// Handles one callback request.
///
/// Without a code the request is rejected. With a code the exchange is
/// attempted once and the outcome recorded. Only a successful exchange tells
/// the listener to shut down; after any failure it keeps waiting so the
/// user can retry from the browser.
pub async fn handle_code(state: &CallbackState, code: Option<&str>) -> (StatusCode, String) {
    let Some(code) = code.filter(|c| !c.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            "Error: No authorization code received".to_string(),
        );
    };

    let exchange = spotify::auth::exchange_code(&state.client, &state.config, code).await;
    let (status, body, outcome) = match exchange {
        Ok(token) => {
            let manager = TokenManager::new(state.tokens_path.clone(), token);
            match manager.persist().await {
                Ok(()) => {
                    success!("Tokens saved to {}", state.tokens_path.display());
                    (
                        StatusCode::OK,
                        "Authorization successful! Tokens saved. You can close this window."
                            .to_string(),
                        AuthOutcome::Authorized,
                    )
                }
                Err(e) => {
                    warning!("Failed to save tokens: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Error: failed to save tokens: {}", e),
                        AuthOutcome::Failed(e.to_string()),
                    )
                }
            }
        }
        Err(ApiError::Status { body, .. }) => {
            warning!("Token exchange failed: {}", body);
            (
                StatusCode::BAD_REQUEST,
                format!("Error: {}", body),
                AuthOutcome::Failed(body),
            )
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            (
                StatusCode::BAD_REQUEST,
                format!("Error: {}", e),
                AuthOutcome::Failed(e.to_string()),
            )
        }
    };

    let authorized = outcome == AuthOutcome::Authorized;
    *state.outcome.lock().await = Some(outcome);
    if authorized {
        state.shutdown.notify_one();
    }

    (status, body)
}
