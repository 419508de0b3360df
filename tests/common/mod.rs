// In-process stand-in for the Spotify accounts and Web API services.
#![allow(dead_code)]

use std::{
    collections::HashMap,
    path::Path,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use serde_json::{Value, json};
use spexport::config::Config;
use tokio::net::TcpListener;

pub const CLIENT_ID: &str = "a";
pub const CLIENT_SECRET: &str = "b";
pub const REFRESH_TOKEN: &str = "r";
pub const ACCESS_TOKEN: &str = "t";
pub const GOOD_CODE: &str = "good-code";
/// Refresh token the fake answers with a new refresh token alongside the access token.
pub const ROTATING_REFRESH_TOKEN: &str = "rotate-me";
pub const ROTATED_REFRESH_TOKEN: &str = "rotated";

#[derive(Clone)]
struct FakeState {
    pages: Arc<Vec<(StatusCode, Value)>>,
    hits: Arc<AtomicUsize>,
}

pub struct FakeSpotify {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl FakeSpotify {
    /// Starts the fake provider. `pages` receives the base URL so that
    /// `next` links can point back at the server; page `n` is served for
    /// `?page=n`, page 0 for the bare tracks URL.
    pub async fn spawn(pages: impl FnOnce(&str) -> Vec<(StatusCode, Value)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let hits = Arc::new(AtomicUsize::new(0));
        let state = FakeState {
            pages: Arc::new(pages(&base_url)),
            hits: hits.clone(),
        };

        let app = Router::new()
            .route("/api/token", post(token))
            .route("/v1/playlists/{id}/tracks", get(tracks))
            .with_state(state);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        FakeSpotify { base_url, hits }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn config(&self) -> Config {
        config_with(&self.base_url)
    }
}

pub fn config_with(base_url: &str) -> Config {
    Config {
        client_id: CLIENT_ID.to_string(),
        client_secret: CLIENT_SECRET.to_string(),
        redirect_uri: "http://localhost:8888/callback".to_string(),
        accounts_url: base_url.to_string(),
        api_url: base_url.to_string(),
    }
}

pub fn tracks_url(base_url: &str, page: usize) -> String {
    format!("{}/v1/playlists/XYZ123/tracks?page={}", base_url, page)
}

pub fn track(
    id: &str,
    name: &str,
    artists: &[&str],
    duration_ms: u64,
    popularity: Option<u32>,
) -> Value {
    let artists: Vec<Value> = artists.iter().map(|a| json!({ "name": a })).collect();
    json!({
        "track": {
            "id": id,
            "name": name,
            "artists": artists,
            "duration_ms": duration_ms,
            "popularity": popularity,
        }
    })
}

pub fn page(items: Vec<Value>, next: Option<String>) -> (StatusCode, Value) {
    (StatusCode::OK, json!({ "items": items, "next": next }))
}

pub fn write_tokens(path: &Path, access: &str, refresh: &str) {
    std::fs::write(
        path,
        json!({ "accessToken": access, "refreshToken": refresh }).to_string(),
    )
    .unwrap();
}

async fn token(
    State(state): State<FakeState>,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let field = |k: &str| form.get(k).map(String::as_str);
    if field("client_id") != Some(CLIENT_ID) || field("client_secret") != Some(CLIENT_SECRET) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid_client" })),
        );
    }

    match (field("grant_type"), field("refresh_token"), field("code")) {
        (Some("refresh_token"), Some(REFRESH_TOKEN), _) => (
            StatusCode::OK,
            Json(json!({
                "access_token": ACCESS_TOKEN,
                "token_type": "Bearer",
                "expires_in": 3600
            })),
        ),
        (Some("refresh_token"), Some(ROTATING_REFRESH_TOKEN), _) => (
            StatusCode::OK,
            Json(json!({
                "access_token": ACCESS_TOKEN,
                "refresh_token": ROTATED_REFRESH_TOKEN,
                "token_type": "Bearer",
                "expires_in": 3600
            })),
        ),
        (Some("authorization_code"), _, Some(GOOD_CODE))
            if field("redirect_uri") == Some("http://localhost:8888/callback") =>
        {
            (
                StatusCode::OK,
                Json(json!({
                    "access_token": "fresh-access",
                    "refresh_token": "fresh-refresh",
                    "expires_in": 3600
                })),
            )
        }
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid_grant" })),
        ),
    }
}

async fn tracks(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let bearer = format!("Bearer {}", ACCESS_TOKEN);
    if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some(bearer.as_str()) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": { "status": 401, "message": "The access token expired" } })),
        );
    }

    let index: usize = query.get("page").and_then(|p| p.parse().ok()).unwrap_or(0);
    match state.pages.get(index) {
        Some((status, body)) => (*status, Json(body.clone())),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": { "status": 404, "message": "Not found" } })),
        ),
    }
}
