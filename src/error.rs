//! Error types shared across the crate.
//!
//! Library functions return these; only the CLI layer turns them into
//! console output and an exit status.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("please fill in client_id and client_secret in {}", .0.display())]
    MissingCredentials(PathBuf),

    #[error("invalid redirect_uri {0:?}")]
    RedirectUri(String),
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    #[error("token store io: {0}")]
    Io(#[from] std::io::Error),

    #[error("token store serde: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(reqwest::Error),

    #[error("malformed response: {0}")]
    Decode(reqwest::Error),

    #[error("{status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("access token was rejected, it may have expired")]
    Unauthorized,

    #[error("token response is missing a refresh_token")]
    MissingRefreshToken,

    #[error("malformed track: {0}")]
    MalformedTrack(serde_json::Error),

    #[error("pagination returned an already visited page: {0}")]
    CursorLoop(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err)
        } else {
            ApiError::Network(err)
        }
    }
}

/// Failure of the extraction pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("cannot build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("failed to refresh access token: {0}")]
    Refresh(ApiError),

    #[error("invalid playlist URL: {0:?}")]
    InvalidPlaylistUrl(String),

    #[error("failed to fetch playlist: {0}")]
    Fetch(ApiError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
}
