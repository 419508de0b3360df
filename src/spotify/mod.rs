//! # Spotify Integration Module
//!
//! Thin client for the parts of the Spotify Web API the exporter needs:
//!
//! - [`auth`] - authorization URL, code exchange and token refresh against
//!   the accounts service (`/authorize`, `/api/token`)
//! - [`playlist`] - paginated retrieval of a playlist's tracks
//!   (`/v1/playlists/{id}/tracks`)
//!
//! Every request goes through the client returned by [`http_client`], which
//! bounds each call by [`REQUEST_TIMEOUT`]. Nothing is retried; callers get
//! an [`ApiError`](crate::error::ApiError) and decide what to do.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};

use crate::error::ApiError;

pub mod auth;
pub mod playlist;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub fn http_client() -> Result<Client, reqwest::Error> {
    Client::builder().timeout(REQUEST_TIMEOUT).build()
}

/// Passes 200 responses through and turns anything else into
/// [`ApiError::Status`] carrying the provider's raw body.
async fn expect_ok(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status == StatusCode::OK {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}
