//! Configuration management for the playlist exporter.
//!
//! Client credentials and the redirect URI are read from a `config.json`
//! that the user provides. The file is searched in this order:
//! 1. `./config.json` in the current working directory
//! 2. `config.json` in the local data directory under `spexport/`
//!
//! The token store (`tokens.json`) always lives next to the config file
//! that was found.

use std::{
    net::{Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};

use reqwest::Url;
use serde::Deserialize;

use crate::error::ConfigError;

pub const CONFIG_FILE: &str = "config.json";
pub const TOKENS_FILE: &str = "tokens.json";

pub const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com";

/// Port of the callback listener when the redirect URI names none.
pub const CALLBACK_PORT: u16 = 8888;

pub const AUTH_SCOPE: &str = "user-read-recently-played user-read-playback-position user-top-read playlist-read-private playlist-read-collaborative";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    #[serde(default = "default_accounts_url")]
    pub accounts_url: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_accounts_url() -> String {
    DEFAULT_ACCOUNTS_URL.to_string()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Config {
    /// Reads and validates the config file at `path`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Read`] if the file cannot be read
    /// - [`ConfigError::Parse`] if it is not a JSON object with the required keys
    /// - [`ConfigError::MissingCredentials`] if `client_id` or `client_secret` is empty
    /// - [`ConfigError::RedirectUri`] if `redirect_uri` is not a URL
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = async_fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let config: Config =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if config.client_id.trim().is_empty() || config.client_secret.trim().is_empty() {
            return Err(ConfigError::MissingCredentials(path.to_path_buf()));
        }
        config.redirect_url()?;

        Ok(config)
    }

    pub fn authorize_endpoint(&self) -> String {
        format!("{}/authorize", self.accounts_url.trim_end_matches('/'))
    }

    pub fn token_endpoint(&self) -> String {
        format!("{}/api/token", self.accounts_url.trim_end_matches('/'))
    }

    pub fn playlist_tracks_endpoint(&self, playlist_id: &str) -> String {
        format!(
            "{uri}/v1/playlists/{id}/tracks",
            uri = self.api_url.trim_end_matches('/'),
            id = playlist_id
        )
    }

    /// Local address the callback listener binds to.
    ///
    /// Always loopback; the port comes from `redirect_uri` when it names one.
    pub fn callback_addr(&self) -> Result<SocketAddr, ConfigError> {
        let port = self.redirect_url()?.port().unwrap_or(CALLBACK_PORT);
        Ok(SocketAddr::from((Ipv4Addr::LOCALHOST, port)))
    }

    fn redirect_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.redirect_uri)
            .map_err(|_| ConfigError::RedirectUri(self.redirect_uri.clone()))
    }
}

/// Resolves which config file to use.
///
/// Prefers `./config.json`; falls back to the local data directory, e.g.
/// `~/.local/share/spexport/config.json` on Linux.
pub fn config_path() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE);
    if local.is_file() {
        return local;
    }

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spexport");
    path.push(CONFIG_FILE);
    if path.is_file() { path } else { local }
}

pub fn tokens_path(config_path: &Path) -> PathBuf {
    config_path.with_file_name(TOKENS_FILE)
}
