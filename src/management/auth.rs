use std::path::{Path, PathBuf};

use reqwest::Client;

use crate::{config::Config, error::ApiError, error::TokenError, spotify, types::Token};

/// Owns the persisted token pair and the file it lives in.
pub struct TokenManager {
    path: PathBuf,
    token: Token,
}

impl TokenManager {
    pub fn new(path: impl Into<PathBuf>, token: Token) -> Self {
        TokenManager {
            path: path.into(),
            token,
        }
    }

    pub async fn load(path: &Path) -> Result<Self, TokenError> {
        let content = match async_fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TokenError::NotFound(path.to_path_buf()));
            }
            Err(e) => return Err(TokenError::Io(e)),
        };
        let token: Token = serde_json::from_str(&content)?;
        Ok(Self {
            path: path.to_path_buf(),
            token,
        })
    }

    /// Overwrites the token file with the current pair.
    pub async fn persist(&self) -> Result<(), TokenError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string(&self.token)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Trades the stored refresh token for a new access token.
    ///
    /// The new access token replaces the stored one. The refresh token is
    /// kept unless the provider rotated it. Nothing is written to disk here.
    pub async fn refresh(&mut self, client: &Client, config: &Config) -> Result<String, ApiError> {
        let res =
            spotify::auth::refresh_access_token(client, config, &self.token.refresh_token).await?;

        self.token.access_token = res.access_token;
        if let Some(refresh_token) = res.refresh_token {
            self.token.refresh_token = refresh_token;
        }

        Ok(self.token.access_token.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
