//! The extraction pipeline: refresh the access token, then fetch a
//! playlist and write it out as CSV.

use std::path::Path;

use reqwest::Client;

use crate::{
    config::Config,
    error::Error,
    export,
    management::TokenManager,
    spotify,
    types::{Track, TrackRecord},
    utils, warning,
};

/// An authenticated run against the provider.
pub struct Session {
    client: Client,
    config: Config,
    access_token: String,
}

impl Session {
    /// Loads the stored tokens and refreshes the access token.
    ///
    /// A missing token file fails with [`TokenError::NotFound`](crate::error::TokenError::NotFound)
    /// before any request is made. The refreshed pair is written back; a
    /// failed write only produces a warning.
    pub async fn start(config: Config, tokens_path: &Path) -> Result<Self, Error> {
        let mut tokens = TokenManager::load(tokens_path).await?;
        let client = spotify::http_client().map_err(Error::Client)?;

        let access_token = tokens
            .refresh(&client, &config)
            .await
            .map_err(Error::Refresh)?;

        if let Err(e) = tokens.persist().await {
            warning!("Failed to save refreshed token to {}: {}", tokens.path().display(), e);
        }

        Ok(Self {
            client,
            config,
            access_token,
        })
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub async fn fetch_tracks(&self, playlist_id: &str) -> Result<Vec<Track>, Error> {
        spotify::playlist::get_playlist_tracks(
            &self.client,
            &self.config.playlist_tracks_endpoint(playlist_id),
            &self.access_token,
        )
        .await
        .map_err(Error::Fetch)
    }

    /// Exports the playlist at `playlist_url` to `output` and returns the
    /// number of rows written.
    ///
    /// The URL is checked before any request is made.
    pub async fn export_playlist(&self, playlist_url: &str, output: &Path) -> Result<usize, Error> {
        let playlist_id = utils::parse_playlist_id(playlist_url)
            .ok_or_else(|| Error::InvalidPlaylistUrl(playlist_url.to_string()))?;

        let tracks = self.fetch_tracks(&playlist_id).await?;
        let records: Vec<TrackRecord> = tracks.iter().map(TrackRecord::from).collect();

        export::save_csv(output, &records).await?;
        Ok(records.len())
    }
}
