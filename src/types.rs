use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Persisted token pair, stored as `{"accessToken": .., "refreshToken": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    #[serde(default)]
    pub access_token: String,
    pub refresh_token: String,
}

/// Body of a successful token endpoint response.
///
/// `refresh_token` is always present for the `authorization_code` grant and
/// only sometimes present for the `refresh_token` grant.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTracksPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<PlaylistItem>,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
    #[serde(default)]
    pub track: Option<Value>,
}

impl PlaylistItem {
    /// Decodes the item's track when it has a non-empty id.
    ///
    /// Null, removed and local tracks give `None` whatever else they hold.
    pub fn into_track(self) -> Option<Result<Track, serde_json::Error>> {
        let track = self.track?;
        let has_id = track
            .get("id")
            .and_then(Value::as_str)
            .is_some_and(|id| !id.is_empty());

        has_id.then(|| serde_json::from_value(track))
    }
}

// Fields other than the id may still be null on playable tracks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artists: Vec<TrackArtist>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration_ms: u64,
    #[serde(default)]
    pub popularity: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackArtist {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// One exported row: name, artists, duration and popularity of a track.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRecord {
    pub name: String,
    pub artists: Vec<String>,
    pub duration_seconds: f64,
    pub popularity: u32,
}

impl From<&Track> for TrackRecord {
    fn from(track: &Track) -> Self {
        TrackRecord {
            name: track.name.clone(),
            artists: track.artists.iter().map(|a| a.name.clone()).collect(),
            duration_seconds: track.duration_ms as f64 / 1000.0,
            popularity: track.popularity.unwrap_or(0),
        }
    }
}
