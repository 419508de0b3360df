use std::collections::HashSet;

use reqwest::{Client, StatusCode};

use crate::{
    error::ApiError,
    types::{PlaylistTracksPage, Track},
    warning,
};

/// Retrieves every track of a playlist by following the `next` links.
///
/// Starts at `tracks_url` (the playlist's `/tracks` endpoint) and requests
/// pages until a page has no `next`. Items whose track is null or has no id
/// (removed or local tracks) are skipped.
///
/// An empty playlist is `Ok(vec![])`. Any failure discards the tracks
/// gathered so far.
///
/// # Errors
///
/// - [`ApiError::Unauthorized`] if any page answers 401
/// - [`ApiError::Status`] for any other non-200 page; the body is logged
/// - [`ApiError::CursorLoop`] if a `next` link points at a page already fetched
/// - [`ApiError::MalformedTrack`] if a track with an id cannot be decoded
/// - transport errors as converted from [`reqwest::Error`]
pub async fn get_playlist_tracks(
    client: &Client,
    tracks_url: &str,
    token: &str,
) -> Result<Vec<Track>, ApiError> {
    let mut tracks: Vec<Track> = Vec::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut next_url = Some(tracks_url.to_string());

    while let Some(url) = next_url.take() {
        if !visited.insert(url.clone()) {
            return Err(ApiError::CursorLoop(url));
        }

        let response = client.get(&url).bearer_auth(token).send().await?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::UNAUTHORIZED => return Err(ApiError::Unauthorized),
            status => {
                let body = response.text().await.unwrap_or_default();
                warning!("Error fetching playlist: {}", body);
                return Err(ApiError::Status { status, body });
            }
        }

        let page = response.json::<PlaylistTracksPage>().await?;
        for track in page.items.into_iter().filter_map(|item| item.into_track()) {
            tracks.push(track.map_err(ApiError::MalformedTrack)?);
        }

        next_url = page.next;
    }

    Ok(tracks)
}
