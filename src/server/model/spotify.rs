//! Spotify Web API wire formats.
//!
//! Every field is optional since search results routinely omit data (local files,
//! region-restricted tracks).

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    /// Token lifetime in seconds
    #[serde(default)]
    pub expires_in: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub tracks: Option<TrackPage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TrackPage {
    #[serde(default)]
    pub items: Vec<Option<SpotifyTrack>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SpotifyTrack {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub artists: Vec<SpotifyArtist>,
    #[serde(default)]
    pub album: Option<SpotifyAlbum>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub duration_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SpotifyArtist {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SpotifyAlbum {
    #[serde(default)]
    pub images: Vec<SpotifyImage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SpotifyImage {
    #[serde(default)]
    pub url: Option<String>,
}
