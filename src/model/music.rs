use serde::{Deserialize, Serialize};

/// A Spotify track returned by the music search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TrackDto {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub image_url: Option<String>,
    pub embed_url: String,
    pub preview_url: Option<String>,
    pub duration_ms: Option<u64>,
}

/// Successful music search response.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SearchResultsDto {
    pub query: String,
    pub count: usize,
    pub results: Vec<TrackDto>,
}

/// Failed music search response, always carrying an empty result list.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SearchErrorDto {
    pub error: String,
    pub results: Vec<TrackDto>,
}
