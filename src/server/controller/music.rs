use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::music::{SearchErrorDto, SearchResultsDto},
    server::{error::Error, model::app::AppState, service::music::MusicService},
};

pub static MUSIC_TAG: &str = "music";

#[derive(Deserialize, IntoParams)]
pub struct SearchParams {
    /// Search text, at least 2 characters after trimming
    #[serde(default)]
    pub q: String,
    /// Maximum number of results (1 to 20, default 10). Non-numeric values use the default.
    #[serde(default)]
    pub limit: Option<String>,
}

/// Search Spotify tracks
#[utoipa::path(
    get,
    path = "/api/spotify-search",
    tag = MUSIC_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Search results", body = SearchResultsDto),
        (status = 400, description = "Query too short", body = SearchErrorDto),
        (status = 503, description = "Music search is not configured", body = SearchErrorDto),
        (status = 500, description = "Spotify search failed", body = SearchErrorDto)
    ),
)]
pub async fn spotify_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, Error> {
    let limit = params
        .limit
        .as_deref()
        .and_then(|limit| limit.trim().parse::<u32>().ok());

    let results = MusicService::new(state.spotify.as_ref())
        .search(&params.q, limit)
        .await?;

    Ok((StatusCode::OK, Json(results)))
}
