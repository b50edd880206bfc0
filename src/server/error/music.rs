use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::music::SearchErrorDto;

/// Minimum number of characters a search query needs after trimming.
pub const MIN_QUERY_LENGTH: usize = 2;

#[derive(Error, Debug)]
pub enum MusicError {
    #[error("Search query {0:?} is shorter than {MIN_QUERY_LENGTH} characters")]
    QueryTooShort(String),
    #[error("Music search is not configured, set SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET")]
    NotConfigured,
    #[error("Music search for {query:?} failed: {reason}")]
    SearchFailed { query: String, reason: String },
}

impl MusicError {
    fn response(status: StatusCode, message: &str) -> Response {
        (
            status,
            Json(SearchErrorDto {
                error: message.to_string(),
                results: Vec::new(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for MusicError {
    fn into_response(self) -> Response {
        match self {
            Self::QueryTooShort(_) => Self::response(
                StatusCode::BAD_REQUEST,
                "Query muito curta. Use pelo menos 2 caracteres.",
            ),
            Self::NotConfigured => {
                tracing::warn!("{}", self);

                Self::response(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Busca de músicas indisponível",
                )
            }
            Self::SearchFailed { .. } => {
                tracing::error!("{}", self);

                Self::response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno no servidor",
                )
            }
        }
    }
}
