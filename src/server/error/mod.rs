//! Error types for the Phygital server application.
//!
//! Each upstream or domain concern has its own error enum (configuration, authentication,
//! pages, music search, Directus and Spotify). They are aggregated into [`Error`], which
//! implements `IntoResponse` so handlers can propagate any of them with `?`.

pub mod auth;
pub mod config;
pub mod directus;
pub mod music;
pub mod page;
pub mod retry;
pub mod spotify;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, directus::DirectusError, music::MusicError,
        page::PageError, spotify::SpotifyError,
    },
};

/// Main error type for the Phygital server application.
///
/// Uses `thiserror`'s `#[from]` attribute so domain errors and library errors convert
/// automatically through the `?` operator.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (wrong password, missing login).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Page error (unknown slug, failed update).
    #[error(transparent)]
    PageError(#[from] PageError),
    /// Music search error (invalid query, search unavailable).
    #[error(transparent)]
    MusicError(#[from] MusicError),
    /// Directus answered with an unexpected response.
    #[error(transparent)]
    DirectusError(#[from] DirectusError),
    /// Spotify answered with an unexpected response.
    #[error(transparent)]
    SpotifyError(#[from] SpotifyError),
    /// Internal error indicating a bug in Phygital's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// HTTP transport error talking to Directus or Spotify.
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Filesystem error.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// JSON (de)serialization error.
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
    /// Malformed multipart upload.
    #[error(transparent)]
    MultipartError(#[from] axum::extract::multipart::MultipartError),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors and multipart rejections choose their own status code and message.
/// Every other error becomes a logged 500 Internal Server Error with a generic message.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::PageError(err) => err.into_response(),
            Self::MusicError(err) => err.into_response(),
            Self::MultipartError(err) => {
                tracing::debug!("Rejected multipart upload: {}", err);

                err.into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client so implementation details are not leaked.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
