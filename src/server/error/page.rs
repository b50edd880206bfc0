use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

/// Message shown on the dashboard when saving the page fails.
pub const UPDATE_FAILED_MESSAGE: &str = "Erro ao atualizar a página. Tente novamente.";

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Page {0:?} not found")]
    NotFound(String),
    /// Directus returned the page without the ID required to update it.
    #[error("Page {0:?} has no ID in Directus")]
    MissingId(String),
    #[error("Failed to update page {0:?}")]
    UpdateFailed(String),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto::new("Página não encontrada")),
            )
                .into_response(),
            Self::UpdateFailed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDto::new(UPDATE_FAILED_MESSAGE)),
            )
                .into_response(),
            Self::MissingId(_) => InternalServerError(self).into_response(),
        }
    }
}
