use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Message shown on the login form after a wrong password.
pub const INVALID_PASSWORD_MESSAGE: &str = "Senha incorreta. Tente novamente.";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Login attempted for page {0:?} which does not exist")]
    PageNotFound(String),
    #[error("Wrong password submitted for page {0:?}")]
    InvalidPassword(String),
    #[error("Session is not logged in to page {0:?}")]
    NotLoggedIn(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::PageNotFound(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto::new("Página não encontrada")),
                )
                    .into_response()
            }
            Self::InvalidPassword(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new(INVALID_PASSWORD_MESSAGE)),
            )
                .into_response(),
            Self::NotLoggedIn(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto::new("Faça login para continuar")),
                )
                    .into_response()
            }
        }
    }
}
