use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        page::{LoginDto, LoginRequestDto},
    },
    server::{
        error::Error,
        model::{app::AppState, session::admin::SessionAdminSlug},
        service::auth::{logout as logout_session, AuthService},
    },
};

pub static AUTH_TAG: &str = "auth";

/// Log into a page
///
/// A session already logged into the page is accepted without checking the password.
#[utoipa::path(
    post,
    path = "/api/page/{slug}/login",
    tag = AUTH_TAG,
    params(("slug" = String, Path, description = "Page slug")),
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Logged in", body = LoginDto),
        (status = 401, description = "Wrong password", body = ErrorDto),
        (status = 404, description = "No page has this slug", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    session: Session,
    Json(request): Json<LoginRequestDto>,
) -> Result<impl IntoResponse, Error> {
    if !SessionAdminSlug::is_admin_of(&session, &slug).await? {
        AuthService::new(&state.directus)
            .login(&session, &slug, &request.password)
            .await?;
    }

    Ok((StatusCode::OK, Json(LoginDto { slug })))
}

/// Log out of a page
///
/// # Responses
/// - 307 (Temporary Redirect): Logged out, redirect to the public page
/// - 307 (Temporary Redirect): Not logged into this page, redirect to the login form
#[utoipa::path(
    get,
    path = "/api/page/{slug}/logout",
    tag = AUTH_TAG,
    params(("slug" = String, Path, description = "Page slug")),
    responses(
        (status = 307, description = "Logged out, redirect to the public page"),
        (status = 307, description = "Not logged into this page, redirect to the login form"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(Path(slug): Path<String>, session: Session) -> Result<impl IntoResponse, Error> {
    if !SessionAdminSlug::is_admin_of(&session, &slug).await? {
        return Ok(Redirect::temporary(&format!("/{}/login", slug)));
    }

    logout_session(&session).await?;

    Ok(Redirect::temporary(&format!("/{}", slug)))
}
