use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use dioxus_logger::tracing;
use tower_sessions::Session;
use utoipa::ToSchema;

use crate::{
    model::{
        api::ErrorDto,
        page::{PageDto, UpdatePageDto, UPLOAD_FAILED_ERROR},
    },
    server::{
        error::{page::PageError, Error},
        model::{app::AppState, session::admin::SessionAdminSlug, upload::PhotoUpload},
        service::{auth::require_admin, page::PageService},
    },
};

pub static PAGE_TAG: &str = "page";

/// Multipart field carrying the uploaded photos.
pub const PHOTOS_FIELD: &str = "fotos";

/// Dashboard photo upload form.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct PhotoUploadForm {
    /// Photo file, the field can be repeated
    #[schema(value_type = String, format = Binary)]
    fotos: Vec<u8>,
}

/// Get a page for public display
#[utoipa::path(
    get,
    path = "/api/page/{slug}",
    tag = PAGE_TAG,
    params(("slug" = String, Path, description = "Page slug")),
    responses(
        (status = 200, description = "Page found", body = PageDto),
        (status = 404, description = "No page has this slug", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let page = PageService::new(&state.directus)
        .get_page(&slug)
        .await?
        .ok_or_else(|| PageError::NotFound(slug.clone()))?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a page for editing in the dashboard
///
/// Requires the session to be logged into the page.
#[utoipa::path(
    get,
    path = "/api/page/{slug}/admin",
    tag = PAGE_TAG,
    params(("slug" = String, Path, description = "Page slug")),
    responses(
        (status = 200, description = "Page found", body = PageDto),
        (status = 401, description = "Not logged into this page", body = ErrorDto),
        (status = 404, description = "No page has this slug", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session, &slug).await?;

    let page = PageService::new(&state.directus)
        .get_page(&slug)
        .await?
        .ok_or_else(|| PageError::NotFound(slug.clone()))?;

    Ok((StatusCode::OK, Json(page)))
}

/// Save the dashboard edit form
///
/// Existing photos are kept. A blank Spotify URL removes the player, any other value is
/// stored in embed form.
#[utoipa::path(
    put,
    path = "/api/page/{slug}",
    tag = PAGE_TAG,
    params(("slug" = String, Path, description = "Page slug")),
    request_body = UpdatePageDto,
    responses(
        (status = 200, description = "Page updated", body = PageDto),
        (status = 401, description = "Not logged into this page", body = ErrorDto),
        (status = 404, description = "No page has this slug", body = ErrorDto),
        (status = 500, description = "Directus rejected the update", body = ErrorDto)
    ),
)]
pub async fn update_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    session: Session,
    Json(update): Json<UpdatePageDto>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session, &slug).await?;

    let page = PageService::new(&state.directus)
        .update_page(&slug, update)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Upload photos to the page gallery
///
/// Posted by the dashboard's native upload form, so every outcome redirects back to a page.
/// A failed upload returns to the dashboard with `?erro=upload` so it can show the error.
#[utoipa::path(
    post,
    path = "/api/page/{slug}/photos",
    tag = PAGE_TAG,
    params(("slug" = String, Path, description = "Page slug")),
    request_body(content = PhotoUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 303, description = "Photos uploaded, redirect to the dashboard"),
        (status = 303, description = "Upload failed, redirect to the dashboard with `erro=upload`"),
        (status = 303, description = "Not logged into this page, redirect to the login form")
    ),
)]
pub async fn upload_photos(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    if !SessionAdminSlug::is_admin_of(&session, &slug).await? {
        return Ok(Redirect::to(&format!("/{}/login", slug)));
    }

    if let Err(e) = store_photos(&state, &slug, multipart).await {
        tracing::error!("Photo upload for page {} failed: {}", slug, e);

        return Ok(Redirect::to(&format!(
            "/{}/dashboard?erro={}",
            slug, UPLOAD_FAILED_ERROR
        )));
    }

    Ok(Redirect::to(&format!("/{}/dashboard", slug)))
}

async fn store_photos(
    state: &AppState,
    slug: &str,
    mut multipart: Multipart,
) -> Result<usize, Error> {
    let mut uploads = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(PHOTOS_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field.bytes().await?;

        uploads.push(PhotoUpload {
            filename,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    PageService::new(&state.directus)
        .add_photos(slug, uploads)
        .await
}
