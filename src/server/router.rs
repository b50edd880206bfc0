//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI
//! is served at `/api/docs`. Page UI routes (`/{slug}`, `/{slug}/login`, ...) belong to the
//! dioxus app, so every JSON endpoint lives under `/api` except the health check.

use axum::{extract::DefaultBodyLimit, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Largest request body accepted, sized for a batch of phone photos.
pub const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/page/{slug}` - Public page
/// - `PUT /api/page/{slug}` - Save the dashboard edit form
/// - `GET /api/page/{slug}/admin` - Page for the dashboard
/// - `POST /api/page/{slug}/photos` - Upload photos
/// - `POST /api/page/{slug}/login` - Log into a page
/// - `GET /api/page/{slug}/logout` - Log out of a page
/// - `GET /api/spotify-search` - Search Spotify tracks
/// - `GET /health` - Upstream health report
///
/// # Returns
/// An Axum `Router<AppState>` ready to be merged into the dioxus router once given its state.
///
/// # Example
/// ```ignore
/// let app_state = AppState::from((directus, spotify));
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Phygital", description = "Phygital API"), tags(
        (name = controller::page::PAGE_TAG, description = "Page display and editing"),
        (name = controller::auth::AUTH_TAG, description = "Page login"),
        (name = controller::music::MUSIC_TAG, description = "Spotify music search"),
        (name = controller::health::HEALTH_TAG, description = "Health check"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::page::get_page,
            controller::page::update_page
        ))
        .routes(routes!(controller::page::get_admin_page))
        .routes(routes!(controller::page::upload_photos))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::music::spotify_search))
        .routes(routes!(controller::health::health))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
