use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::health::HealthDto,
    server::{model::app::AppState, service::health::check_health},
};

pub static HEALTH_TAG: &str = "health";

/// Report the reachability of Directus and Spotify
///
/// Always answers 200, the upstream states are informational.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Health report", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let health = check_health(&state.directus, state.spotify.as_ref()).await;

    (StatusCode::OK, Json(health))
}
