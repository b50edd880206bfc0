use chrono::Utc;
use dioxus_logger::tracing;

use crate::{
    model::health::{HealthDto, ServiceStatus},
    server::{
        client::{directus::DirectusClient, spotify::SpotifyClient},
        error::Error,
    },
};

/// Checks Directus and Spotify concurrently.
///
/// The report itself is always `healthy`, the upstream states are informational.
pub async fn check_health(directus: &DirectusClient, spotify: Option<&SpotifyClient>) -> HealthDto {
    let (directus_status, spotify_status) =
        futures::join!(check_directus(directus), check_spotify(spotify));

    HealthDto {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        directus: directus_status,
        spotify: spotify_status,
    }
}

async fn check_directus(directus: &DirectusClient) -> ServiceStatus {
    match directus.ping().await {
        Ok(true) => ServiceStatus::Connected,
        Ok(false) => ServiceStatus::Error,
        Err(e) => {
            tracing::warn!("Directus health check failed: {}", e);
            ServiceStatus::Disconnected
        }
    }
}

async fn check_spotify(spotify: Option<&SpotifyClient>) -> ServiceStatus {
    let Some(spotify) = spotify else {
        return ServiceStatus::Unknown;
    };

    match spotify.access_token().await {
        Ok(_) => ServiceStatus::Connected,
        Err(Error::ReqwestError(e)) => {
            tracing::warn!("Spotify health check failed: {}", e);
            ServiceStatus::Disconnected
        }
        Err(e) => {
            tracing::warn!("Spotify health check failed: {}", e);
            ServiceStatus::Error
        }
    }
}
