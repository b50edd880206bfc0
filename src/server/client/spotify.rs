use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use dioxus_logger::tracing;
use reqwest::{Response, StatusCode};
use tokio::sync::Mutex;

use crate::{
    model::music::TrackDto,
    server::{
        config::SpotifyCredentials,
        error::{spotify::SpotifyError, Error},
        model::spotify::{SearchResponse, SpotifyTrack, TokenResponse},
        util::spotify_url::ensure_embed_url,
    },
};

pub const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const API_BASE: &str = "https://api.spotify.com/v1";

/// Upper bound of the `limit` search parameter.
pub const MAX_SEARCH_LIMIT: u32 = 20;
pub const UNKNOWN_TRACK_NAME: &str = "Música desconhecida";
pub const UNKNOWN_ARTIST_NAME: &str = "Artista desconhecida";

const TOKEN_TIMEOUT: Duration = Duration::from_secs(10);
const SEARCH_TIMEOUT: Duration = Duration::from_secs(15);
/// Lifetime assumed when Spotify omits `expires_in`.
const DEFAULT_TOKEN_LIFETIME_SECS: u64 = 3600;
/// Tokens are refreshed this long before they actually expire.
const TOKEN_EXPIRY_MARGIN_SECS: u64 = 60;

struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

/// Spotify Web API client using the client-credentials flow.
///
/// The access token is cached and shared between clones until shortly before it expires.
#[derive(Clone)]
pub struct SpotifyClient {
    http: reqwest::Client,
    credentials: SpotifyCredentials,
    market: String,
    token_url: String,
    api_base: String,
    token: Arc<Mutex<Option<CachedToken>>>,
}

impl SpotifyClient {
    pub fn new(
        http: reqwest::Client,
        credentials: SpotifyCredentials,
        market: impl Into<String>,
    ) -> Self {
        Self {
            http,
            credentials,
            market: market.into(),
            token_url: TOKEN_URL.to_string(),
            api_base: API_BASE.to_string(),
            token: Arc::new(Mutex::new(None)),
        }
    }

    /// Overrides the token and API endpoints, used to point the client at a mock server.
    pub fn with_endpoints(mut self, token_url: impl Into<String>, api_base: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Returns a valid access token, requesting a new one if none is cached or it expired.
    pub async fn access_token(&self) -> Result<String, Error> {
        let mut cached = self.token.lock().await;

        if let Some(token) = cached.as_ref() {
            if token.expires_at > Instant::now() {
                return Ok(token.access_token.clone());
            }
        }

        let token = self.request_token().await?;
        let access_token = token.access_token.clone();
        *cached = Some(token);

        Ok(access_token)
    }

    /// Drops the cached access token.
    pub async fn invalidate_token(&self) {
        *self.token.lock().await = None;
    }

    /// Searches tracks matching `query`.
    ///
    /// # Arguments
    /// - `query` - Free text search query
    /// - `limit` - Maximum number of results, clamped to `1..=MAX_SEARCH_LIMIT`
    ///
    /// # Returns
    /// - `Ok(Vec<TrackDto>)` - Matching tracks, tracks without an ID are skipped
    /// - `Err(Error::SpotifyError(SpotifyError::Unauthorized))` - Token rejected, the cached token is dropped
    /// - `Err(Error)` - Token request failure, transport failure or unexpected response
    pub async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<TrackDto>, Error> {
        let access_token = self.access_token().await?;
        let limit = limit.clamp(1, MAX_SEARCH_LIMIT).to_string();

        let response = self
            .http
            .get(format!("{}/search", self.api_base))
            .bearer_auth(access_token)
            .query(&[
                ("q", query),
                ("type", "track"),
                ("limit", limit.as_str()),
                ("market", self.market.as_str()),
            ])
            .timeout(SEARCH_TIMEOUT)
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            tracing::warn!("Spotify rejected the access token, dropping cached token");
            self.invalidate_token().await;

            return Err(SpotifyError::Unauthorized.into());
        }

        let response = Self::ensure_success(response).await?;
        let body: SearchResponse = response.json().await?;

        let tracks: Vec<TrackDto> = body
            .tracks
            .map(|page| page.items)
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .filter_map(to_track_dto)
            .collect();

        tracing::info!("Spotify search for {:?} returned {} tracks", query, tracks.len());

        Ok(tracks)
    }

    async fn request_token(&self) -> Result<CachedToken, Error> {
        let response = self
            .http
            .post(&self.token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
            ])
            .timeout(TOKEN_TIMEOUT)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let body: TokenResponse = response.json().await?;

        let access_token = body
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or(SpotifyError::MissingToken)?;
        let lifetime = body
            .expires_in
            .unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS)
            .saturating_sub(TOKEN_EXPIRY_MARGIN_SECS);

        tracing::debug!("Obtained Spotify access token valid for {}s", lifetime);

        Ok(CachedToken {
            access_token,
            expires_at: Instant::now() + Duration::from_secs(lifetime),
        })
    }

    async fn ensure_success(response: Response) -> Result<Response, Error> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();

        tracing::error!("Spotify responded with status {}: {}", status, body);

        Err(SpotifyError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        }
        .into())
    }
}

fn to_track_dto(track: SpotifyTrack) -> Option<TrackDto> {
    let id = track.id.filter(|id| !id.is_empty())?;

    let artist = track
        .artists
        .into_iter()
        .next()
        .and_then(|artist| artist.name)
        .unwrap_or_else(|| UNKNOWN_ARTIST_NAME.to_string());
    let image_url = track
        .album
        .and_then(|album| album.images.into_iter().next())
        .and_then(|image| image.url);
    let track_url = format!("https://open.spotify.com/track/{}", id);
    let embed_url = ensure_embed_url(&track_url).unwrap_or(track_url);

    Some(TrackDto {
        name: track.name.unwrap_or_else(|| UNKNOWN_TRACK_NAME.to_string()),
        id,
        artist,
        image_url,
        embed_url,
        preview_url: track.preview_url,
        duration_ms: track.duration_ms,
    })
}
