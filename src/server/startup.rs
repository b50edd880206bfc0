use std::time::Duration as StdDuration;

use dioxus_logger::tracing;
use time::Duration;
use tower_sessions::{
    cookie::{Key, SameSite},
    service::SignedCookie,
    ExpiredDeletion, Expiry, SessionManagerLayer,
};

use crate::server::{
    client::{directus::DirectusClient, spotify::SpotifyClient},
    config::Config,
    error::{config::ConfigError, Error},
    session::file_store::FileSessionStore,
};

/// How often expired session files are removed.
pub const SESSION_CLEANUP_INTERVAL: StdDuration = StdDuration::from_secs(60 * 60);

/// Build the HTTP client shared by the Directus and Spotify clients
pub fn build_http_client() -> Result<reqwest::Client, Error> {
    let http = reqwest::Client::builder()
        .user_agent(concat!("phygital/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(http)
}

pub fn build_directus_client(config: &Config, http: reqwest::Client) -> DirectusClient {
    DirectusClient::new(http, &config.directus_url, &config.directus_token)
}

/// Build the Spotify client, `None` when credentials are not configured
pub fn build_spotify_client(config: &Config, http: reqwest::Client) -> Option<SpotifyClient> {
    config
        .spotify
        .clone()
        .map(|credentials| SpotifyClient::new(http, credentials, &config.spotify_market))
}

/// Create the session directory if it does not exist yet
pub async fn prepare_session_dir(config: &Config) -> Result<(), Error> {
    tokio::fs::create_dir_all(&config.session_dir).await?;

    tracing::info!("Storing sessions in {}", config.session_dir.display());

    Ok(())
}

/// Configure session management backed by session files with signed cookies
pub fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<FileSessionStore, SignedCookie>, Error> {
    let session_store = FileSessionStore::new(&config.session_dir);

    let key = Key::try_from(config.secret_key.as_bytes()).map_err(|e| {
        ConfigError::InvalidEnvValue {
            var: "SECRET_KEY".to_string(),
            reason: e.to_string(),
        }
    })?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(config.session_secure)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
        .with_signed(key);

    Ok(session)
}

/// Periodically delete expired session files in the background
pub fn spawn_session_cleanup(config: &Config) {
    let store = FileSessionStore::new(&config.session_dir);

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_CLEANUP_INTERVAL);

        loop {
            interval.tick().await;

            if let Err(e) = store.delete_expired().await {
                tracing::error!("Failed to delete expired sessions: {}", e);
            }
        }
    });
}
