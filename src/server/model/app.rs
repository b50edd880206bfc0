use crate::server::client::{directus::DirectusClient, spotify::SpotifyClient};

#[derive(Clone)]
pub struct AppState {
    pub directus: DirectusClient,
    /// `None` when Spotify credentials are not configured
    pub spotify: Option<SpotifyClient>,
}

impl From<(DirectusClient, Option<SpotifyClient>)> for AppState {
    fn from((directus, spotify): (DirectusClient, Option<SpotifyClient>)) -> Self {
        Self { directus, spotify }
    }
}
