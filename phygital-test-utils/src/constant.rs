//! Test configuration constants for the Directus and Spotify clients.
//!
//! These values are placeholders used to build clients pointed at the mock server.
//! None of them are real credentials.

/// Static token sent as the Directus bearer token in tests.
pub static TEST_DIRECTUS_TOKEN: &str = "test_directus_token";

/// Mock Spotify client ID.
pub static TEST_SPOTIFY_CLIENT_ID: &str = "spotify_client_id";

/// Mock Spotify client secret.
pub static TEST_SPOTIFY_CLIENT_SECRET: &str = "spotify_client_secret";

/// Access token returned by the mock Spotify token endpoint.
pub static TEST_SPOTIFY_ACCESS_TOKEN: &str = "test_spotify_access_token";

/// Market requested from the Spotify search API in tests.
pub static TEST_SPOTIFY_MARKET: &str = "BR";

/// Path of the Spotify token endpoint on the mock server.
pub static SPOTIFY_TOKEN_PATH: &str = "/api/token";

/// Path prefix of the Spotify Web API on the mock server.
pub static SPOTIFY_API_PATH: &str = "/v1";
