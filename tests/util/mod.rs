//! Helpers building application state and requests for controller tests.

use axum::{
    body::{to_bytes, Body},
    extract::{FromRequest, Multipart, Request},
    http::header,
    response::Response,
};
use phygital::server::{
    client::{directus::DirectusClient, spotify::SpotifyClient},
    config::SpotifyCredentials,
    model::app::AppState,
};
use phygital_test_utils::{
    constant::{
        TEST_DIRECTUS_TOKEN, TEST_SPOTIFY_CLIENT_ID, TEST_SPOTIFY_CLIENT_SECRET,
        TEST_SPOTIFY_MARKET,
    },
    TestContext,
};
use serde::de::DeserializeOwned;

const BOUNDARY: &str = "phygital-test-boundary";

/// Extension trait for TestContext to create AppState pointed at the mock server
pub trait TestSetupExt {
    fn app_state(&self) -> AppState;
    fn app_state_without_spotify(&self) -> AppState;
}

impl TestSetupExt for TestContext {
    fn app_state(&self) -> AppState {
        let spotify = SpotifyClient::new(
            reqwest::Client::new(),
            SpotifyCredentials {
                client_id: TEST_SPOTIFY_CLIENT_ID.to_string(),
                client_secret: TEST_SPOTIFY_CLIENT_SECRET.to_string(),
            },
            TEST_SPOTIFY_MARKET,
        )
        .with_endpoints(self.spotify_token_url(), self.spotify_api_base());

        AppState::from((directus_client(self), Some(spotify)))
    }

    fn app_state_without_spotify(&self) -> AppState {
        AppState::from((directus_client(self), None))
    }
}

fn directus_client(test: &TestContext) -> DirectusClient {
    DirectusClient::new(
        reqwest::Client::new(),
        test.directus_url(),
        TEST_DIRECTUS_TOKEN,
    )
}

/// Build a `Multipart` extractor from `(field name, filename, bytes)` parts
pub async fn multipart(parts: &[(&str, &str, &[u8])]) -> Multipart {
    let mut body = Vec::new();

    for (name, filename, bytes) in parts {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: image/jpeg\r\n\r\n",
                BOUNDARY, name, filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    let request = Request::builder()
        .method("POST")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap();

    Multipart::from_request(request, &()).await.unwrap()
}

/// Redirect target of a response
pub fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

/// Deserialize a JSON response body
pub async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
