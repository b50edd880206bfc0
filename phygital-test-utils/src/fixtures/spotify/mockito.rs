//! Spotify HTTP mock endpoint creation utilities.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::{
    constant::{
        SPOTIFY_API_PATH, SPOTIFY_TOKEN_PATH, TEST_SPOTIFY_ACCESS_TOKEN, TEST_SPOTIFY_CLIENT_ID,
    },
    fixtures::spotify::{factory, SpotifyFixtures},
};

impl<'a> SpotifyFixtures<'a> {
    /// Create a mock client-credentials token endpoint.
    ///
    /// Matches `POST /api/token` with the client credentials grant and returns a token
    /// valid for one hour.
    pub fn create_token_endpoint(&mut self, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", SPOTIFY_TOKEN_PATH)
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("grant_type".to_string(), "client_credentials".to_string()),
                Matcher::UrlEncoded("client_id".to_string(), TEST_SPOTIFY_CLIENT_ID.to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(factory::mock_token_response(3600).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock token endpoint rejecting the credentials with `status`.
    pub fn create_token_error_endpoint(&mut self, status: usize, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", SPOTIFY_TOKEN_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"invalid_client"}"#)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `GET /v1/search` endpoint returning `response`.
    pub fn create_search_endpoint(&mut self, response: Value, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", format!("{}/search", SPOTIFY_API_PATH).as_str())
            .match_query(Matcher::UrlEncoded("type".to_string(), "track".to_string()))
            .match_header(
                "authorization",
                format!("Bearer {}", TEST_SPOTIFY_ACCESS_TOKEN).as_str(),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(response.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `GET /v1/search` endpoint failing with `status`.
    pub fn create_search_error_endpoint(&mut self, status: usize, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", format!("{}/search", SPOTIFY_API_PATH).as_str())
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{"status":401,"message":"The access token expired"}}"#)
            .expect(expected_requests)
            .create()
    }
}
