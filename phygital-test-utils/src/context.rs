//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns a
//! mock HTTP server standing in for both Directus and Spotify, plus an in-memory session
//! used to exercise login flows.

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use tower_sessions::{MemoryStore, Session};

use crate::{
    constant::{SPOTIFY_API_PATH, SPOTIFY_TOKEN_PATH},
    error::TestError,
};

/// Test context structure returned by `TestBuilder`
///
/// Provides access to:
/// - Mock server URLs for Directus and Spotify
/// - Session backed by an in-memory store
/// - Collection of mock endpoints for assertion
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_page(directus_factory::mock_page("lucasegabi"), 1)
///     .build()
///     .await?;
///
/// let directus_url = test.directus_url();
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Session for test authentication flows
    pub session: Session,

    /// Mock HTTP server for Directus & Spotify endpoints
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context with a fresh mock server and empty session.
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        Ok(TestContext {
            session,
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL Directus clients should use, the root of the mock server.
    pub fn directus_url(&self) -> String {
        self.server.url()
    }

    /// Spotify client-credentials token URL on the mock server.
    pub fn spotify_token_url(&self) -> String {
        format!("{}{}", self.server.url(), SPOTIFY_TOKEN_PATH)
    }

    /// Spotify Web API base URL on the mock server.
    pub fn spotify_api_base(&self) -> String {
        format!("{}{}", self.server.url(), SPOTIFY_API_PATH)
    }

    /// Direct access to the mock server for endpoints created after `build()`.
    pub fn server(&mut self) -> &mut ServerGuard {
        &mut self.server
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
