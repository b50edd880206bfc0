//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring the mock upstream services
//! before a test runs. Configuration methods queue endpoints which are all created during
//! the final `build()` call.

use mockito::Mock;
use serde_json::Value;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()` to create a complete
/// `TestContext`.
pub struct TestBuilder {
    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured Directus endpoint shortcuts
    page_endpoints: Vec<(Value, usize)>,         // (page item, expected_requests)
    missing_page_endpoints: Vec<(String, usize)>, // (slug, expected_requests)
    page_update_endpoints: Vec<(i64, Option<Value>, usize)>, // (page_id, expected body, expected_requests)
    file_upload_endpoints: Vec<(Value, usize)>,
    ping_endpoints: Vec<(usize, usize)>, // (status, expected_requests)

    // Pre-configured Spotify endpoint shortcuts
    spotify_token_endpoints: Vec<usize>,
    spotify_search_endpoints: Vec<(Value, usize)>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no mock endpoints configured.
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            page_endpoints: Vec::new(),
            missing_page_endpoints: Vec::new(),
            page_update_endpoints: Vec::new(),
            file_upload_endpoints: Vec::new(),
            ping_endpoints: Vec::new(),
            spotify_token_endpoints: Vec::new(),
            spotify_search_endpoints: Vec::new(),
        }
    }

    /// Add a Directus page lookup endpoint returning `page`.
    ///
    /// # Arguments
    /// - `page` - Page item JSON, see `directus_factory::mock_page`
    /// - `expected_requests` - Number of times the lookup should be made
    pub fn with_page(mut self, page: Value, expected_requests: usize) -> Self {
        self.page_endpoints.push((page, expected_requests));
        self
    }

    /// Add a Directus page lookup endpoint returning no page for `slug`.
    pub fn with_missing_page(mut self, slug: impl Into<String>, expected_requests: usize) -> Self {
        self.missing_page_endpoints
            .push((slug.into(), expected_requests));
        self
    }

    /// Add a successful Directus page update endpoint.
    ///
    /// # Arguments
    /// - `page_id` - ID in the `PATCH /items/paginas/{page_id}` path
    /// - `body` - Exact JSON body the request must carry, `None` accepts any body
    /// - `expected_requests` - Number of times the update should be made
    pub fn with_page_update(
        mut self,
        page_id: i64,
        body: Option<Value>,
        expected_requests: usize,
    ) -> Self {
        self.page_update_endpoints
            .push((page_id, body, expected_requests));
        self
    }

    /// Add a Directus file upload endpoint returning `file`.
    pub fn with_file_upload(mut self, file: Value, expected_requests: usize) -> Self {
        self.file_upload_endpoints.push((file, expected_requests));
        self
    }

    /// Add a Directus ping endpoint answering with `status`.
    pub fn with_directus_ping(mut self, status: usize, expected_requests: usize) -> Self {
        self.ping_endpoints.push((status, expected_requests));
        self
    }

    /// Add a Spotify client-credentials token endpoint.
    pub fn with_spotify_token(mut self, expected_requests: usize) -> Self {
        self.spotify_token_endpoints.push(expected_requests);
        self
    }

    /// Add a Spotify track search endpoint returning `tracks`.
    pub fn with_spotify_search(mut self, tracks: Vec<Value>, expected_requests: usize) -> Self {
        self.spotify_search_endpoints.push((
            crate::fixtures::spotify::factory::mock_search_response(tracks),
            expected_requests,
        ));
        self
    }

    /// Add a custom mock endpoint with full control over the mock server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context and create every queued mock endpoint.
    ///
    /// Custom endpoints are created first so tests can layer a specific mock in front of
    /// a shortcut endpoint for the same path.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (page, expected) in self.page_endpoints {
            mocks.push(setup.directus().create_page_endpoint(page, expected));
        }

        for (slug, expected) in self.missing_page_endpoints {
            mocks.push(
                setup
                    .directus()
                    .create_missing_page_endpoint(&slug, expected),
            );
        }

        for (page_id, body, expected) in self.page_update_endpoints {
            mocks.push(
                setup
                    .directus()
                    .create_page_update_endpoint(page_id, 200, body, expected),
            );
        }

        for (file, expected) in self.file_upload_endpoints {
            mocks.push(setup.directus().create_file_upload_endpoint(file, expected));
        }

        for (status, expected) in self.ping_endpoints {
            mocks.push(setup.directus().create_ping_endpoint(status, expected));
        }

        for expected in self.spotify_token_endpoints {
            mocks.push(setup.spotify().create_token_endpoint(expected));
        }

        for (response, expected) in self.spotify_search_endpoints {
            mocks.push(setup.spotify().create_search_endpoint(response, expected));
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}
