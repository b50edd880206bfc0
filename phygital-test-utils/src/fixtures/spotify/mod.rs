//! Spotify fixtures.

pub mod factory;
pub mod mockito;

use crate::TestContext;

/// Fixture helper for creating mock Spotify endpoints on the test server.
pub struct SpotifyFixtures<'a> {
    pub(crate) setup: &'a mut TestContext,
}

impl TestContext {
    /// Access Spotify fixture helpers.
    pub fn spotify(&mut self) -> SpotifyFixtures<'_> {
        SpotifyFixtures { setup: self }
    }
}
