//! Directus fixtures.

pub mod factory;
pub mod mockito;

use crate::TestContext;

/// Fixture helper for creating mock Directus endpoints on the test server.
pub struct DirectusFixtures<'a> {
    pub(crate) setup: &'a mut TestContext,
}

impl TestContext {
    /// Access Directus fixture helpers.
    pub fn directus(&mut self) -> DirectusFixtures<'_> {
        DirectusFixtures { setup: self }
    }
}
