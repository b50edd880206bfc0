//! Test fixture modules for mock HTTP endpoints and upstream payloads.
//!
//! - `directus` - page items, uploaded files and the server ping endpoint
//! - `spotify` - client-credentials token and track search endpoints

pub mod directus;
pub mod spotify;
