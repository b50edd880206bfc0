//! HTTP clients for the upstream services.
//!
//! Directus stores the pages and their photos, Spotify provides the music search. Both
//! clients share a single `reqwest::Client` connection pool and are cheap to clone.

pub mod directus;
pub mod spotify;
