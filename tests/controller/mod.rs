//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, verifying status codes, redirects,
//! response bodies and session changes against a mock Directus & Spotify server.

mod auth;
mod health;
mod music;
mod page;
