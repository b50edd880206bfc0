//! Server application models and type definitions.
//!
//! This module contains the application state shared by handlers, the wire formats of the
//! Directus and Spotify APIs, uploaded photo payloads and typed session values.

pub mod app;
pub mod directus;
pub mod session;
pub mod spotify;
pub mod upload;
