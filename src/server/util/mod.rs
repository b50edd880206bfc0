//! Utility functions and helpers for server operations.
//!
//! Spotify URL normalization, uploaded filename sanitizing and test helpers.

pub mod filename;
pub mod spotify_url;
