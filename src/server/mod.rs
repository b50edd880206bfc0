//! Server application core modules.
//!
//! This module contains all server-side functionality for Phygital: HTTP routing, page
//! login, the Directus and Spotify clients, file-backed sessions and configuration.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod session;
pub mod startup;
pub mod util;
