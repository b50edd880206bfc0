//! Session data models.
//!
//! Type-safe wrappers for values stored in the visitor's session through tower-sessions.

pub mod admin;
