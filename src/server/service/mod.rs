//! Service layer for business logic.
//!
//! Services coordinate the Directus and Spotify clients with the session: page reads and
//! edits, page login, music search and health checks. Upstream reads go through
//! `RetryContext` so transient failures are retried with backoff.

pub mod auth;
pub mod health;
pub mod music;
pub mod page;
pub mod retry;
