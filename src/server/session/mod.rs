//! Session storage.
//!
//! Sessions are persisted as files under `SESSION_DIR` so they survive restarts and are
//! shared between all runtime worker threads.

pub mod file_store;
