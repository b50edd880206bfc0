//! Data transfer objects shared by the browser client and the server.

pub mod api;
pub mod health;
pub mod music;
pub mod page;
