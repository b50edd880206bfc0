//! HTTP controller endpoints for the Phygital web API.
//!
//! Controllers extract the request, call the services and turn the outcome into a
//! response. They integrate with tower-sessions for the page login and use utoipa for
//! OpenAPI documentation.

pub mod auth;
pub mod health;
pub mod music;
pub mod page;
