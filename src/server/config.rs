//! Environment configuration.

use std::path::PathBuf;

use dioxus_logger::tracing;

use crate::server::error::config::ConfigError;

/// Session directory used when `SESSION_DIR` is unset.
pub const DEFAULT_SESSION_DIR: &str = "./.sessions/";
/// Number of runtime worker threads used when `WORKERS` is unset.
pub const DEFAULT_WORKERS: usize = 4;
/// Spotify market used when `SPOTIFY_MARKET` is unset.
pub const DEFAULT_SPOTIFY_MARKET: &str = "BR";
/// Minimum length of `SECRET_KEY`, the size of a cookie signing key.
pub const MIN_SECRET_KEY_LEN: usize = 64;

const DEVELOPMENT_SECRET_KEY: &str =
    "phygital-development-secret-key-change-in-production-0123456789abcdef";

/// Spotify application credentials for the client-credentials flow.
#[derive(Clone, Debug, PartialEq)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Directus base URL without trailing slash
    pub directus_url: String,
    pub directus_token: String,
    /// `None` disables music search
    pub spotify: Option<SpotifyCredentials>,
    pub spotify_market: String,
    /// Cookie signing secret, at least [`MIN_SECRET_KEY_LEN`] bytes
    pub secret_key: String,
    pub session_dir: PathBuf,
    /// Whether session cookies carry the `Secure` flag, only sent over HTTPS
    pub session_secure: bool,
    pub workers: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, `from_env` uses the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require =
            |key: &str| get(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));

        let directus_url = require("DIRECTUS_URL")?.trim_end_matches('/').to_string();
        if !(directus_url.starts_with("http://") || directus_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl {
                var: "DIRECTUS_URL".to_string(),
                value: directus_url,
            });
        }
        let directus_token = require("DIRECTUS_TOKEN")?;

        let spotify = match (get("SPOTIFY_CLIENT_ID"), get("SPOTIFY_CLIENT_SECRET")) {
            (Some(client_id), Some(client_secret)) => Some(SpotifyCredentials {
                client_id,
                client_secret,
            }),
            _ => {
                tracing::warn!(
                    "SPOTIFY_CLIENT_ID or SPOTIFY_CLIENT_SECRET not set, music search is disabled"
                );
                None
            }
        };

        let secret_key = match get("SECRET_KEY") {
            Some(key) if key.len() < MIN_SECRET_KEY_LEN => {
                return Err(ConfigError::InvalidEnvValue {
                    var: "SECRET_KEY".to_string(),
                    reason: format!("must be at least {} bytes", MIN_SECRET_KEY_LEN),
                });
            }
            Some(key) => key,
            None => {
                tracing::warn!("SECRET_KEY not set, using the development key");
                DEVELOPMENT_SECRET_KEY.to_string()
            }
        };

        // Defaults to secure cookies outside debug builds
        let session_secure = match get("SESSION_SECURE") {
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "SESSION_SECURE".to_string(),
                        reason: format!("expected true or false, got {:?}", value),
                    });
                }
            },
            None => !cfg!(debug_assertions),
        };

        let workers = match get("WORKERS") {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(workers) if workers > 0 => workers,
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "WORKERS".to_string(),
                        reason: format!("expected a positive integer, got {:?}", value),
                    });
                }
            },
            None => DEFAULT_WORKERS,
        };

        Ok(Self {
            directus_url,
            directus_token,
            spotify,
            spotify_market: get("SPOTIFY_MARKET")
                .unwrap_or_else(|| DEFAULT_SPOTIFY_MARKET.to_string()),
            secret_key,
            session_dir: PathBuf::from(
                get("SESSION_DIR").unwrap_or_else(|| DEFAULT_SESSION_DIR.to_string()),
            ),
            session_secure,
            workers,
        })
    }
}
