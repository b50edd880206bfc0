use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (server errors)
    Retry,
    /// Failed permanently (bad request)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::ReqwestError(reqwest_error) => {
                if let Some(status) = reqwest_error.status() {
                    match status {
                        // Upstream is temporarily unavailable, backoff and retry
                        s if s.is_server_error() => ErrorRetryStrategy::Retry,
                        _ => ErrorRetryStrategy::Fail,
                    }
                } else if reqwest_error.is_decode() || reqwest_error.is_builder() {
                    // Malformed body or request, retrying yields the same result
                    ErrorRetryStrategy::Fail
                } else {
                    // Network error or connection issue - should retry
                    ErrorRetryStrategy::Retry
                }
            }

            Self::DirectusError(err) => retry_on_server_error(err.status()),
            Self::SpotifyError(err) => retry_on_server_error(err.status()),

            // Session store errors - transient filesystem issues
            Self::SessionError(_) => ErrorRetryStrategy::Retry,
            Self::IoError(_) => ErrorRetryStrategy::Retry,

            Self::ConfigError(_) => ErrorRetryStrategy::Fail,
            Self::AuthError(_) => ErrorRetryStrategy::Fail,
            Self::PageError(_) => ErrorRetryStrategy::Fail,
            Self::MusicError(_) => ErrorRetryStrategy::Fail,
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
            Self::SerdeJsonError(_) => ErrorRetryStrategy::Fail,
            Self::MultipartError(_) => ErrorRetryStrategy::Fail,
        }
    }
}

fn retry_on_server_error(status: Option<u16>) -> ErrorRetryStrategy {
    match status {
        Some(status) if status >= 500 => ErrorRetryStrategy::Retry,
        _ => ErrorRetryStrategy::Fail,
    }
}

#[cfg(test)]
mod tests {
    use crate::server::error::{
        directus::DirectusError, page::PageError, retry::ErrorRetryStrategy,
        spotify::SpotifyError, Error,
    };

    fn retries(err: Error) -> bool {
        matches!(err.to_retry_strategy(), ErrorRetryStrategy::Retry)
    }

    #[test]
    /// Directus 5xx responses are transient, 4xx are not
    fn retries_only_directus_server_errors() {
        assert!(retries(Error::DirectusError(
            DirectusError::UnexpectedStatus {
                status: 503,
                body: String::new(),
            }
        )));
        assert!(!retries(Error::DirectusError(
            DirectusError::UnexpectedStatus {
                status: 403,
                body: String::new(),
            }
        )));
        assert!(!retries(Error::DirectusError(DirectusError::MissingData(
            "page lookup".to_string()
        ))));
    }

    #[test]
    /// An expired Spotify token is not retried in place
    fn does_not_retry_spotify_unauthorized() {
        assert!(!retries(Error::SpotifyError(SpotifyError::Unauthorized)));
        assert!(retries(Error::SpotifyError(
            SpotifyError::UnexpectedStatus {
                status: 502,
                body: String::new(),
            }
        )));
    }

    #[test]
    fn does_not_retry_domain_errors() {
        assert!(!retries(Error::PageError(PageError::NotFound(
            "slug".to_string()
        ))));
        assert!(!retries(Error::InternalError("bug".to_string())));
    }
}
