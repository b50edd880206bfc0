use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpotifyError {
    /// The access token was rejected, it will be requested again on the next call.
    #[error("Spotify rejected the access token")]
    Unauthorized,
    #[error("Spotify responded with status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("Spotify token response did not contain an access token")]
    MissingToken,
}

impl SpotifyError {
    /// HTTP status returned by Spotify, if the error came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::MissingToken => None,
        }
    }
}
