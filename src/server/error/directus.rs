use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectusError {
    #[error("Directus responded with status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("Directus response to {0} did not contain data")]
    MissingData(String),
}

impl DirectusError {
    /// HTTP status returned by Directus, if the error came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::MissingData(_) => None,
        }
    }
}
