use serde::{Deserialize, Serialize};

/// Title shown when a page has none.
pub const DEFAULT_TITLE: &str = "Página de Amor";
/// Background color used when a page has none.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#FF6B8B";
/// Value of the dashboard `erro` query parameter after a failed photo upload.
pub const UPLOAD_FAILED_ERROR: &str = "upload";
/// Message shown on the dashboard after a failed photo upload.
pub const UPLOAD_FAILED_MESSAGE: &str = "Erro ao enviar as fotos. Tente novamente.";

/// A page formatted for rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PageDto {
    pub titulo: String,
    pub mensagem: String,
    pub cor_fundo: String,
    pub slug: String,
    /// Resolved photo URLs, in display order
    pub fotos: Vec<String>,
    /// Spotify player URL in embed form
    pub spotify_url: Option<String>,
}

/// Fields editable from the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdatePageDto {
    #[serde(default)]
    pub titulo: String,
    #[serde(default)]
    pub mensagem: String,
    #[serde(default)]
    pub cor_fundo: String,
    #[serde(default)]
    pub spotify_url: String,
}

/// Password submitted on the login form.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LoginRequestDto {
    #[serde(default)]
    pub password: String,
}

/// Successful login response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LoginDto {
    /// Slug the session is now allowed to administer
    pub slug: String,
}
