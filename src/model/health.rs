use serde::{Deserialize, Serialize};

/// Reachability of an upstream service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    /// Not checked, e.g. the service is not configured
    #[default]
    Unknown,
    Connected,
    /// The service answered but the check failed
    Error,
    /// The service could not be reached
    Disconnected,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct HealthDto {
    pub status: String,
    /// RFC 3339 timestamp of the check
    pub timestamp: String,
    pub directus: ServiceStatus,
    pub spotify: ServiceStatus,
}
