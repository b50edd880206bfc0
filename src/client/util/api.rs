//! Calls to the Phygital JSON API from the browser.

use std::fmt;

#[cfg(feature = "web")]
use reqwasm::http::{Request, RequestCredentials, Response};

#[cfg(feature = "web")]
use crate::model::{
    api::ErrorDto,
    music::SearchResultsDto,
    page::{LoginDto, LoginRequestDto, PageDto, UpdatePageDto},
};

#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    NotFound,
    /// Not logged in or wrong password, with the server's message
    Unauthorized(String),
    Request(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "Página não encontrada"),
            Self::Unauthorized(message) | Self::Request(message) => write!(f, "{}", message),
        }
    }
}

/// Retrieve a page for public display
#[cfg(feature = "web")]
pub async fn get_page(slug: &str) -> Result<PageDto, ApiError> {
    let response = send(Request::get(&format!("/api/page/{}", slug))).await?;

    parse(response).await
}

/// Retrieve a page for the dashboard, requires being logged into it
#[cfg(feature = "web")]
pub async fn get_admin_page(slug: &str) -> Result<PageDto, ApiError> {
    let response = send(Request::get(&format!("/api/page/{}/admin", slug))).await?;

    parse(response).await
}

#[cfg(feature = "web")]
pub async fn login(slug: &str, password: &str) -> Result<LoginDto, ApiError> {
    let body = LoginRequestDto {
        password: password.to_string(),
    };
    let request = json_body(Request::post(&format!("/api/page/{}/login", slug)), &body)?;

    parse(send(request).await?).await
}

#[cfg(feature = "web")]
pub async fn update_page(slug: &str, update: &UpdatePageDto) -> Result<PageDto, ApiError> {
    let request = json_body(Request::put(&format!("/api/page/{}", slug)), update)?;

    parse(send(request).await?).await
}

#[cfg(feature = "web")]
pub async fn search_tracks(query: &str) -> Result<SearchResultsDto, ApiError> {
    let url = format!("/api/spotify-search?q={}", urlencoding::encode(query));

    parse(send(Request::get(&url)).await?).await
}

#[cfg(feature = "web")]
fn json_body<T: serde::Serialize>(request: Request, body: &T) -> Result<Request, ApiError> {
    let body = serde_json::to_string(body)
        .map_err(|e| ApiError::Request(format!("Failed to serialize request: {}", e)))?;

    Ok(request
        .header("Content-Type", "application/json")
        .body(body))
}

#[cfg(feature = "web")]
async fn send(request: Request) -> Result<Response, ApiError> {
    request
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Request(format!("Failed to send request: {}", e)))
}

#[cfg(feature = "web")]
async fn parse<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();

    if status == 200 {
        return response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Request(format!("Failed to parse response: {}", e)));
    }

    // Error bodies carry an `error` message, search errors add an empty `results`
    let message = match response.json::<ErrorDto>().await {
        Ok(error_dto) => error_dto.error,
        Err(_) => format!("Request failed with status {}", status),
    };

    Err(match status {
        401 => ApiError::Unauthorized(message),
        404 => ApiError::NotFound,
        _ => ApiError::Request(message),
    })
}
