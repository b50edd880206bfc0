use std::time::Duration;

use dioxus_logger::tracing;
use reqwest::{multipart, Response};
use serde::Serialize;

use crate::server::{
    error::{directus::DirectusError, Error},
    model::{
        directus::{DirectusFile, DirectusResponse, ItemId, PageRecord},
        upload::PhotoUpload,
    },
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(30);
const PING_TIMEOUT: Duration = Duration::from_secs(5);

/// Collection holding the pages.
pub const PAGES_COLLECTION: &str = "paginas";

/// Client for the Directus REST API authenticated with a static token.
#[derive(Clone)]
pub struct DirectusClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl DirectusClient {
    /// Creates a new Directus client.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client
    /// - `base_url` - Directus URL, a trailing `/` is removed
    /// - `token` - Static access token sent as bearer token
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            http,
            base_url,
            token: token.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Public URL of a file from the file library.
    ///
    /// Files stored on disk are served from `/assets/{filename_disk}`, anything else with an
    /// ID falls back to `/files/{id}`.
    pub fn asset_url(&self, file: &DirectusFile) -> Option<String> {
        if let Some(filename_disk) = &file.filename_disk {
            return Some(format!("{}/assets/{}", self.base_url, filename_disk));
        }

        file.id
            .as_ref()
            .map(|id| format!("{}/files/{}", self.base_url, id))
    }

    /// Fetches the page with the given slug, including its expanded photos.
    ///
    /// # Returns
    /// - `Ok(Some(PageRecord))` - Page found
    /// - `Ok(None)` - No page has this slug
    /// - `Err(Error)` - Transport failure or unexpected Directus response
    pub async fn get_page_by_slug(&self, slug: &str) -> Result<Option<PageRecord>, Error> {
        let response = self
            .http
            .get(format!("{}/items/{}", self.base_url, PAGES_COLLECTION))
            .bearer_auth(&self.token)
            .query(&[
                ("filter[slug][_eq]", slug),
                ("fields", "*,fotos.*"),
                ("limit", "1"),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let body: DirectusResponse<Vec<PageRecord>> = response.json().await?;

        let page = body.data.and_then(|pages| pages.into_iter().next());

        match page {
            Some(_) => tracing::info!("Found page {}", slug),
            None => tracing::info!("Page {} not found", slug),
        }

        Ok(page)
    }

    /// Patches the page `id` with the fields of `patch`.
    pub async fn update_page<T: Serialize>(&self, id: &ItemId, patch: &T) -> Result<(), Error> {
        let response = self
            .http
            .patch(format!("{}/items/{}/{}", self.base_url, PAGES_COLLECTION, id))
            .bearer_auth(&self.token)
            .json(patch)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        Self::ensure_success(response).await?;

        tracing::info!("Updated page ID {}", id);

        Ok(())
    }

    /// Uploads a photo to the file library.
    ///
    /// # Returns
    /// - `Ok(DirectusFile)` - The created file
    /// - `Err(Error::DirectusError(DirectusError::MissingData))` - Directus answered without the file
    /// - `Err(Error)` - Transport failure or unexpected Directus response
    pub async fn upload_file(&self, upload: &PhotoUpload) -> Result<DirectusFile, Error> {
        let part = multipart::Part::bytes(upload.bytes.clone())
            .file_name(upload.filename.clone())
            .mime_str(&upload.content_type)?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(format!("{}/files", self.base_url))
            .bearer_auth(&self.token)
            .multipart(form)
            .timeout(UPLOAD_TIMEOUT)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let body: DirectusResponse<DirectusFile> = response.json().await?;

        let file = body
            .data
            .ok_or_else(|| DirectusError::MissingData("file upload".to_string()))?;

        tracing::info!("Uploaded file {}", upload.filename);

        Ok(file)
    }

    /// Pings the Directus server, unauthenticated.
    ///
    /// # Returns
    /// - `Ok(true)` - Directus answered with a success status
    /// - `Ok(false)` - Directus answered with an error status
    /// - `Err(Error::ReqwestError)` - Directus could not be reached
    pub async fn ping(&self) -> Result<bool, Error> {
        let response = self
            .http
            .get(format!("{}/server/ping", self.base_url))
            .timeout(PING_TIMEOUT)
            .send()
            .await?;

        Ok(response.status().is_success())
    }

    async fn ensure_success(response: Response) -> Result<Response, Error> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();

        tracing::error!("Directus responded with status {}: {}", status, body);

        Err(DirectusError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        }
        .into())
    }
}
