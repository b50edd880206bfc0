use dioxus_logger::tracing;

use crate::{
    model::page::{PageDto, UpdatePageDto, DEFAULT_BACKGROUND_COLOR, DEFAULT_TITLE},
    server::{
        client::directus::DirectusClient,
        error::{page::PageError, Error},
        model::{
            directus::{ItemId, PageContentPatch, PagePhotosPatch, PageRecord, PhotoRef},
            upload::PhotoUpload,
        },
        service::retry::RetryContext,
        util::{filename::sanitize_filename, spotify_url::ensure_embed_url},
    },
};

/// Service for reading and editing pages stored in Directus.
pub struct PageService<'a> {
    directus: &'a DirectusClient,
}

impl<'a> PageService<'a> {
    pub fn new(directus: &'a DirectusClient) -> Self {
        Self { directus }
    }

    /// Fetches the raw page record, retrying transient Directus failures.
    pub async fn find_record(&self, slug: &str) -> Result<Option<PageRecord>, Error> {
        RetryContext::new()
            .execute_with_retry(&format!("page lookup for {}", slug), || {
                self.directus.get_page_by_slug(slug)
            })
            .await
    }

    /// Retrieves the page with the given slug formatted for rendering.
    ///
    /// # Returns
    /// - `Ok(Some(PageDto))` - Page found
    /// - `Ok(None)` - No page has this slug
    /// - `Err(Error)` - Directus failed after retries
    pub async fn get_page(&self, slug: &str) -> Result<Option<PageDto>, Error> {
        let page = self
            .find_record(slug)
            .await?
            .map(|record| format_page(self.directus, record));

        Ok(page)
    }

    /// Saves the dashboard edit form and returns the updated page.
    ///
    /// Existing photos are kept as they are, a blank Spotify URL clears the player.
    ///
    /// # Returns
    /// - `Ok(PageDto)` - The page as stored after the update
    /// - `Err(Error::PageError(PageError::NotFound))` - No page has this slug
    /// - `Err(Error::PageError(PageError::UpdateFailed))` - Directus rejected the update
    pub async fn update_page(&self, slug: &str, update: UpdatePageDto) -> Result<PageDto, Error> {
        let record = self.require_record(slug).await?;
        let id = record_id(slug, &record)?;

        let cor_fundo = match update.cor_fundo.trim() {
            "" => DEFAULT_BACKGROUND_COLOR.to_string(),
            color => color.to_string(),
        };

        let patch = PageContentPatch {
            titulo: update.titulo.trim().to_string(),
            mensagem: update.mensagem.trim().to_string(),
            cor_fundo,
            spotify_url: ensure_embed_url(&update.spotify_url),
            fotos: record.photo_ids(),
        };

        self.patch(slug, &id, &patch).await?;

        tracing::info!("Page {} updated from the dashboard", slug);

        self.find_record(slug)
            .await?
            .map(|record| format_page(self.directus, record))
            .ok_or_else(|| PageError::NotFound(slug.to_string()).into())
    }

    /// Uploads photos and appends them to the page's gallery.
    ///
    /// Uploads without a filename are skipped, as are uploads Directus rejects. The page is
    /// patched once with the existing photos followed by the new ones in upload order.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of photos added
    /// - `Err(Error::PageError(PageError::NotFound))` - No page has this slug
    /// - `Err(Error::PageError(PageError::UpdateFailed))` - Directus rejected the update
    pub async fn add_photos(&self, slug: &str, uploads: Vec<PhotoUpload>) -> Result<usize, Error> {
        let record = self.require_record(slug).await?;
        let id = record_id(slug, &record)?;

        let mut new_ids: Vec<ItemId> = Vec::new();

        for mut upload in uploads {
            if upload.filename.trim().is_empty() {
                continue;
            }

            upload.filename = sanitize_filename(&upload.filename);

            match self.directus.upload_file(&upload).await {
                Ok(file) => match file.id {
                    Some(file_id) => new_ids.push(file_id),
                    None => tracing::error!(
                        "Directus returned uploaded file {} without an ID",
                        upload.filename
                    ),
                },
                Err(e) => tracing::error!("Failed to upload {}: {}", upload.filename, e),
            }
        }

        if new_ids.is_empty() {
            return Ok(0);
        }

        let added = new_ids.len();
        let mut fotos = record.photo_ids();
        fotos.extend(new_ids);

        self.patch(slug, &id, &PagePhotosPatch { fotos }).await?;

        tracing::info!("Added {} photos to page {}", added, slug);

        Ok(added)
    }

    async fn require_record(&self, slug: &str) -> Result<PageRecord, Error> {
        self.find_record(slug)
            .await?
            .ok_or_else(|| PageError::NotFound(slug.to_string()).into())
    }

    async fn patch<T: serde::Serialize>(
        &self,
        slug: &str,
        id: &ItemId,
        patch: &T,
    ) -> Result<(), Error> {
        self.directus.update_page(id, patch).await.map_err(|e| {
            tracing::error!("Failed to update page {}: {}", slug, e);

            PageError::UpdateFailed(slug.to_string()).into()
        })
    }
}

fn record_id(slug: &str, record: &PageRecord) -> Result<ItemId, Error> {
    record
        .id
        .clone()
        .ok_or_else(|| PageError::MissingId(slug.to_string()).into())
}

/// Formats a page record for rendering, filling defaults for missing fields.
///
/// Expanded photos resolve to their asset URL, bare IDs cannot be resolved and are skipped.
pub fn format_page(directus: &DirectusClient, record: PageRecord) -> PageDto {
    let fotos = record
        .fotos
        .unwrap_or_default()
        .iter()
        .filter_map(|photo| match photo {
            PhotoRef::File(file) => directus.asset_url(file),
            PhotoRef::Id(_) => None,
        })
        .collect();

    PageDto {
        titulo: record.titulo.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        mensagem: record.mensagem.unwrap_or_default(),
        cor_fundo: record
            .cor_fundo
            .unwrap_or_else(|| DEFAULT_BACKGROUND_COLOR.to_string()),
        slug: record.slug.unwrap_or_default(),
        fotos,
        spotify_url: record
            .spotify_url
            .as_deref()
            .and_then(ensure_embed_url),
    }
}
