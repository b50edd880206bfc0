use dioxus_logger::tracing;

use crate::{
    model::music::SearchResultsDto,
    server::{
        client::spotify::SpotifyClient,
        error::{music::MusicError, music::MIN_QUERY_LENGTH, spotify::SpotifyError, Error},
        service::retry::RetryContext,
    },
};

/// Number of results returned when the request does not specify a limit.
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Track search backing the dashboard's music picker.
pub struct MusicService<'a> {
    spotify: Option<&'a SpotifyClient>,
}

impl<'a> MusicService<'a> {
    /// # Arguments
    /// - `spotify` - Spotify client, `None` when search is not configured
    pub fn new(spotify: Option<&'a SpotifyClient>) -> Self {
        Self { spotify }
    }

    /// Searches Spotify tracks matching `query`.
    ///
    /// A rejected access token is requested again once before giving up.
    ///
    /// # Returns
    /// - `Ok(SearchResultsDto)` - Search results, possibly empty
    /// - `Err(Error::MusicError(MusicError::QueryTooShort))` - Trimmed query is too short
    /// - `Err(Error::MusicError(MusicError::NotConfigured))` - No Spotify credentials
    /// - `Err(Error::MusicError(MusicError::SearchFailed))` - Spotify failed
    pub async fn search(&self, query: &str, limit: Option<u32>) -> Result<SearchResultsDto, Error> {
        let query = query.trim();

        if query.chars().count() < MIN_QUERY_LENGTH {
            return Err(MusicError::QueryTooShort(query.to_string()).into());
        }

        let spotify = self.spotify.ok_or(MusicError::NotConfigured)?;
        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT);

        let ctx = RetryContext::new();
        let description = format!("music search for {:?}", query);
        let search = || spotify.search_tracks(query, limit);

        let result = match ctx.execute_with_retry(&description, search).await {
            Err(Error::SpotifyError(SpotifyError::Unauthorized)) => {
                tracing::debug!("Retrying {} with a new access token", description);

                ctx.execute_with_retry(&description, search).await
            }
            result => result,
        };

        let results = result.map_err(|e| MusicError::SearchFailed {
            query: query.to_string(),
            reason: e.to_string(),
        })?;

        Ok(SearchResultsDto {
            query: query.to_string(),
            count: results.len(),
            results,
        })
    }
}
