use super::{
    CatalogConfig, CatalogError, Result,
    source::{ListKind, MovieSource, RequestOptions},
};
use crate::decoder::{self, DecodeError, MovieDetail, MovieSummary, PagedResult};
use tracing::{debug, warn};

/// Fetches movie data through a [`MovieSource`] and decodes it
pub struct MovieCatalog<S> {
    source: S,
    options: RequestOptions,
}

impl<S: MovieSource> MovieCatalog<S> {
    /// Create a catalog with default configuration
    pub fn new(source: S) -> Self {
        Self::with_config(source, &CatalogConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(source: S, config: &CatalogConfig) -> Self {
        Self {
            source,
            options: config.request_options(),
        }
    }

    /// Underlying source
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Fetch and decode a single movie
    pub async fn movie(&self, id: i64) -> Result<MovieDetail> {
        debug!("Fetching movie detail {id}");
        let body = self.source.movie_detail(id, &self.options).await?;

        let movie = decoder::decode_movie_detail_str(&body)
            .map_err(|e| Self::decode_failed(&format!("movie {id}"), e))?;

        debug!("Decoded movie {} ({})", movie.title, movie.id);
        Ok(movie)
    }

    /// Fetch and decode one page of a movie list
    pub async fn list(&self, kind: ListKind, page: u32) -> Result<PagedResult<MovieSummary>> {
        Self::check_page(page)?;

        debug!("Fetching {kind} list, page {page}");
        let body = self.source.movie_list(kind, page, &self.options).await?;

        let result = decoder::decode_movie_list_str(&body)
            .map_err(|e| Self::decode_failed(&format!("{kind} list page {page}"), e))?;

        debug!(
            "Decoded {} results for {kind} list (page {}/{})",
            result.results.len(),
            result.page,
            result.total_pages
        );
        Ok(result)
    }

    /// Search movies by title
    pub async fn search(&self, query: &str, page: u32) -> Result<PagedResult<MovieSummary>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CatalogError::InvalidRequest(
                "search query must not be empty".to_string(),
            ));
        }
        Self::check_page(page)?;

        debug!("Searching movies for '{query}', page {page}");
        let body = self.source.search_movies(query, page, &self.options).await?;

        let result = decoder::decode_search_str(&body)
            .map_err(|e| Self::decode_failed(&format!("search '{query}'"), e))?;

        debug!(
            "Search for '{query}' returned {} of {} results",
            result.results.len(),
            result.total_results
        );
        Ok(result)
    }

    fn check_page(page: u32) -> Result<()> {
        if page == 0 {
            return Err(CatalogError::InvalidRequest(
                "page numbers start at 1".to_string(),
            ));
        }
        Ok(())
    }

    fn decode_failed(what: &str, error: DecodeError) -> CatalogError {
        warn!("Failed to decode {what}: {error}");
        CatalogError::Decode(error)
    }
}
