use async_trait::async_trait;

/// Movie list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Popular,
    TopRated,
    NowPlaying,
    Upcoming,
}

impl ListKind {
    /// Endpoint path for this list
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Popular => "/movie/popular",
            Self::TopRated => "/movie/top_rated",
            Self::NowPlaying => "/movie/now_playing",
            Self::Upcoming => "/movie/upcoming",
        }
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Popular => write!(f, "popular"),
            Self::TopRated => write!(f, "top_rated"),
            Self::NowPlaying => write!(f, "now_playing"),
            Self::Upcoming => write!(f, "upcoming"),
        }
    }
}

/// Per-request query options forwarded to the source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Preferred language (e.g. "en-US")
    pub language: Option<String>,
    /// Region filter (ISO 3166-1)
    pub region: Option<String>,
    /// Include adult titles in search results
    pub include_adult: bool,
}

impl RequestOptions {
    /// Query parameters for these options, in a stable order
    #[must_use]
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(ref language) = self.language {
            params.push(("language", language.clone()));
        }
        if let Some(ref region) = self.region {
            params.push(("region", region.clone()));
        }
        params.push(("include_adult", self.include_adult.to_string()));
        params
    }
}

/// Errors reported by a [`MovieSource`]
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Transport that fetches raw response bodies from the movie API.
///
/// Implementations own networking, authentication and timeouts. They
/// return the body text untouched; decoding happens in
/// [`MovieCatalog`](super::MovieCatalog).
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// Body of the movie detail endpoint for `id`
    async fn movie_detail(
        &self,
        id: i64,
        options: &RequestOptions,
    ) -> Result<String, SourceError>;

    /// Body of one page of a movie list
    async fn movie_list(
        &self,
        kind: ListKind,
        page: u32,
        options: &RequestOptions,
    ) -> Result<String, SourceError>;

    /// Body of one page of movie search results
    async fn search_movies(
        &self,
        query: &str,
        page: u32,
        options: &RequestOptions,
    ) -> Result<String, SourceError>;
}
