use serde::Serialize;

/// One entry of a movie list or search response.
///
/// Only `id` and `title` are guaranteed; list endpoints omit or null
/// the rest often enough that every other scalar is optional.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieSummary {
    pub id: i64,
    pub title: String,
    pub original_title: Option<String>,
    pub original_language: Option<String>,
    pub overview: Option<String>,
    /// Release date (YYYY-MM-DD)
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub popularity: Option<f64>,
    /// Rating (0-10 scale)
    pub vote_average: Option<f64>,
    pub vote_count: Option<u64>,
    pub adult: Option<bool>,
    pub video: Option<bool>,
    /// Genre ids, resolved against the genre list by the caller
    pub genre_ids: Vec<i64>,
}

impl MovieSummary {
    /// Release year taken from `release_date`
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        self.release_date
            .as_ref()
            .and_then(|d| d.split('-').next())
            .and_then(|y| y.parse().ok())
    }
}
