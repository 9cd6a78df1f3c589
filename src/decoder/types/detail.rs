use super::nested::{Genre, ProductionCompany, ProductionCountry, SpokenLanguage};
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Full record for a single movie
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetail {
    pub adult: bool,
    pub backdrop_path: String,
    /// Collection the movie belongs to, kept undecoded
    pub belongs_to_collection: OpaqueValue,
    pub budget: u64,
    pub genres: Vec<Genre>,
    pub homepage: String,
    pub id: i64,
    pub imdb_id: String,
    pub original_language: String,
    pub original_title: String,
    pub overview: String,
    pub popularity: f64,
    pub poster_path: Option<String>,
    pub production_companies: Vec<ProductionCompany>,
    pub production_countries: Vec<ProductionCountry>,
    /// Release date (YYYY-MM-DD), may be empty for unreleased titles
    pub release_date: String,
    pub revenue: u64,
    /// Runtime in minutes
    pub runtime: Option<u32>,
    pub spoken_languages: Vec<SpokenLanguage>,
    pub status: MovieStatus,
    pub tagline: String,
    pub title: String,
    pub video: bool,
    /// Rating (0-10 scale)
    pub vote_average: f64,
    pub vote_count: u64,
}

impl MovieDetail {
    /// `release_date` as a calendar date, `None` when empty or not YYYY-MM-DD
    #[must_use]
    pub fn release_day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.release_date, "%Y-%m-%d").ok()
    }

    /// Runtime in minutes, treating the API's `0` as unknown
    #[must_use]
    pub fn known_runtime(&self) -> Option<u32> {
        self.runtime.filter(|&minutes| minutes > 0)
    }

    /// Genre names in API order
    pub fn genre_names(&self) -> impl Iterator<Item = &str> {
        self.genres.iter().map(|g| g.name.as_str())
    }
}

/// Release status of a movie
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovieStatus {
    Rumored,
    Planned,
    InProduction,
    PostProduction,
    Released,
    Canceled,
    /// Status string this crate does not know yet, kept verbatim
    Other(String),
}

impl MovieStatus {
    /// Map a wire status string, keeping unknown values as `Other`
    #[must_use]
    pub fn from_wire(status: &str) -> Self {
        match status {
            "Rumored" => Self::Rumored,
            "Planned" => Self::Planned,
            "In Production" => Self::InProduction,
            "Post Production" => Self::PostProduction,
            "Released" => Self::Released,
            "Canceled" => Self::Canceled,
            other => Self::Other(other.to_string()),
        }
    }

    /// Wire representation
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Rumored => "Rumored",
            Self::Planned => "Planned",
            Self::InProduction => "In Production",
            Self::PostProduction => "Post Production",
            Self::Released => "Released",
            Self::Canceled => "Canceled",
            Self::Other(s) => s,
        }
    }
}

impl std::fmt::Display for MovieStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MovieStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// JSON value deliberately left undecoded: either `null` or an object
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum OpaqueValue {
    #[default]
    Null,
    Object(Map<String, Value>),
}

impl OpaqueValue {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_object(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Object(map) => Some(map),
            Self::Null => None,
        }
    }
}
