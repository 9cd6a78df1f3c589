use serde::Serialize;

/// Genre attached to a movie detail
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Company credited with producing a movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductionCompany {
    pub id: i64,
    pub name: String,
    /// ISO 3166-1 code, empty when the API does not know it
    pub origin_country: String,
    pub logo_path: Option<String>,
}

/// Country a movie was produced in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductionCountry {
    /// ISO 3166-1 alpha-2 code
    #[serde(rename = "iso_3166_1")]
    pub iso_code: String,
    pub name: String,
}

/// Language spoken in a movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpokenLanguage {
    /// ISO 639-1 code
    #[serde(rename = "iso_639_1")]
    pub iso_code: String,
    pub name: String,
}
