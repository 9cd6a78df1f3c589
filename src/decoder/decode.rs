use super::reader::{ObjectReader, as_i64, as_str};
use super::types::{
    Genre, MovieDetail, MovieStatus, MovieSummary, PagedResult, ProductionCompany,
    ProductionCountry, SpokenLanguage,
};
use super::{DecodeError, Result};
use serde_json::Value;

/// Record that can be built from one JSON value
pub trait Decode: Sized {
    fn decode(value: &Value) -> Result<Self>;
}

/// Parse raw response text into a JSON value
pub fn parse_document(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|e| DecodeError::MalformedDocument(e.to_string()))
}

pub fn decode_genre(value: &Value) -> Result<Genre> {
    let obj = ObjectReader::new(value, "genre")?;
    Ok(Genre {
        id: obj.required_i64("id")?,
        name: obj.required_str("name")?,
    })
}

pub fn decode_production_company(value: &Value) -> Result<ProductionCompany> {
    let obj = ObjectReader::new(value, "production company")?;
    Ok(ProductionCompany {
        id: obj.required_i64("id")?,
        name: obj.required_str("name")?,
        origin_country: obj.required_str("origin_country")?,
        logo_path: obj.optional_str("logo_path")?,
    })
}

pub fn decode_production_country(value: &Value) -> Result<ProductionCountry> {
    let obj = ObjectReader::new(value, "production country")?;
    Ok(ProductionCountry {
        iso_code: obj.required_str("iso_3166_1")?,
        name: obj.required_str("name")?,
    })
}

pub fn decode_spoken_language(value: &Value) -> Result<SpokenLanguage> {
    let obj = ObjectReader::new(value, "spoken language")?;
    Ok(SpokenLanguage {
        iso_code: obj.required_str("iso_639_1")?,
        name: obj.required_str("name")?,
    })
}

/// Decode a movie detail document.
///
/// `id` and `title` are checked first so a document that is not a movie
/// at all reports the missing identity rather than some later field.
pub fn decode_movie_detail(value: &Value) -> Result<MovieDetail> {
    let obj = ObjectReader::new(value, "movie detail")?;
    let id = obj.required_i64("id")?;
    let title = obj.required_str("title")?;

    Ok(MovieDetail {
        adult: obj.required_bool("adult")?,
        backdrop_path: obj.required_str("backdrop_path")?,
        belongs_to_collection: obj.opaque("belongs_to_collection")?,
        budget: obj.required_u64("budget")?,
        genres: obj.sequence("genres", decode_genre)?,
        homepage: obj.required_str("homepage")?,
        id,
        imdb_id: obj.required_str("imdb_id")?,
        original_language: obj.required_str("original_language")?,
        original_title: obj.required_str("original_title")?,
        overview: obj.required_str("overview")?,
        popularity: obj.required_f64("popularity")?,
        poster_path: obj.optional_str("poster_path")?,
        production_companies: obj.sequence("production_companies", decode_production_company)?,
        production_countries: obj.sequence("production_countries", decode_production_country)?,
        release_date: obj.required_str("release_date")?,
        revenue: obj.required_u64("revenue")?,
        runtime: obj.optional_u32("runtime")?,
        spoken_languages: obj.sequence("spoken_languages", decode_spoken_language)?,
        status: as_str("status", obj.required_value("status")?).map(MovieStatus::from_wire)?,
        tagline: obj.required_str("tagline")?,
        title,
        video: obj.required_bool("video")?,
        vote_average: obj.required_f64("vote_average")?,
        vote_count: obj.required_u64("vote_count")?,
    })
}

/// Decode one entry of a list or search response
pub fn decode_movie_summary(value: &Value) -> Result<MovieSummary> {
    let obj = ObjectReader::new(value, "movie summary")?;
    Ok(MovieSummary {
        id: obj.required_i64("id")?,
        title: obj.required_str("title")?,
        original_title: obj.optional_str("original_title")?,
        original_language: obj.optional_str("original_language")?,
        overview: obj.optional_str("overview")?,
        release_date: obj.optional_str("release_date")?,
        poster_path: obj.optional_str("poster_path")?,
        backdrop_path: obj.optional_str("backdrop_path")?,
        popularity: obj.optional_f64("popularity")?,
        vote_average: obj.optional_f64("vote_average")?,
        vote_count: obj.optional_u64("vote_count")?,
        adult: obj.optional_bool("adult")?,
        video: obj.optional_bool("video")?,
        genre_ids: obj.sequence("genre_ids", |v| as_i64("genre_ids", v))?,
    })
}

/// Decode a paged envelope, passing each `results` element to `element`.
///
/// The first element that fails aborts the whole call; no partial page
/// is returned.
pub fn decode_paged_result<T, F>(value: &Value, element: F) -> Result<PagedResult<T>>
where
    F: Fn(&Value) -> Result<T>,
{
    let obj = ObjectReader::new(value, "paged result")?;
    Ok(PagedResult {
        page: obj.required_u32("page")?,
        results: obj.required_sequence("results", element)?,
        total_pages: obj.required_u32("total_pages")?,
        total_results: obj.required_u64("total_results")?,
    })
}

/// [`decode_paged_result`] with the element type's own decoder
pub fn decode_paged<T: Decode>(value: &Value) -> Result<PagedResult<T>> {
    decode_paged_result(value, T::decode)
}

/// Parse and decode a movie detail response body
pub fn decode_movie_detail_str(text: &str) -> Result<MovieDetail> {
    decode_movie_detail(&parse_document(text)?)
}

/// Parse and decode a movie list response body
pub fn decode_movie_list_str(text: &str) -> Result<PagedResult<MovieSummary>> {
    decode_paged(&parse_document(text)?)
}

/// Parse and decode a search response body.
///
/// Search and list endpoints share the envelope and element schema.
pub fn decode_search_str(text: &str) -> Result<PagedResult<MovieSummary>> {
    decode_paged(&parse_document(text)?)
}

impl Decode for Genre {
    fn decode(value: &Value) -> Result<Self> {
        decode_genre(value)
    }
}

impl Decode for ProductionCompany {
    fn decode(value: &Value) -> Result<Self> {
        decode_production_company(value)
    }
}

impl Decode for ProductionCountry {
    fn decode(value: &Value) -> Result<Self> {
        decode_production_country(value)
    }
}

impl Decode for SpokenLanguage {
    fn decode(value: &Value) -> Result<Self> {
        decode_spoken_language(value)
    }
}

impl Decode for MovieSummary {
    fn decode(value: &Value) -> Result<Self> {
        decode_movie_summary(value)
    }
}

impl Decode for MovieDetail {
    fn decode(value: &Value) -> Result<Self> {
        decode_movie_detail(value)
    }
}
