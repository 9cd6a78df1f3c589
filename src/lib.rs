//! Typed records and decoders for movie-information API responses.
//!
//! The [`decoder`] module turns raw JSON payloads (movie details, movie
//! lists, search results) into immutable records. The [`catalog`] module
//! sits one layer above it and pairs a [`catalog::MovieSource`] with the
//! decoder.

pub mod catalog;
pub mod decoder;

pub use catalog::{
    CatalogConfig, CatalogError, ConfigError, ListKind, MovieCatalog, MovieSource, RequestOptions,
    SourceError,
};
pub use decoder::{
    Decode, DecodeError, Genre, JsonKind, MovieDetail, MovieStatus, MovieSummary, OpaqueValue,
    PagedResult, ProductionCompany, ProductionCountry, SpokenLanguage,
};
