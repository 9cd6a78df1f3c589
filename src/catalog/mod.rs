mod config;
mod service;
mod source;

#[cfg(test)]
mod tests;

pub use config::{CatalogConfig, ConfigError};
pub use service::MovieCatalog;
pub use source::{ListKind, MovieSource, RequestOptions, SourceError};

use crate::decoder::DecodeError;

/// Catalog result type
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Catalog error types
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
