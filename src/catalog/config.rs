use super::source::RequestOptions;
use serde::{Deserialize, Serialize};

/// Catalog configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Default language for requests
    pub language: Option<String>,
    /// Default region for list requests
    pub region: Option<String>,
    /// Whether search results may include adult titles
    pub include_adult: bool,
}

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
#[error("Configuration error: {0}")]
pub struct ConfigError(#[from] toml::de::Error);

impl CatalogConfig {
    /// Create configuration with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set region
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Allow adult titles
    #[must_use]
    pub fn with_adult(mut self, include_adult: bool) -> Self {
        self.include_adult = include_adult;
        self
    }

    /// Options sent with every request
    #[must_use]
    pub fn request_options(&self) -> RequestOptions {
        RequestOptions {
            language: self.language.clone(),
            region: self.region.clone(),
            include_adult: self.include_adult,
        }
    }
}
