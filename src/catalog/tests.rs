//! Catalog tests

#[cfg(test)]
mod config_tests {
    use crate::catalog::{CatalogConfig, RequestOptions};

    #[test]
    fn test_config_default() {
        let config = CatalogConfig::default();

        assert!(config.language.is_none());
        assert!(config.region.is_none());
        assert!(!config.include_adult);
    }

    #[test]
    fn test_config_from_toml() {
        let config = CatalogConfig::from_toml_str(
            r#"
            language = "pt-BR"
            include_adult = true
            "#,
        )
        .unwrap();

        assert_eq!(config.language.as_deref(), Some("pt-BR"));
        assert!(config.region.is_none());
        assert!(config.include_adult);
    }

    #[test]
    fn test_config_invalid_toml() {
        assert!(CatalogConfig::from_toml_str("include_adult = \"yes\"").is_err());
    }

    #[test]
    fn test_request_options_from_builder() {
        let options = CatalogConfig::new()
            .with_language("en-US")
            .with_region("GB")
            .request_options();

        assert_eq!(
            options,
            RequestOptions {
                language: Some("en-US".to_string()),
                region: Some("GB".to_string()),
                include_adult: false,
            }
        );
        assert_eq!(
            options.query_params(),
            vec![
                ("language", "en-US".to_string()),
                ("region", "GB".to_string()),
                ("include_adult", "false".to_string()),
            ]
        );
    }
}

#[cfg(test)]
mod service_tests {
    use crate::catalog::{
        CatalogConfig, CatalogError, ListKind, MovieCatalog, MovieSource, RequestOptions,
        SourceError,
    };
    use crate::decoder::DecodeError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    const FIGHT_CLUB: &str = include_str!("../../fixtures/movie_detail.json");
    const POPULAR: &str = include_str!("../../fixtures/popular_page.json");
    const SEARCH: &str = include_str!("../../fixtures/search_page.json");

    /// Source returning fixed bodies and recording each request
    #[derive(Default)]
    struct StubSource {
        detail: Option<&'static str>,
        list: Option<&'static str>,
        search: Option<&'static str>,
        calls: Mutex<Vec<String>>,
    }

    impl StubSource {
        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn reply(body: Option<&'static str>) -> Result<String, SourceError> {
            body.map(ToString::to_string).ok_or(SourceError::Status {
                status: 404,
                message: "The resource you requested could not be found.".to_string(),
            })
        }
    }

    #[async_trait]
    impl MovieSource for StubSource {
        async fn movie_detail(
            &self,
            id: i64,
            options: &RequestOptions,
        ) -> Result<String, SourceError> {
            self.record(format!("detail {id} {:?}", options.language));
            Self::reply(self.detail)
        }

        async fn movie_list(
            &self,
            kind: ListKind,
            page: u32,
            _options: &RequestOptions,
        ) -> Result<String, SourceError> {
            self.record(format!("{} {page}", kind.path()));
            Self::reply(self.list)
        }

        async fn search_movies(
            &self,
            query: &str,
            page: u32,
            options: &RequestOptions,
        ) -> Result<String, SourceError> {
            self.record(format!("search '{query}' {page} adult={}", options.include_adult));
            Self::reply(self.search)
        }
    }

    #[tokio::test]
    async fn test_movie_detail() {
        let source = StubSource {
            detail: Some(FIGHT_CLUB),
            ..Default::default()
        };
        let config = CatalogConfig::new().with_language("en-US");
        let catalog = MovieCatalog::with_config(source, &config);

        let movie = catalog.movie(550).await.unwrap();

        assert_eq!(movie.title, "Fight Club");
        assert_eq!(catalog.source().calls(), ["detail 550 Some(\"en-US\")"]);
    }

    #[tokio::test]
    async fn test_list_page() {
        let source = StubSource {
            list: Some(POPULAR),
            ..Default::default()
        };
        let catalog = MovieCatalog::new(source);

        let page = catalog.list(ListKind::Popular, 1).await.unwrap();

        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].title, "Dune: Part Two");
        assert_eq!(catalog.source().calls(), ["/movie/popular 1"]);
    }

    #[tokio::test]
    async fn test_search_trims_query() {
        let source = StubSource {
            search: Some(SEARCH),
            ..Default::default()
        };
        let catalog = MovieCatalog::with_config(source, &CatalogConfig::new().with_adult(true));

        let page = catalog.search("  the matrix ", 2).await.unwrap();

        assert_eq!(page.results[0].id, 603);
        assert_eq!(catalog.source().calls(), ["search 'the matrix' 2 adult=true"]);
    }

    #[tokio::test]
    async fn test_blank_query_rejected_before_fetch() {
        let catalog = MovieCatalog::new(StubSource::default());

        let err = catalog.search("   ", 1).await.unwrap_err();

        assert!(matches!(err, CatalogError::InvalidRequest(_)));
        assert!(catalog.source().calls().is_empty());
    }

    #[tokio::test]
    async fn test_page_zero_rejected() {
        let catalog = MovieCatalog::new(StubSource::default());

        let err = catalog.list(ListKind::TopRated, 0).await.unwrap_err();

        assert!(matches!(err, CatalogError::InvalidRequest(_)));
        assert!(catalog.source().calls().is_empty());
    }

    #[tokio::test]
    async fn test_source_error_passes_through() {
        let catalog = MovieCatalog::new(StubSource::default());

        let err = catalog.movie(1).await.unwrap_err();

        assert!(matches!(
            err,
            CatalogError::Source(SourceError::Status { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_decode_error_passes_through() {
        let source = StubSource {
            detail: Some(r#"{"title": "No id"}"#),
            list: Some("<html>Bad Gateway</html>"),
            ..Default::default()
        };
        let catalog = MovieCatalog::new(source);

        let err = catalog.movie(7).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Decode(DecodeError::MissingField("id"))
        ));

        let err = catalog.list(ListKind::Upcoming, 1).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Decode(DecodeError::MalformedDocument(_))
        ));
    }

    #[test]
    fn test_list_kind_display() {
        assert_eq!(ListKind::NowPlaying.to_string(), "now_playing");
        assert_eq!(ListKind::TopRated.path(), "/movie/top_rated");
    }
}
