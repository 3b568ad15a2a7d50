//! Common test utilities for end-to-end testing with mocks.
//!
//! Builds the full router in-process with an in-memory catalog and
//! mock implementations of the page scraper and IMDb title source.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use moviesda_core::{
    testing::{MockPageScraper, MockTitleSource},
    Config, JsonCatalog, MovieRecord, PageScraper, TitleSource,
};
use moviesda_server::api::create_router;
use moviesda_server::state::AppState;

/// Re-export fixtures for test convenience
pub use moviesda_core::testing::fixtures;

/// Test fixture for end-to-end testing with mock collaborators.
pub struct TestFixture {
    /// The axum router for testing
    pub router: Router,
    /// Mock page scraper - configure per-link scrape results
    pub scraper: Arc<MockPageScraper>,
    /// Mock IMDb title source - configure titles for the legacy path
    pub title_source: Arc<MockTitleSource>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a fixture over the given catalog records with default config.
    pub fn new(records: Vec<MovieRecord>) -> Self {
        Self::with_config(records, Config::default())
    }

    /// Create a fixture with custom configuration.
    pub fn with_config(records: Vec<MovieRecord>, config: Config) -> Self {
        let scraper = Arc::new(MockPageScraper::new());
        let title_source = Arc::new(MockTitleSource::new());
        let catalog = Arc::new(JsonCatalog::from_records(records));

        let state = Arc::new(AppState::new(
            config,
            catalog,
            Arc::clone(&title_source) as Arc<dyn TitleSource>,
            Arc::clone(&scraper) as Arc<dyn PageScraper>,
        ));

        Self {
            router: create_router(state),
            scraper,
            title_source,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}
