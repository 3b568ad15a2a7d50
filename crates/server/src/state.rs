use std::sync::Arc;

use tracing::debug;

use moviesda_core::{
    Config, JsonCatalog, MovieRecord, PageScraper, StreamAggregator, TitleSource,
};

/// Shared application state
pub struct AppState {
    config: Config,
    catalog: Arc<JsonCatalog>,
    title_source: Arc<dyn TitleSource>,
    aggregator: StreamAggregator,
}

impl AppState {
    pub fn new(
        config: Config,
        catalog: Arc<JsonCatalog>,
        title_source: Arc<dyn TitleSource>,
        scraper: Arc<dyn PageScraper>,
    ) -> Self {
        Self {
            config,
            catalog,
            title_source,
            aggregator: StreamAggregator::new(scraper),
        }
    }

    pub fn aggregator(&self) -> &StreamAggregator {
        &self.aggregator
    }

    /// Resolve an incoming id to a catalog record.
    ///
    /// Exact `imdb_id` match is the primary path. When that misses and
    /// the legacy fallback is enabled, the IMDb title is fetched and
    /// fuzzy-matched against catalog titles. A miss is `None`, never
    /// an error.
    pub async fn resolve_record(&self, imdb_id: &str) -> Option<&MovieRecord> {
        if let Some(record) = self.catalog.find_by_id(imdb_id) {
            return Some(record);
        }

        if !self.config.resolver.fuzzy_fallback {
            return None;
        }

        let title = self.title_source.title_for(imdb_id).await?;
        debug!(imdb_id = %imdb_id, title = %title, "Falling back to fuzzy title lookup");
        self.catalog.find_by_fuzzy_title(&title)
    }
}
