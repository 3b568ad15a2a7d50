//! Stream aggregation across a record's download pages.
//!
//! Fans the page scraper out over every download link of a record,
//! joins the results, ranks them by file size and strips the ranking
//! key before handing the list to the caller.

mod types;

pub use types::*;

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog::MovieRecord;
use crate::scrape::PageScraper;

/// Aggregates scraped streams for one catalog record.
pub struct StreamAggregator {
    scraper: Arc<dyn PageScraper>,
}

impl StreamAggregator {
    pub fn new(scraper: Arc<dyn PageScraper>) -> Self {
        Self { scraper }
    }

    /// Scrape every download page of `record` and return the combined
    /// streams, largest file first.
    ///
    /// Pages are scraped concurrently. A failing page contributes zero
    /// streams and never aborts the others; the failure is logged and
    /// swallowed here.
    pub async fn aggregate(&self, record: &MovieRecord) -> Vec<Stream> {
        if record.download_links.is_empty() {
            return Vec::new();
        }

        let scrapes = record.download_links.iter().map(|link| async move {
            (link.as_str(), self.scraper.scrape(link).await)
        });

        let results = futures::future::join_all(scrapes).await;

        let mut candidates: Vec<StreamCandidate> = Vec::new();
        for (link, result) in results {
            match result {
                Ok(mut found) => candidates.append(&mut found),
                Err(e) => {
                    warn!(link = %link, error = %e, "Download page scrape failed");
                }
            }
        }

        // Stable sort: equal sizes keep their page order.
        candidates.sort_by(|a, b| {
            b.size_mb.partial_cmp(&a.size_mb).unwrap_or(Ordering::Equal)
        });

        debug!(
            title = %record.title,
            links = record.download_links.len(),
            streams = candidates.len(),
            "Aggregation complete"
        );

        candidates.into_iter().map(|candidate| candidate.stream).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fixtures, MockPageScraper};

    fn record_with_links(links: &[&str]) -> MovieRecord {
        MovieRecord {
            title: "Anniyan".to_string(),
            imdb_id: Some("tt0468451".to_string()),
            download_links: links.iter().map(|l| l.to_string()).collect(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_aggregate_no_links() {
        let aggregator = StreamAggregator::new(Arc::new(MockPageScraper::new()));
        let streams = aggregator.aggregate(&record_with_links(&[])).await;
        assert!(streams.is_empty());
    }

    #[tokio::test]
    async fn test_aggregate_unknown_link_yields_nothing() {
        let aggregator = StreamAggregator::new(Arc::new(MockPageScraper::new()));
        let streams = aggregator
            .aggregate(&record_with_links(&["https://site/download/file/1"]))
            .await;
        assert!(streams.is_empty());
    }

    #[tokio::test]
    async fn test_aggregate_sorts_by_size_descending() {
        let scraper = MockPageScraper::new();
        scraper.set_candidates(
            "link-a",
            vec![fixtures::candidate("https://cdn/small.mkv", 700.0)],
        );
        scraper.set_candidates(
            "link-b",
            vec![fixtures::candidate("https://cdn/big.mkv", 1433.6)],
        );

        let aggregator = StreamAggregator::new(Arc::new(scraper));
        let streams = aggregator.aggregate(&record_with_links(&["link-a", "link-b"])).await;

        assert_eq!(streams.len(), 2);
        assert_eq!(streams[0].url, "https://cdn/big.mkv");
        assert_eq!(streams[1].url, "https://cdn/small.mkv");
    }

    #[tokio::test]
    async fn test_aggregate_equal_sizes_keep_link_order() {
        let scraper = MockPageScraper::new();
        scraper.set_candidates("link-a", vec![fixtures::candidate("https://cdn/a.mkv", 700.0)]);
        scraper.set_candidates("link-b", vec![fixtures::candidate("https://cdn/b.mkv", 700.0)]);

        let aggregator = StreamAggregator::new(Arc::new(scraper));
        let streams = aggregator.aggregate(&record_with_links(&["link-a", "link-b"])).await;

        assert_eq!(streams[0].url, "https://cdn/a.mkv");
        assert_eq!(streams[1].url, "https://cdn/b.mkv");
    }

    #[tokio::test]
    async fn test_aggregate_isolates_failing_link() {
        let scraper = MockPageScraper::new();
        scraper.set_candidates("link-a", vec![fixtures::candidate("https://cdn/a.mkv", 700.0)]);
        scraper.set_failing("link-b");
        scraper.set_candidates("link-c", vec![fixtures::candidate("https://cdn/c.mkv", 500.0)]);

        let aggregator = StreamAggregator::new(Arc::new(scraper));
        let streams = aggregator
            .aggregate(&record_with_links(&["link-a", "link-b", "link-c"]))
            .await;

        let urls: Vec<_> = streams.iter().map(|s| s.url.as_str()).collect();
        assert_eq!(urls, vec!["https://cdn/a.mkv", "https://cdn/c.mkv"]);
    }

    #[tokio::test]
    async fn test_aggregate_strips_ranking_key() {
        let scraper = MockPageScraper::new();
        scraper.set_candidates("link-a", vec![fixtures::candidate("https://cdn/a.mkv", 700.0)]);

        let aggregator = StreamAggregator::new(Arc::new(scraper));
        let streams = aggregator.aggregate(&record_with_links(&["link-a"])).await;

        // The outward shape carries no size field at all.
        let json = serde_json::to_value(&streams[0]).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert!(!keys.iter().any(|k| k.to_lowercase().contains("size")));
    }
}
