//! Mock page scraper.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::scrape::{PageScraper, ScrapeError};
use crate::streams::StreamCandidate;

/// `PageScraper` with canned per-link results.
///
/// Links are keyed by the raw catalog reference (the mock does no URL
/// rewriting). Unconfigured links scrape to an empty page; links marked
/// failing return a request error.
#[derive(Default)]
pub struct MockPageScraper {
    candidates: Mutex<HashMap<String, Vec<StreamCandidate>>>,
    failing: Mutex<HashSet<String>>,
}

impl MockPageScraper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the candidates returned for `link`.
    pub fn set_candidates(&self, link: &str, candidates: Vec<StreamCandidate>) {
        self.candidates
            .lock()
            .unwrap()
            .insert(link.to_string(), candidates);
    }

    /// Make scraping `link` fail.
    pub fn set_failing(&self, link: &str) {
        self.failing.lock().unwrap().insert(link.to_string());
    }
}

#[async_trait]
impl PageScraper for MockPageScraper {
    async fn scrape(&self, link: &str) -> Result<Vec<StreamCandidate>, ScrapeError> {
        if self.failing.lock().unwrap().contains(link) {
            return Err(ScrapeError::Request("mock scrape failure".to_string()));
        }

        Ok(self
            .candidates
            .lock()
            .unwrap()
            .get(link)
            .cloned()
            .unwrap_or_default())
    }
}
