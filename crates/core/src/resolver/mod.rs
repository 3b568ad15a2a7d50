//! IMDb title resolution for the legacy fuzzy lookup path.
//!
//! When a catalog record has no IMDb id, the only way back from an
//! incoming id is through the title: fetch the public IMDb page,
//! take its first heading, and fuzzy-match that against the catalog.

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::ResolverConfig;

/// Source of canonical titles for external ids.
#[async_trait]
pub trait TitleSource: Send + Sync {
    /// Display title for an IMDb id. `None` on any fetch or parse
    /// failure - the legacy path degrades, it never errors.
    async fn title_for(&self, imdb_id: &str) -> Option<String>;
}

/// Title source scraping the public IMDb title page.
pub struct ImdbTitleSource {
    client: Client,
    base_url: String,
}

impl ImdbTitleSource {
    pub fn new(config: &ResolverConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.imdb_base.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl TitleSource for ImdbTitleSource {
    async fn title_for(&self, imdb_id: &str) -> Option<String> {
        let url = format!("{}/title/{}/", self.base_url, imdb_id);
        debug!(url = %url, "Fetching IMDb title page");

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(imdb_id = %imdb_id, error = %e, "IMDb fetch failed");
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(
                imdb_id = %imdb_id,
                status = response.status().as_u16(),
                "IMDb returned non-success status"
            );
            return None;
        }

        let body = response.text().await.ok()?;
        let title = extract_title(&body);
        if title.is_none() {
            warn!(imdb_id = %imdb_id, "No title heading found on IMDb page");
        }
        title
    }
}

/// First `<h1>` text of the page; the rest of the markup is ignored.
fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let heading = Selector::parse("h1").ok()?;

    document
        .select(&heading)
        .next()
        .map(|h1| h1.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
}
