//! Download page fetching and parsing.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex_lite::Regex;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::debug;

use crate::config::ScraperConfig;
use crate::streams::{BehaviorHints, Stream, StreamCandidate};

use super::types::{PageDetails, ScrapeError};

/// Display label prefixed to every stream name.
const STREAM_LABEL: &str = "MoviesDA⚡️";
/// Language tag suffixed to every stream name.
const LANGUAGE_TAG: &str = "[Tamil]";

/// Numeric id at the end of a `.../download/file/<id>` reference.
static FILE_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"/file/(\d+)$").unwrap());

/// Human file size, e.g. "1.4 GB".
static FILE_SIZE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([\d.]+)\s*(GB|MB|KB)").unwrap());

/// Scrapes one download page reference into stream candidates.
#[async_trait]
pub trait PageScraper: Send + Sync {
    async fn scrape(&self, link: &str) -> Result<Vec<StreamCandidate>, ScrapeError>;
}

/// `PageScraper` fetching real download pages over HTTP.
pub struct HttpPageScraper {
    client: Client,
    page_base: String,
}

impl HttpPageScraper {
    pub fn new(config: &ScraperConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            page_base: config.page_base.trim_end_matches('/').to_string(),
        }
    }

    /// Rewrite a `.../download/file/<id>` catalog reference to the
    /// canonical download page URL. References that don't match the
    /// pattern are fetched unchanged.
    fn rewrite_link(&self, link: &str) -> String {
        match FILE_ID.captures(link).and_then(|caps| caps.get(1)) {
            Some(id) => format!("{}/{}", self.page_base, id.as_str()),
            None => link.to_string(),
        }
    }
}

#[async_trait]
impl PageScraper for HttpPageScraper {
    async fn scrape(&self, link: &str) -> Result<Vec<StreamCandidate>, ScrapeError> {
        let url = self.rewrite_link(link);
        debug!(url = %url, "Fetching download page");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                ScrapeError::Timeout
            } else if e.is_connect() {
                ScrapeError::ConnectionFailed(e.to_string())
            } else {
                ScrapeError::Request(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            return Err(ScrapeError::Status(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScrapeError::Request(e.to_string()))?;

        Ok(candidates_from_page(&body))
    }
}

/// Parse a download page body into stream candidates.
///
/// Parsing is fully synchronous so the `Html` document (not `Send`)
/// never lives across an await point.
pub fn candidates_from_page(html: &str) -> Vec<StreamCandidate> {
    let document = Html::parse_document(html);
    let details = parse_details(&document);

    direct_links(&document)
        .into_iter()
        .map(|url| candidate(url, &details))
        .collect()
}

/// Extract the labeled details rows.
///
/// The row order is a fixed contract with the site: file name, file
/// size, video size, format, duration, added-on date. Each row's bold
/// label is stripped from its text. The selectors are an external
/// contract that can break silently - a missing block just leaves the
/// fields empty.
fn parse_details(document: &Html) -> PageDetails {
    let row_sel = Selector::parse(".details").expect("valid selector");
    let label_sel = Selector::parse("strong").expect("valid selector");

    let mut details = PageDetails::default();

    for (index, row) in document.select(&row_sel).enumerate() {
        let Some(label) = row.select(&label_sel).next() else {
            continue;
        };
        let label_text = label.text().collect::<String>();
        let row_text = row.text().collect::<String>();
        let value = row_text.replacen(&label_text, "", 1).trim().to_string();

        match index {
            0 => details.file_name = value,
            1 => details.file_size = value,
            2 => details.video_size = value,
            3 => details.format = value,
            4 => details.duration = value,
            5 => details.added_on = value,
            _ => break,
        }
    }

    details
}

/// Hrefs of the download block's anchors, in page order.
fn direct_links(document: &Html) -> Vec<String> {
    let anchor_sel = Selector::parse(".download .dlink a").expect("valid selector");

    document
        .select(&anchor_sel)
        .filter_map(|anchor| anchor.value().attr("href"))
        .map(str::to_string)
        .collect()
}

/// Build one stream candidate from a direct link and the page details.
fn candidate(url: String, details: &PageDetails) -> StreamCandidate {
    let size_mb = size_to_mb(&details.file_size);

    let stream = Stream {
        url,
        name: format!("{}\n\n{}\n\n{}", STREAM_LABEL, details.video_size, LANGUAGE_TAG),
        title: details.file_name.clone(),
        description: Some(format!(
            "{}\n\n📦 File Size: {}\n📺 Video Size: {}\n🎞️ Format: {}\n⏱️ Duration: {}\n📅 Added On: {}",
            details.file_name,
            details.file_size,
            details.video_size,
            details.format,
            details.duration,
            details.added_on,
        )),
        behavior_hints: Some(BehaviorHints {
            filename: Some(details.file_name.clone()),
        }),
    };

    StreamCandidate { stream, size_mb }
}

/// Normalize a human file size to an MB-equivalent ranking key.
/// Strings that don't look like a size normalize to 0.
pub fn size_to_mb(size: &str) -> f64 {
    let Some(caps) = FILE_SIZE.captures(size) else {
        return 0.0;
    };
    let value: f64 = match caps[1].parse() {
        Ok(value) => value,
        Err(_) => return 0.0,
    };

    match caps[2].to_ascii_uppercase().as_str() {
        "GB" => value * 1024.0,
        "KB" => value / 1024.0,
        _ => value,
    }
}
