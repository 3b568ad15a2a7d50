//! Types for download page scraping.

use thiserror::Error;

/// Labeled fields scraped from a download page's details block.
///
/// Fields the page omits stay empty; a partially filled block is
/// normal, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageDetails {
    pub file_name: String,
    /// Human readable size, e.g. "1.4 GB".
    pub file_size: String,
    /// Resolution label, e.g. "1080p".
    pub video_size: String,
    pub format: String,
    pub duration: String,
    pub added_on: String,
}

/// Errors scraping a single download page.
///
/// The aggregator treats any of these as "this page yielded nothing"
/// and carries on with the record's other pages.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("request timed out")]
    Timeout,

    #[error("HTTP {0}")]
    Status(u16),
}
