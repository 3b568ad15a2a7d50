//! Stream types in the shape the Stremio client expects.

use serde::{Deserialize, Serialize};

/// Player hints attached to a stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BehaviorHints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// One playable stream.
///
/// This is the externally visible shape; it deliberately carries no
/// size or ranking metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    /// Direct media URL.
    pub url: String,
    /// Display name shown in the stream list.
    pub name: String,
    /// Scraped file name.
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "behaviorHints", skip_serializing_if = "Option::is_none")]
    pub behavior_hints: Option<BehaviorHints>,
}

/// A stream plus its transient ranking key.
///
/// The key exists only between scraping and the aggregator's final
/// sort; callers of the aggregator only ever see the inner [`Stream`].
#[derive(Debug, Clone)]
pub struct StreamCandidate {
    pub stream: Stream,
    /// MB-equivalent of the scraped file size, 0 when unknown.
    pub size_mb: f64,
}
