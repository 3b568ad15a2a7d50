//! Types for the movie catalog (static database snapshot).

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// One movie entry from the catalog snapshot.
///
/// Everything beyond `title` and `download_links` is optional; the
/// snapshot was assembled by a site crawler and older rows carry only
/// the bare minimum.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Display title as listed on the source site.
    #[serde(default)]
    pub title: String,
    /// IMDb id ("tt" + digits), when the snapshot has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,
    /// Download page references, in site order.
    #[serde(default)]
    pub download_links: Vec<String>,
    /// Poster URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// Older snapshot rows store a single string here, newer rows an array.
    #[serde(default, deserialize_with = "one_or_many", skip_serializing_if = "Option::is_none")]
    pub genre: Option<Vec<String>>,
    #[serde(default, deserialize_with = "one_or_many", skip_serializing_if = "Option::is_none")]
    pub cast: Option<Vec<String>>,
    #[serde(default, deserialize_with = "one_or_many", skip_serializing_if = "Option::is_none")]
    pub director: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "releaseInfo", skip_serializing_if = "Option::is_none")]
    pub release_info: Option<String>,
    #[serde(default, rename = "imdbRating", skip_serializing_if = "Option::is_none")]
    pub imdb_rating: Option<String>,
}

/// Accept either `"Drama"` or `["Drama", "Thriller"]`.
fn one_or_many<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(Option::<OneOrMany>::deserialize(deserializer)?.map(|v| match v {
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(items) => items,
    }))
}

/// Errors for catalog snapshot loading.
///
/// These never reach request handlers: a load failure is logged and
/// the catalog serves the empty collection instead.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}
