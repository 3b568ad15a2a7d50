//! JSON snapshot backed catalog.

use once_cell::sync::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::matcher::{self, MATCH_THRESHOLD};

use super::types::{CatalogError, MovieRecord};

/// Title placeholder used by the site crawler for rows it could not name.
const UNKNOWN_TITLE: &str = "Unknown";

/// Movie catalog loaded from a static JSON snapshot.
///
/// The snapshot is read and parsed at most once per process; concurrent
/// first lookups are safe because the loaded collection is immutable.
/// A missing or malformed snapshot degrades to an empty catalog rather
/// than an error.
pub struct JsonCatalog {
    path: PathBuf,
    records: OnceCell<Vec<MovieRecord>>,
}

impl JsonCatalog {
    /// Create a catalog over the snapshot at `path`. Nothing is read
    /// until the first lookup.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: OnceCell::new(),
        }
    }

    /// Create a pre-populated catalog, bypassing the snapshot file.
    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        let cell = OnceCell::new();
        let _ = cell.set(records);
        Self {
            path: PathBuf::new(),
            records: cell,
        }
    }

    /// All records, loading the snapshot on first access.
    pub fn records(&self) -> &[MovieRecord] {
        self.records.get_or_init(|| match load_snapshot(&self.path) {
            Ok(records) => {
                info!(
                    count = records.len(),
                    path = %self.path.display(),
                    "Catalog snapshot loaded"
                );
                records
            }
            Err(e) => {
                error!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to load catalog snapshot, serving empty catalog"
                );
                Vec::new()
            }
        })
    }

    /// Exact lookup by IMDb id.
    pub fn find_by_id(&self, imdb_id: &str) -> Option<&MovieRecord> {
        self.records()
            .iter()
            .find(|record| record.imdb_id.as_deref() == Some(imdb_id))
    }

    /// Fuzzy lookup by title, for records that carry no IMDb id.
    ///
    /// The best-scoring record wins only if it strictly exceeds both
    /// the match threshold and the running best; the first record seen
    /// keeps an exact tie. Placeholder titles are skipped.
    pub fn find_by_fuzzy_title(&self, title: &str) -> Option<&MovieRecord> {
        let mut best: Option<&MovieRecord> = None;
        let mut best_score = MATCH_THRESHOLD;

        for record in self.records() {
            if record.title.is_empty() || record.title == UNKNOWN_TITLE {
                continue;
            }

            let score = matcher::similarity(title, &record.title);
            if score > best_score {
                best_score = score;
                best = Some(record);
            }
        }

        match best {
            Some(record) => {
                debug!(
                    wanted = %title,
                    matched = %record.title,
                    score = best_score,
                    "Fuzzy title match"
                );
                Some(record)
            }
            None => {
                debug!(wanted = %title, "No fuzzy title match above threshold");
                None
            }
        }
    }
}

fn load_snapshot(path: &Path) -> Result<Vec<MovieRecord>, CatalogError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
