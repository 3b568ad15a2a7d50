//! Testing utilities and mock implementations.
//!
//! Mocks for the two external-service traits, so server tests can run
//! the whole request path in-process without the mirror site or IMDb.

mod mock_page_scraper;
mod mock_title_source;

pub use mock_page_scraper::MockPageScraper;
pub use mock_title_source::MockTitleSource;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::MovieRecord;
    use crate::streams::{BehaviorHints, Stream, StreamCandidate};

    /// Create a test movie record.
    pub fn movie_record(title: &str, imdb_id: Option<&str>, links: &[&str]) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            imdb_id: imdb_id.map(String::from),
            download_links: links.iter().map(|l| l.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Create a test stream candidate with the given ranking key.
    pub fn candidate(url: &str, size_mb: f64) -> StreamCandidate {
        let file_name = url.rsplit('/').next().unwrap_or(url).to_string();
        StreamCandidate {
            stream: Stream {
                url: url.to_string(),
                name: "MoviesDA⚡️\n\n1080p\n\n[Tamil]".to_string(),
                title: file_name.clone(),
                description: Some(format!("{}\n\n📦 File Size: {} MB", file_name, size_mb)),
                behavior_hints: Some(BehaviorHints {
                    filename: Some(file_name),
                }),
            },
            size_mb,
        }
    }
}
