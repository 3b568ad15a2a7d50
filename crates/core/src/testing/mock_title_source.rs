//! Mock IMDb title source.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::resolver::TitleSource;

/// `TitleSource` with canned titles per IMDb id.
///
/// Ids without a canned title resolve to `None`, matching a real
/// fetch failure.
#[derive(Default)]
pub struct MockTitleSource {
    titles: Mutex<HashMap<String, String>>,
}

impl MockTitleSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title returned for `imdb_id`.
    pub fn set_title(&self, imdb_id: &str, title: &str) {
        self.titles
            .lock()
            .unwrap()
            .insert(imdb_id.to_string(), title.to_string());
    }
}

#[async_trait]
impl TitleSource for MockTitleSource {
    async fn title_for(&self, imdb_id: &str) -> Option<String> {
        self.titles.lock().unwrap().get(imdb_id).cloned()
    }
}
