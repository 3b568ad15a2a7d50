//! Stream handler: the add-on's main endpoint.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use moviesda_core::Stream;

use crate::metrics::STREAMS_RETURNED_TOTAL;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StreamsResponse {
    pub streams: Vec<Stream>,
}

impl StreamsResponse {
    fn empty() -> Self {
        Self {
            streams: Vec::new(),
        }
    }
}

/// `GET /stream/{type}/{id}`
///
/// "No streams found" is a normal outcome for Stremio, so every path
/// through here answers 200 with a well-formed stream list - misses,
/// empty link lists and contained scrape failures all serialize to
/// `{"streams": []}`.
pub async fn stream(
    State(state): State<Arc<AppState>>,
    Path((media_type, id)): Path<(String, String)>,
) -> Json<StreamsResponse> {
    let imdb_id = id.strip_suffix(".json").unwrap_or(id.as_str());
    info!(media_type = %media_type, id = %imdb_id, "Stream request");

    let Some(record) = state.resolve_record(imdb_id).await else {
        debug!(id = %imdb_id, "No catalog match, returning 0 streams");
        return Json(StreamsResponse::empty());
    };

    if record.download_links.is_empty() {
        debug!(title = %record.title, "Record has no download links");
        return Json(StreamsResponse::empty());
    }

    let streams = state.aggregator().aggregate(record).await;

    STREAMS_RETURNED_TOTAL.inc_by(streams.len() as u64);
    info!(count = streams.len(), "Returning streams");

    Json(StreamsResponse { streams })
}
