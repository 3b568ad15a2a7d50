//! Meta handler: movie metadata for the Stremio detail view.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use moviesda_core::MovieRecord;

use crate::state::AppState;

const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/300x450?text=No+Poster";

#[derive(Debug, Serialize)]
pub struct MetaResponse {
    pub meta: Option<Meta>,
}

/// Stremio meta object. Unset optional fields are omitted rather than
/// serialized as null.
#[derive(Debug, Serialize)]
pub struct Meta {
    pub id: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub name: String,
    pub poster: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "releaseInfo", skip_serializing_if = "Option::is_none")]
    pub release_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(rename = "imdbRating", skip_serializing_if = "Option::is_none")]
    pub imdb_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast: Option<Vec<String>>,
    #[serde(rename = "behaviorHints")]
    pub behavior_hints: MetaBehaviorHints,
}

#[derive(Debug, Serialize)]
pub struct MetaBehaviorHints {
    /// Always serialized, always null - the client expects the key.
    #[serde(rename = "defaultVideoId")]
    pub default_video_id: Option<String>,
}

impl Meta {
    fn from_record(record: &MovieRecord, id: &str, media_type: &str) -> Self {
        Self {
            id: id.to_string(),
            media_type: media_type.to_string(),
            name: if record.title.is_empty() {
                "Unknown Title".to_string()
            } else {
                record.title.clone()
            },
            poster: https_poster(record.poster.as_deref()),
            description: record.description.clone(),
            release_info: record.release_info.clone(),
            year: record.year.clone(),
            imdb_rating: record.imdb_rating.clone(),
            genre: record.genre.clone(),
            director: record.director.clone(),
            cast: record.cast.clone(),
            behavior_hints: MetaBehaviorHints {
                default_video_id: None,
            },
        }
    }
}

/// Posters must be https for the clients; upgrade plain-http snapshot
/// URLs and fall back to a placeholder when the row has none.
fn https_poster(poster: Option<&str>) -> String {
    match poster {
        Some(url) if url.starts_with("http:") => url.replacen("http:", "https:", 1),
        Some(url) => url.to_string(),
        None => PLACEHOLDER_POSTER.to_string(),
    }
}

/// `GET /meta/{type}/{id}`
pub async fn meta(
    State(state): State<Arc<AppState>>,
    Path((media_type, id)): Path<(String, String)>,
) -> (StatusCode, Json<MetaResponse>) {
    let imdb_id = id.strip_suffix(".json").unwrap_or(id.as_str());
    info!(media_type = %media_type, id = %imdb_id, "Meta request");

    match state.resolve_record(imdb_id).await {
        Some(record) => {
            debug!(title = %record.title, "Returning meta");
            (
                StatusCode::OK,
                Json(MetaResponse {
                    meta: Some(Meta::from_record(record, imdb_id, &media_type)),
                }),
            )
        }
        None => (StatusCode::NOT_FOUND, Json(MetaResponse { meta: None })),
    }
}
