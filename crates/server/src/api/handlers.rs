use axum::Json;
use serde::Serialize;

use crate::metrics;

/// Add-on manifest constants. The id is the community-addon id the
/// original deployment registered under; changing it would orphan
/// installed clients.
const ADDON_ID: &str = "community.moviesda.tamil";
const ADDON_NAME: &str = "MoviesDA Tamil Movies";
const ADDON_DESCRIPTION: &str =
    "Stream Tamil movies from the MoviesDA database. Supports IMDb movie IDs.";
const ADDON_LOGO: &str = "https://i.imgur.com/44ueTES.png";
const ADDON_BACKGROUND: &str = "https://i.imgur.com/t8wVwcg.jpg";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn metrics() -> String {
    metrics::gather()
}

/// Stremio add-on manifest.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub id: &'static str,
    pub version: &'static str,
    #[serde(rename = "manifestVersion")]
    pub manifest_version: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub resources: Vec<&'static str>,
    pub types: Vec<&'static str>,
    pub catalogs: Vec<serde_json::Value>,
    #[serde(rename = "idPrefixes")]
    pub id_prefixes: Vec<&'static str>,
    #[serde(rename = "behaviorHints")]
    pub behavior_hints: ManifestBehaviorHints,
    pub logo: &'static str,
    pub background: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ManifestBehaviorHints {
    pub adult: bool,
    pub p2p: bool,
    pub configurable: bool,
    #[serde(rename = "configurationRequired")]
    pub configuration_required: bool,
}

pub async fn manifest() -> Json<Manifest> {
    Json(Manifest {
        id: ADDON_ID,
        version: env!("CARGO_PKG_VERSION"),
        manifest_version: 1,
        name: ADDON_NAME,
        description: ADDON_DESCRIPTION,
        resources: vec!["stream", "meta"],
        types: vec!["movie", "series"],
        catalogs: Vec::new(),
        id_prefixes: vec!["tt"],
        behavior_hints: ManifestBehaviorHints {
            adult: false,
            p2p: false,
            configurable: false,
            configuration_required: false,
        },
        logo: ADDON_LOGO,
        background: ADDON_BACKGROUND,
    })
}
