use axum::{http::Method, middleware as axum_middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::{handlers, meta, middleware, streams};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Stremio clients are browsers talking cross-origin; mirror the
    // permissive CORS policy the add-on convention expects.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        // Stremio add-on surface
        .route("/manifest.json", get(handlers::manifest))
        .route("/stream/{type}/{id}", get(streams::stream))
        .route("/meta/{type}/{id}", get(meta::meta))
        // Observability
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .layer(axum_middleware::from_fn(middleware::metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
