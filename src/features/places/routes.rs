use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::places::handlers::search_handler;
use crate::features::places::services::EnrichmentPipeline;

/// Create routes for the places feature
pub fn routes(pipeline: Arc<EnrichmentPipeline>) -> Router {
    Router::new()
        .route("/api/places/search", post(search_handler::search_places))
        .with_state(pipeline)
}
