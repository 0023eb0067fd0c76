// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{analyze_handler, health_handler, metrics_handler, not_found_handler};
use super::middleware::{cors_layer, panic_response, request_id_layers, track_metrics};
use crate::analysis::{AnalysisService, ImageAnalyzer};
use crate::config::ServerConfig;
use crate::error::Result;
use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub analysis: AnalysisService,
}

pub fn create_router(config: &ServerConfig, analyzer: Arc<dyn ImageAnalyzer>) -> Result<Router> {
    let state = AppState {
        analysis: AnalysisService::new(analyzer),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/api/analyze", post(analyze_handler))
        .route_layer(from_fn(track_metrics))
        .fallback(not_found_handler)
        .layer(CatchPanicLayer::custom(panic_response))
        // Base64 photos are large; replaces axum's 2MB extractor default.
        // Enforced at the extractor so oversize bodies still get the envelope.
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state);

    Ok(app)
}
