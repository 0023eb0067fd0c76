// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::error::ChefError;
use crate::models::{AnalyzeRequest, AnalyzeResponse, HealthResponse};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use tracing::{debug, error, info, warn};

/// Handler for `GET /health`. Always healthy while the process serves requests.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Handler for `GET /metrics` (Prometheus text format)
pub async fn metrics_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        crate::metrics::gather_metrics(),
    )
}

/// Handler for `POST /api/analyze`
pub async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ChefError> {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            warn!("Rejected oversized analyze request: {}", rejection);
            return Err(ChefError::PayloadTooLarge);
        }
        Err(rejection) => {
            warn!("Rejected analyze request body: {}", rejection);
            return Err(ChefError::InvalidRequest("Invalid request body".to_string()));
        }
    };

    if req.image.is_empty() {
        return Err(ChefError::InvalidRequest("Image is required".to_string()));
    }

    debug!("Received analyze request ({} base64 chars)", req.image.len());

    let result = state.analysis.analyze_image(req.image).await.map_err(|e| {
        error!("Analysis error: {}", e);
        ChefError::Analysis(Box::new(e))
    })?;

    info!(
        "Analysis successful: found {} ingredients, {} recipes",
        result.ingredients_detected.len(),
        result.recipes.len()
    );
    Ok(Json(AnalyzeResponse::success(result)))
}

/// Fallback for unknown routes
pub async fn not_found_handler(uri: Uri) -> ChefError {
    ChefError::NotFound(uri.path().to_string())
}
