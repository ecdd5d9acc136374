use axum::{extract::Extension, http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::{CaseLawError, CaseLawService};

/// GET /api/health - liveness only, never touches the store
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "Case law API is running"
    }))
}

/// GET /api/test-db - store connectivity check with a record count
pub async fn test_db(Extension(service): Extension<CaseLawService>) -> ApiResult<Value> {
    match service.record_count().await {
        Ok(count) => Ok(ApiResponse::success(json!({
            "status": "OK",
            "message": "Database connection successful",
            "count": count
        }))),
        Err(CaseLawError::Storage(e)) if !e.is_connectivity() => Err(e.into()),
        Err(e) => {
            tracing::error!("Database connection test failed: {}", e);
            Err(ApiError::service_unavailable("Database connection failed"))
        }
    }
}

/// Fallback for unmatched routes
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Route not found", "code": "NOT_FOUND" })),
    )
}
