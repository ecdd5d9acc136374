use axum::extract::Extension;

use crate::middleware::{ApiResponse, ApiResult};
use crate::services::{CaseLawService, CaseLawStats};

/// GET /api/case-laws/stats/count - totals grouped by category and tax section
pub async fn get(Extension(service): Extension<CaseLawService>) -> ApiResult<CaseLawStats> {
    let stats = service.count_by_category().await?;
    Ok(ApiResponse::success(stats))
}
