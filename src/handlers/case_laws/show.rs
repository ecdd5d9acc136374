use axum::extract::{Extension, Path};

use crate::middleware::{ApiResponse, ApiResult};
use crate::services::CaseLawService;
use crate::types::CaseLawWithDetail;

use super::utils::parse_tid;

/// GET /api/case-laws/:tid - single case law with its detail
pub async fn get(
    Path(tid): Path<String>,
    Extension(service): Extension<CaseLawService>,
) -> ApiResult<CaseLawWithDetail> {
    let tid = parse_tid(&tid)?;
    tracing::info!("Fetching case law with TID: {}", tid);

    let record = service.get_by_key(tid).await?;
    Ok(ApiResponse::success(record))
}
