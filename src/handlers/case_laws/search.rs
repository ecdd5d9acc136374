use axum::extract::{Extension, Path, Query};
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::middleware::{ApiResponse, ApiResult};
use crate::pagination::Page;
use crate::services::CaseLawService;
use crate::types::CaseLawWithDetail;

use super::utils::{order_by, page_request};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub order_by: Option<String>,
}

/// GET /api/case-laws/search/:query - title/headline search
pub async fn get(
    Path(term): Path<String>,
    Query(query): Query<SearchQuery>,
    Extension(service): Extension<CaseLawService>,
    Extension(api): Extension<ApiConfig>,
) -> ApiResult<Page<CaseLawWithDetail>> {
    tracing::info!("Search API called with query: {}", term);

    let request = page_request(
        query.page.as_deref(),
        query.limit.as_deref(),
        api.default_search_limit,
        api.max_limit,
    )?;
    let order = order_by(query.order_by.as_deref())?;

    let page = service.search(&term, request, &order).await?;
    Ok(ApiResponse::success(page))
}
