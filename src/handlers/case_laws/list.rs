use axum::extract::{Extension, Query};
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::middleware::{ApiResponse, ApiResult};
use crate::pagination::Page;
use crate::services::{CaseLawService, ListRequest};
use crate::types::CaseLawWithDetail;

use super::utils::{order_by, page_request};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub tax_section: Option<String>,
    pub order_by: Option<String>,
}

/// GET /api/case-laws - paginated listing with optional search and filters
pub async fn get(
    Query(query): Query<ListQuery>,
    Extension(service): Extension<CaseLawService>,
    Extension(api): Extension<ApiConfig>,
) -> ApiResult<Page<CaseLawWithDetail>> {
    tracing::info!("GET /api/case-laws request received: {:?}", query);

    let request = ListRequest {
        page: page_request(
            query.page.as_deref(),
            query.limit.as_deref(),
            api.default_list_limit,
            api.max_limit,
        )?,
        order: order_by(query.order_by.as_deref())?,
        search: query.search,
        category: query.category,
        tax_section: query.tax_section,
    };

    let page = service.list(&request).await?;
    Ok(ApiResponse::success(page))
}
