use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::database::{CaseLawStore, DatabaseError, GroupCount, GroupField};
use crate::filter::{build, FilterError, OrderBy, QueryFilter, SearchFields};
use crate::pagination::{Page, PageRequest, PaginationEnvelope, PaginationError};
use crate::types::CaseLawWithDetail;

#[derive(Debug, thiserror::Error)]
pub enum CaseLawError {
    #[error("Case law not found: tid {0}")]
    NotFound(i32),
    #[error("Storage error: {0}")]
    Storage(#[from] DatabaseError),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<PaginationError> for CaseLawError {
    fn from(err: PaginationError) -> Self {
        CaseLawError::Validation(err.to_string())
    }
}

impl From<FilterError> for CaseLawError {
    fn from(err: FilterError) -> Self {
        CaseLawError::Validation(err.to_string())
    }
}

/// Inputs of the listing endpoint, already parsed
#[derive(Debug, Clone)]
pub struct ListRequest {
    pub search: Option<String>,
    pub category: Option<String>,
    pub tax_section: Option<String>,
    pub page: PageRequest,
    pub order: OrderBy,
}

/// `{total, byCategory, byTaxSection}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseLawStats {
    pub total: u64,
    pub by_category: BTreeMap<String, u64>,
    pub by_tax_section: BTreeMap<String, u64>,
}

/// Executes filters against the store and shapes the responses
#[derive(Clone)]
pub struct CaseLawService {
    store: Arc<dyn CaseLawStore>,
}

impl CaseLawService {
    pub fn new(store: Arc<dyn CaseLawStore>) -> Self {
        Self { store }
    }

    /// List and count run concurrently; both must succeed. They are not a
    /// snapshot: a write in between can make `totalCount` disagree with the page.
    pub async fn fetch_page(
        &self,
        filter: &QueryFilter,
        request: PageRequest,
        order: &OrderBy,
    ) -> Result<Page<CaseLawWithDetail>, CaseLawError> {
        let window = request.window();
        debug!("Pagination params: skip={} take={} page={}", window.skip, window.take, request.page());

        let (items, total_count) = futures::try_join!(
            self.store.find_many(filter, window, order),
            self.store.count(filter),
        )?;

        debug!("Found {} case laws out of {}", items.len(), total_count);
        Ok(Page {
            items,
            pagination: PaginationEnvelope::compute(request, total_count),
        })
    }

    pub async fn list(&self, request: &ListRequest) -> Result<Page<CaseLawWithDetail>, CaseLawError> {
        let filter = build(
            request.search.as_deref(),
            request.category.as_deref(),
            request.tax_section.as_deref(),
            SearchFields::LISTING,
        );
        self.fetch_page(&filter, request.page, &request.order).await
    }

    pub async fn search(
        &self,
        query: &str,
        request: PageRequest,
        order: &OrderBy,
    ) -> Result<Page<CaseLawWithDetail>, CaseLawError> {
        let filter = build(Some(query), None, None, SearchFields::SEARCH);
        let page = self.fetch_page(&filter, request, order).await?;
        info!(
            "Search '{}' found {} results out of {} total matches",
            query,
            page.items.len(),
            page.pagination.total_count
        );
        Ok(page)
    }

    pub async fn get_by_key(&self, tid: i32) -> Result<CaseLawWithDetail, CaseLawError> {
        match self.store.find_by_tid(tid).await? {
            Some(record) => Ok(record),
            None => {
                info!("Case law with tid {} not found", tid);
                Err(CaseLawError::NotFound(tid))
            }
        }
    }

    /// Total plus independent groupings by category and by tax section.
    /// Rows with a null key are left out of the groupings.
    pub async fn count_by_category(&self) -> Result<CaseLawStats, CaseLawError> {
        let everything = QueryFilter::default();
        let (total, categories, sections) = futures::try_join!(
            self.store.count(&everything),
            self.store.group_count(GroupField::Category),
            self.store.group_count(GroupField::TaxSection),
        )?;

        Ok(CaseLawStats {
            total,
            by_category: into_map(categories),
            by_tax_section: into_map(sections),
        })
    }

    /// Total record count, used by the connectivity endpoint
    pub async fn record_count(&self) -> Result<u64, CaseLawError> {
        self.store.ping().await?;
        Ok(self.store.count(&QueryFilter::default()).await?)
    }
}

fn into_map(groups: Vec<GroupCount>) -> BTreeMap<String, u64> {
    groups
        .into_iter()
        .filter_map(|g| g.key.map(|key| (key, g.count)))
        .collect()
}
