use std::path::Path;

use async_trait::async_trait;
use tracing::warn;

use crate::filter::{build, OrderBy, SearchFields};
use crate::pagination::{Page, PageRequest};
use crate::services::CaseLawStats;
use crate::types::CaseLawWithDetail;

use super::{CaseLawSource, ClientError, HealthStatus, ListFilters};

/// Degraded mode: wraps a source and answers `get` and `search` from a local
/// record set when the source fails.
///
/// Only failures are covered. A `NotFound` from the source is an answer and
/// is passed through, and so is any failure the local records cannot cover.
/// Listing, stats and health always go to the source.
pub struct Degraded<S> {
    inner: S,
    records: Vec<CaseLawWithDetail>,
}

impl<S: CaseLawSource> Degraded<S> {
    pub fn new(inner: S, records: Vec<CaseLawWithDetail>) -> Self {
        Self { inner, records }
    }

    /// Load the fallback records from a JSON array on disk
    pub fn from_file(inner: S, path: &Path) -> Result<Self, ClientError> {
        let content = std::fs::read_to_string(path)?;
        let records: Vec<CaseLawWithDetail> = serde_json::from_str(&content)?;
        Ok(Self::new(inner, records))
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn records(&self) -> &[CaseLawWithDetail] {
        &self.records
    }
}

#[async_trait]
impl<S: CaseLawSource> CaseLawSource for Degraded<S> {
    async fn list(
        &self,
        filters: &ListFilters,
        page: PageRequest,
    ) -> Result<Page<CaseLawWithDetail>, ClientError> {
        self.inner.list(filters, page).await
    }

    async fn get(&self, tid: i32) -> Result<CaseLawWithDetail, ClientError> {
        match self.inner.get(tid).await {
            Err(e) if !e.is_not_found() => match self.records.iter().find(|r| r.tid() == tid) {
                Some(record) => {
                    warn!("Fetching case law {} failed ({}); using fallback record", tid, e);
                    Ok(record.clone())
                }
                None => Err(e),
            },
            other => other,
        }
    }

    async fn search(&self, query: &str, page: PageRequest) -> Result<Page<CaseLawWithDetail>, ClientError> {
        match self.inner.search(query, page).await {
            Err(e) if !e.is_not_found() => {
                let filter = build(Some(query), None, None, SearchFields::SEARCH);
                let mut matching: Vec<CaseLawWithDetail> = self
                    .records
                    .iter()
                    .filter(|r| filter.matches(&r.case_law))
                    .cloned()
                    .collect();

                // An empty local page would read as "no results" and hide the
                // outage, so the source error is returned instead.
                if matching.is_empty() {
                    return Err(e);
                }
                let order = OrderBy::default();
                matching.sort_by(|a, b| order.compare(&a.case_law, &b.case_law));
                warn!("Search '{}' failed ({}); using {} fallback records", query, e, matching.len());
                Ok(Page::from_slice(&matching, page))
            }
            other => other,
        }
    }

    async fn stats(&self) -> Result<CaseLawStats, ClientError> {
        self.inner.stats().await
    }

    async fn health(&self) -> Result<HealthStatus, ClientError> {
        self.inner.health().await
    }
}
