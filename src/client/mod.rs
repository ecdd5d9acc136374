//! Client side of the case law API.
//!
//! [`CaseLawSource`] is the seam: [`http::HttpCaseLawClient`] talks to a
//! running server, [`fallback::Degraded`] wraps any source with a local set
//! of records, and [`query::CaseListQuery`] drives a source the way the list
//! screen does.

pub mod fallback;
pub mod http;
pub mod page_window;
pub mod query;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pagination::{Page, PageRequest, PaginationError};
use crate::services::CaseLawStats;
use crate::types::CaseLawWithDetail;

pub use fallback::Degraded;
pub use http::HttpCaseLawClient;
pub use page_window::{compute_window, max_visible_for_width, total_pages, PageSummary};
pub use query::{CaseListQuery, ListView, QueryTarget};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Case law not found: tid {0}")]
    NotFound(i32),

    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] PaginationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }
}

/// Optional listing filters. `None` and `"all"` both mean unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilters {
    pub search: Option<String>,
    pub category: Option<String>,
    pub tax_section: Option<String>,
}

impl ListFilters {
    pub fn category(category: impl Into<String>) -> Self {
        Self { category: Some(category.into()), ..Self::default() }
    }

    pub fn tax_section(tax_section: impl Into<String>) -> Self {
        Self { tax_section: Some(tax_section.into()), ..Self::default() }
    }
}

/// `GET /api/health` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

/// Anything that can answer the read endpoints of the API
#[async_trait]
pub trait CaseLawSource: Send + Sync {
    async fn list(
        &self,
        filters: &ListFilters,
        page: PageRequest,
    ) -> Result<Page<CaseLawWithDetail>, ClientError>;

    async fn get(&self, tid: i32) -> Result<CaseLawWithDetail, ClientError>;

    async fn search(&self, query: &str, page: PageRequest) -> Result<Page<CaseLawWithDetail>, ClientError>;

    async fn stats(&self) -> Result<CaseLawStats, ClientError>;

    async fn health(&self) -> Result<HealthStatus, ClientError>;

    /// Count for one category, read from the stats endpoint
    async fn count_for_category(&self, category: &str) -> Result<u64, ClientError> {
        let stats = self.stats().await?;
        Ok(stats.by_category.get(category).copied().unwrap_or(0))
    }
}
