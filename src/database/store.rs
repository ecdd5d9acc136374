use async_trait::async_trait;

use crate::filter::{OrderBy, QueryFilter};
use crate::pagination::Window;
use crate::types::CaseLawWithDetail;

use super::manager::DatabaseError;

/// Columns a grouped count can be taken over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    Category,
    TaxSection,
}

impl GroupField {
    pub fn column(&self) -> &'static str {
        match self {
            GroupField::Category => "category",
            GroupField::TaxSection => "taxSection",
        }
    }
}

/// One bucket of a grouped count. `key` is `None` for rows where the column is null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub key: Option<String>,
    pub count: u64,
}

/// Read-only access to case law storage.
///
/// `find_many` and `count` take the same filter and are not required to be
/// consistent with each other under concurrent writes.
#[async_trait]
pub trait CaseLawStore: Send + Sync {
    /// Filtered, ordered, windowed list with each record's detail attached
    async fn find_many(
        &self,
        filter: &QueryFilter,
        window: Window,
        order: &OrderBy,
    ) -> Result<Vec<CaseLawWithDetail>, DatabaseError>;

    async fn count(&self, filter: &QueryFilter) -> Result<u64, DatabaseError>;

    async fn group_count(&self, field: GroupField) -> Result<Vec<GroupCount>, DatabaseError>;

    async fn find_by_tid(&self, tid: i32) -> Result<Option<CaseLawWithDetail>, DatabaseError>;

    /// Cheap connectivity check
    async fn ping(&self) -> Result<(), DatabaseError>;
}
