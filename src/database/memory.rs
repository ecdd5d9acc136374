use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::filter::{OrderBy, QueryFilter};
use crate::pagination::Window;
use crate::types::CaseLawWithDetail;

use super::manager::DatabaseError;
use super::store::{CaseLawStore, GroupCount, GroupField};

/// In-process store with the same semantics as the Postgres one.
///
/// A failure message set with [`MemoryStore::fail_with`] makes every call
/// return [`DatabaseError::Unavailable`] until [`MemoryStore::recover`].
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<CaseLawWithDetail>>,
    failure: RwLock<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_records(records: Vec<CaseLawWithDetail>) -> Result<Self, DatabaseError> {
        let store = Self::new();
        for record in records {
            store.insert(record).await?;
        }
        Ok(store)
    }

    /// Insert a record; `tid` must be unique
    pub async fn insert(&self, record: CaseLawWithDetail) -> Result<(), DatabaseError> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.tid() == record.tid()) {
            return Err(DatabaseError::QueryError(format!("duplicate tid {}", record.tid())));
        }
        records.push(record);
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    pub async fn fail_with(&self, message: impl Into<String>) {
        *self.failure.write().await = Some(message.into());
    }

    pub async fn recover(&self) {
        *self.failure.write().await = None;
    }

    async fn check(&self) -> Result<(), DatabaseError> {
        match self.failure.read().await.as_ref() {
            Some(message) => Err(DatabaseError::Unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CaseLawStore for MemoryStore {
    async fn find_many(
        &self,
        filter: &QueryFilter,
        window: Window,
        order: &OrderBy,
    ) -> Result<Vec<CaseLawWithDetail>, DatabaseError> {
        self.check().await?;
        let records = self.records.read().await;
        let mut matching: Vec<&CaseLawWithDetail> =
            records.iter().filter(|r| filter.matches(&r.case_law)).collect();
        matching.sort_by(|a, b| order.compare(&a.case_law, &b.case_law));

        Ok(matching
            .into_iter()
            .skip(usize::try_from(window.skip).unwrap_or(usize::MAX))
            .take(usize::try_from(window.take).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &QueryFilter) -> Result<u64, DatabaseError> {
        self.check().await?;
        let records = self.records.read().await;
        Ok(records.iter().filter(|r| filter.matches(&r.case_law)).count() as u64)
    }

    async fn group_count(&self, field: GroupField) -> Result<Vec<GroupCount>, DatabaseError> {
        self.check().await?;
        let records = self.records.read().await;
        let mut buckets: BTreeMap<Option<String>, u64> = BTreeMap::new();
        for r in records.iter() {
            let key = match field {
                GroupField::Category => r.case_law.category.as_ref().map(|c| c.to_string()),
                GroupField::TaxSection => r.case_law.tax_section.as_ref().map(|t| t.to_string()),
            };
            *buckets.entry(key).or_default() += 1;
        }
        Ok(buckets.into_iter().map(|(key, count)| GroupCount { key, count }).collect())
    }

    async fn find_by_tid(&self, tid: i32) -> Result<Option<CaseLawWithDetail>, DatabaseError> {
        self.check().await?;
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.tid() == tid).cloned())
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        self.check().await
    }
}
