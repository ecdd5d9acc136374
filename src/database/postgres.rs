use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::{debug, warn};

use crate::config::DatabaseConfig;
use crate::filter::{OrderBy, QueryFilter, SqlResult};
use crate::pagination::Window;
use crate::types::{CaseDetail, CaseLaw, CaseLawWithDetail};

use super::manager::DatabaseError;
use super::models::{CaseDetailRow, CaseLawRow};
use super::query_builder::QueryBuilder;
use super::store::{CaseLawStore, GroupCount, GroupField};

/// Postgres-backed store over the `CaseLaw`/`CaseDetail` tables
pub struct PgCaseLawStore {
    pool: PgPool,
    case_laws: QueryBuilder,
    case_details: QueryBuilder,
    query_logging: bool,
    slow_query_threshold: Duration,
}

impl PgCaseLawStore {
    pub fn new(pool: PgPool, config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        Ok(Self {
            pool,
            case_laws: QueryBuilder::case_laws(&config.case_law_table)?,
            case_details: QueryBuilder::case_details(&config.case_detail_table)?,
            query_logging: config.enable_query_logging,
            slow_query_threshold: Duration::from_millis(config.slow_query_threshold_ms),
        })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn log_query(&self, sql: &SqlResult) {
        if self.query_logging {
            debug!(query = %sql.query, params = ?sql.params, "executing query");
        }
    }

    fn check_elapsed(&self, what: &str, started: Instant) {
        let elapsed = started.elapsed();
        if elapsed > self.slow_query_threshold {
            warn!("Slow query ({}): {}ms", what, elapsed.as_millis());
        }
    }

    /// Attach details to an already-fetched page, preserving its order
    async fn with_details(&self, rows: Vec<CaseLawRow>) -> Result<Vec<CaseLawWithDetail>, DatabaseError> {
        if rows.is_empty() {
            return Ok(vec![]);
        }
        let tids: Vec<i32> = rows.iter().map(|r| r.tid).collect();
        let details: Vec<CaseDetailRow> = sqlx::query_as(&self.case_details.by_tids())
            .bind(&tids)
            .fetch_all(&self.pool)
            .await?;

        let mut by_tid: HashMap<i32, CaseDetail> =
            details.into_iter().map(|d| (d.tid, CaseDetail::from(d))).collect();

        Ok(rows
            .into_iter()
            .map(|row| {
                let case_detail = by_tid.remove(&row.tid);
                CaseLawWithDetail { case_law: CaseLaw::from(row), case_detail }
            })
            .collect())
    }
}

#[async_trait]
impl CaseLawStore for PgCaseLawStore {
    async fn find_many(
        &self,
        filter: &QueryFilter,
        window: Window,
        order: &OrderBy,
    ) -> Result<Vec<CaseLawWithDetail>, DatabaseError> {
        let sql = self.case_laws.select(filter, window, order);
        self.log_query(&sql);
        let started = Instant::now();

        let mut q = sqlx::query_as::<_, CaseLawRow>(&sql.query);
        for p in &sql.params {
            q = q.bind(p.as_str());
        }
        let rows = q.fetch_all(&self.pool).await?;
        let out = self.with_details(rows).await;

        self.check_elapsed("find_many", started);
        out
    }

    async fn count(&self, filter: &QueryFilter) -> Result<u64, DatabaseError> {
        let sql = self.case_laws.count(filter);
        self.log_query(&sql);
        let started = Instant::now();

        let mut q = sqlx::query(&sql.query);
        for p in &sql.params {
            q = q.bind(p.as_str());
        }
        let row = q.fetch_one(&self.pool).await?;
        let count: i64 = row.try_get("count")?;

        self.check_elapsed("count", started);
        u64::try_from(count).map_err(|_| DatabaseError::QueryError(format!("negative count: {}", count)))
    }

    async fn group_count(&self, field: GroupField) -> Result<Vec<GroupCount>, DatabaseError> {
        let sql = self.case_laws.group_count(field);
        self.log_query(&sql);
        let started = Instant::now();

        let rows = sqlx::query(&sql.query).fetch_all(&self.pool).await?;
        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let key: Option<String> = row.try_get("key")?;
            let count: i64 = row.try_get("count")?;
            out.push(GroupCount { key, count: count.max(0) as u64 });
        }

        self.check_elapsed("group_count", started);
        Ok(out)
    }

    async fn find_by_tid(&self, tid: i32) -> Result<Option<CaseLawWithDetail>, DatabaseError> {
        let started = Instant::now();
        let row: Option<CaseLawRow> = sqlx::query_as(&self.case_laws.by_tid())
            .bind(tid)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let detail: Option<CaseDetailRow> = sqlx::query_as(&self.case_details.by_tid())
            .bind(tid)
            .fetch_optional(&self.pool)
            .await?;

        self.check_elapsed("find_by_tid", started);
        Ok(Some(CaseLawWithDetail {
            case_law: row.into(),
            case_detail: detail.map(Into::into),
        }))
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
