use chrono::{NaiveDateTime, TimeZone, Utc};
use sqlx::FromRow;

use crate::types::CaseDetail;

#[derive(Debug, Clone, FromRow)]
#[sqlx(rename_all = "camelCase")]
pub struct CaseDetailRow {
    pub id: String,
    pub tid: i32,
    pub agreement: bool,
    pub citetid: Option<i32>,
    pub courtcopy: bool,
    pub divtype: Option<String>,
    pub doc: String,
    pub docsource: String,
    pub numcitedby: i32,
    pub numcites: i32,
    pub publishdate: String,
    pub query_alert: Option<serde_json::Value>,
    pub title: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<CaseDetailRow> for CaseDetail {
    fn from(row: CaseDetailRow) -> Self {
        CaseDetail {
            id: row.id,
            tid: row.tid,
            agreement: row.agreement,
            citetid: row.citetid,
            courtcopy: row.courtcopy,
            divtype: row.divtype,
            doc: row.doc,
            docsource: row.docsource,
            numcitedby: row.numcitedby,
            numcites: row.numcites,
            publishdate: row.publishdate,
            query_alert: row.query_alert,
            title: row.title,
            created_at: Utc.from_utc_datetime(&row.created_at),
            updated_at: Utc.from_utc_datetime(&row.updated_at),
        }
    }
}
