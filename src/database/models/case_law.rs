use chrono::{NaiveDateTime, TimeZone, Utc};
use sqlx::FromRow;

use crate::types::{CaseLaw, Category, TaxSection};

/// Raw `CaseLaw` row. Timestamps are stored without a zone and read as UTC.
#[derive(Debug, Clone, FromRow)]
#[sqlx(rename_all = "camelCase")]
pub struct CaseLawRow {
    pub id: String,
    pub tid: i32,
    pub authorid: Option<i32>,
    pub bench: Option<String>,
    pub catids: Option<String>,
    pub docsize: Option<i32>,
    pub docsource: String,
    pub doctype: Option<i32>,
    pub fragment: Option<bool>,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub numcitedby: i32,
    pub numcites: i32,
    pub publishdate: String,
    pub title: String,
    pub category: Option<String>,
    pub tax_section: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<CaseLawRow> for CaseLaw {
    fn from(row: CaseLawRow) -> Self {
        CaseLaw {
            id: row.id,
            tid: row.tid,
            authorid: row.authorid,
            bench: row.bench,
            catids: row.catids,
            docsize: row.docsize,
            docsource: row.docsource,
            doctype: row.doctype,
            fragment: row.fragment,
            headline: row.headline,
            description: row.description,
            numcitedby: row.numcitedby,
            numcites: row.numcites,
            publishdate: row.publishdate,
            title: row.title,
            category: row.category.and_then(Category::new),
            tax_section: row.tax_section.and_then(TaxSection::new),
            created_at: Utc.from_utc_datetime(&row.created_at),
            updated_at: Utc.from_utc_datetime(&row.updated_at),
        }
    }
}
