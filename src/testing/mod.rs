//! Fixture builders for unit tests

use chrono::{Duration, TimeZone, Utc};

use crate::types::{CaseDetail, CaseLaw, CaseLawWithDetail, Category};

/// A case with the given `tid` and category, created `minutes` after a fixed epoch
pub fn case(tid: i32, category: &str, minutes: i64) -> CaseLawWithDetail {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(minutes);
    CaseLawWithDetail {
        case_law: CaseLaw {
            id: format!("case-{tid}"),
            tid,
            authorid: None,
            bench: None,
            catids: None,
            docsize: None,
            docsource: "High Court".to_string(),
            doctype: None,
            fragment: None,
            headline: Some(format!("Headline for case {tid}")),
            description: None,
            numcitedby: tid % 7,
            numcites: tid % 5,
            publishdate: "2024-01-15".to_string(),
            title: format!("Case {tid}"),
            category: Category::new(category),
            tax_section: None,
            created_at: created,
            updated_at: created,
        },
        case_detail: None,
    }
}

pub fn detail(tid: i32, doc: &str) -> CaseDetail {
    let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    CaseDetail {
        id: format!("detail-{tid}"),
        tid,
        agreement: false,
        citetid: None,
        courtcopy: true,
        divtype: None,
        doc: doc.to_string(),
        docsource: "High Court".to_string(),
        numcitedby: 0,
        numcites: 0,
        publishdate: "2024-01-15".to_string(),
        query_alert: None,
        title: format!("Case {tid}"),
        created_at: ts,
        updated_at: ts,
    }
}
