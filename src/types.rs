/// Shared domain types used by the server, the store implementations and the client

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Court or tax-domain category of a case.
///
/// Modelled as an open tag rather than a closed enum: new categories can show
/// up in the database without a code change. `KNOWN` lists the values the
/// front end offers as filters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub const KNOWN: &'static [&'static str] = &[
        "ITAT",
        "GST",
        "INCOME_TAX",
        "HIGH_COURT",
        "SUPREME_COURT",
        "TRIBUNAL_COURT",
    ];

    /// Returns `None` for an empty tag
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() { None } else { Some(Self(value)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_known(&self) -> bool {
        Self::KNOWN.contains(&self.0.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Statutory section a case is tagged with, e.g. `SECTION_16_GST`.
/// Open tag, same rules as [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxSection(String);

impl TaxSection {
    pub const KNOWN: &'static [&'static str] = &[
        "SECTION_7_GST",
        "SECTION_16_GST",
        "SECTION_17_GST",
        "SECTION_139_IT",
        "SECTION_143_IT",
    ];

    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() { None } else { Some(Self(value)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_known(&self) -> bool {
        Self::KNOWN.contains(&self.0.as_str())
    }
}

impl fmt::Display for TaxSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A case law summary row. `tid` is the public key; `id` is never used for lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseLaw {
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
    pub category: Option<Category>,
    pub tax_section: Option<TaxSection>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full document body for a case, keyed by the parent's `tid`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDetail {
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A case law with its detail extension attached. A missing detail is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseLawWithDetail {
    #[serde(flatten)]
    pub case_law: CaseLaw,
    #[serde(default)]
    pub case_detail: Option<CaseDetail>,
}

impl CaseLawWithDetail {
    pub fn tid(&self) -> i32 {
        self.case_law.tid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_tags_are_rejected() {
        assert!(Category::new("").is_none());
        assert!(TaxSection::new("").is_none());
    }

    #[test]
    fn unknown_tags_are_accepted_but_flagged() {
        let known = Category::new("GST").unwrap();
        let novel = Category::new("CUSTOMS").unwrap();
        assert!(known.is_known());
        assert!(!novel.is_known());
        assert!(TaxSection::new("SECTION_194_IT").is_some());
    }

    #[test]
    fn case_law_uses_camel_case_wire_names() {
        let value = json!({
            "id": "mock-1",
            "tid": 1001,
            "title": "State Tax Commissioner vs. ABC Industries Ltd.",
            "headline": "GST liability on inter-state transactions",
            "docsource": "High Court",
            "numcitedby": 25,
            "numcites": 15,
            "publishdate": "2024-01-15",
            "category": "GST",
            "taxSection": "SECTION_7_GST",
            "createdAt": "2024-01-15T00:00:00Z",
            "updatedAt": "2024-01-15T00:00:00Z",
            "caseDetail": null
        });

        let record: CaseLawWithDetail = serde_json::from_value(value).unwrap();
        assert_eq!(record.tid(), 1001);
        assert_eq!(record.case_law.tax_section.as_ref().map(|t| t.as_str()), Some("SECTION_7_GST"));
        assert!(record.case_law.description.is_none());
        assert!(record.case_detail.is_none());

        let out = serde_json::to_value(&record).unwrap();
        assert_eq!(out["taxSection"], "SECTION_7_GST");
        assert!(out.get("caseDetail").is_some());
        assert!(out.get("case_law").is_none());
    }
}
