use std::cmp::Ordering;

use crate::types::{CaseLaw, Category, TaxSection};

/// Free-text columns a search can run against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Title,
    Description,
    Headline,
}

impl TextField {
    pub fn column(&self) -> &'static str {
        match self {
            TextField::Title => "title",
            TextField::Description => "description",
            TextField::Headline => "headline",
        }
    }

    pub fn value<'a>(&self, record: &'a CaseLaw) -> Option<&'a str> {
        match self {
            TextField::Title => Some(record.title.as_str()),
            TextField::Description => record.description.as_deref(),
            TextField::Headline => record.headline.as_deref(),
        }
    }
}

/// The two text fields a search string is OR-matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchFields {
    pub primary: TextField,
    pub secondary: TextField,
}

impl SearchFields {
    /// Used by the listing endpoint
    pub const LISTING: SearchFields = SearchFields {
        primary: TextField::Title,
        secondary: TextField::Description,
    };

    /// Used by the dedicated search endpoint
    pub const SEARCH: SearchFields = SearchFields {
        primary: TextField::Title,
        secondary: TextField::Headline,
    };
}

/// Case-insensitive substring match over a field pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMatch {
    pub needle: String,
    pub fields: SearchFields,
}

/// Request-scoped filter predicate. The default value matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFilter {
    pub text: Option<TextMatch>,
    pub category: Option<Category>,
    pub tax_section: Option<TaxSection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Columns a listing may be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    UpdatedAt,
    PublishDate,
    Tid,
    Title,
    NumCitedBy,
    NumCites,
}

impl SortField {
    pub fn column(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "createdAt",
            SortField::UpdatedAt => "updatedAt",
            SortField::PublishDate => "publishdate",
            SortField::Tid => "tid",
            SortField::Title => "title",
            SortField::NumCitedBy => "numcitedby",
            SortField::NumCites => "numcites",
        }
    }

    pub fn from_column(name: &str) -> Option<Self> {
        Some(match name {
            "createdAt" | "created_at" => SortField::CreatedAt,
            "updatedAt" | "updated_at" => SortField::UpdatedAt,
            "publishdate" => SortField::PublishDate,
            "tid" => SortField::Tid,
            "title" => SortField::Title,
            "numcitedby" => SortField::NumCitedBy,
            "numcites" => SortField::NumCites,
            _ => return None,
        })
    }

    pub fn compare(&self, a: &CaseLaw, b: &CaseLaw) -> Ordering {
        match self {
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortField::PublishDate => a.publishdate.cmp(&b.publishdate),
            SortField::Tid => a.tid.cmp(&b.tid),
            SortField::Title => a.title.cmp(&b.title),
            SortField::NumCitedBy => a.numcitedby.cmp(&b.numcitedby),
            SortField::NumCites => a.numcites.cmp(&b.numcites),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOrderInfo {
    pub field: SortField,
    pub sort: SortDirection,
}

/// Ordered list of sort keys; never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy(Vec<FilterOrderInfo>);

impl OrderBy {
    pub fn new(keys: Vec<FilterOrderInfo>) -> Self {
        if keys.is_empty() { Self::default() } else { Self(keys) }
    }

    pub fn keys(&self) -> &[FilterOrderInfo] {
        &self.0
    }

    /// True when `tid` is not one of the keys and has to break ties
    pub fn needs_tiebreak(&self) -> bool {
        !self.0.iter().any(|k| k.field == SortField::Tid)
    }

    /// Rows equal on every key fall back to ascending `tid`, so pages are stable
    pub fn compare(&self, a: &CaseLaw, b: &CaseLaw) -> Ordering {
        for key in &self.0 {
            let ord = key.field.compare(a, b);
            let ord = match key.sort {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        if self.needs_tiebreak() { a.tid.cmp(&b.tid) } else { Ordering::Equal }
    }
}

impl Default for OrderBy {
    /// Newest first
    fn default() -> Self {
        Self(vec![FilterOrderInfo {
            field: SortField::CreatedAt,
            sort: SortDirection::Desc,
        }])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlResult {
    pub query: String,
    pub params: Vec<String>,
}
