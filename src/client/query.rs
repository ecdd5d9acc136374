//! The list screen's request state as a value.
//!
//! Every transition returns a new [`CaseListQuery`]; fetching never mutates
//! the query it was called on.

use crate::filter::ALL_SENTINEL;
use crate::pagination::{Page, PageRequest};
use crate::types::CaseLawWithDetail;

use super::page_window::{compute_window, total_pages, PageSummary};
use super::{CaseLawSource, ClientError, ListFilters};

pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseListQuery {
    search: String,
    category: Option<String>,
    tax_section: Option<String>,
    page: u32,
    page_size: u32,
}

/// Which endpoint a query resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryTarget {
    All,
    Search(String),
    Category(String),
    TaxSection(String),
}

impl Default for CaseListQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

fn selected(value: &str) -> Option<String> {
    Some(value.to_string()).filter(|v| !v.is_empty() && v != ALL_SENTINEL)
}

impl CaseListQuery {
    pub fn new(page_size: u32) -> Self {
        Self {
            search: String::new(),
            category: None,
            tax_section: None,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn tax_section(&self) -> Option<&str> {
        self.tax_section.as_deref()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// New search term; filters are reset and paging restarts
    pub fn with_search(&self, term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            category: None,
            tax_section: None,
            page: 1,
            page_size: self.page_size,
        }
    }

    pub fn cleared_search(&self) -> Self {
        Self { search: String::new(), page: 1, ..self.clone() }
    }

    /// Category and tax section are mutually exclusive; either one clears
    /// the other and the search term
    pub fn with_category(&self, category: &str) -> Self {
        Self {
            search: String::new(),
            category: selected(category),
            tax_section: None,
            page: 1,
            page_size: self.page_size,
        }
    }

    pub fn with_tax_section(&self, tax_section: &str) -> Self {
        Self {
            search: String::new(),
            category: None,
            tax_section: selected(tax_section),
            page: 1,
            page_size: self.page_size,
        }
    }

    pub fn with_page_size(&self, page_size: u32) -> Self {
        Self { page: 1, page_size: page_size.max(1), ..self.clone() }
    }

    /// Start at `page` before the page count is known
    pub fn at_page(&self, page: u32) -> Self {
        Self { page: page.max(1), ..self.clone() }
    }

    /// Move to `page`. Pages outside `1..=total_pages` are ignored.
    pub fn with_page(&self, page: u32, total_pages: u32) -> Self {
        if page < 1 || page > total_pages {
            return self.clone();
        }
        Self { page, ..self.clone() }
    }

    /// Search first, then category, then tax section, then everything
    pub fn target(&self) -> QueryTarget {
        if !self.search.is_empty() {
            if self.search.trim().is_empty() {
                return QueryTarget::All;
            }
            return QueryTarget::Search(self.search.clone());
        }
        if let Some(category) = &self.category {
            return QueryTarget::Category(category.clone());
        }
        if let Some(section) = &self.tax_section {
            return QueryTarget::TaxSection(section.clone());
        }
        QueryTarget::All
    }

    pub fn page_request(&self) -> Result<PageRequest, ClientError> {
        Ok(PageRequest::new(self.page as i64, self.page_size as i64)?)
    }

    pub async fn fetch<S>(&self, source: &S) -> Result<ListView, ClientError>
    where
        S: CaseLawSource + ?Sized,
    {
        let request = self.page_request()?;
        let page = match self.target() {
            QueryTarget::Search(term) => source.search(&term, request).await?,
            QueryTarget::Category(category) => source.list(&ListFilters::category(category), request).await?,
            QueryTarget::TaxSection(section) => source.list(&ListFilters::tax_section(section), request).await?,
            QueryTarget::All => source.list(&ListFilters::default(), request).await?,
        };

        // The server's view of the current page wins
        let query = Self { page: page.pagination.current_page, ..self.clone() };
        Ok(ListView { query, page })
    }
}

/// A fetched page together with the query that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub query: CaseListQuery,
    pub page: Page<CaseLawWithDetail>,
}

impl ListView {
    pub fn items(&self) -> &[CaseLawWithDetail] {
        &self.page.items
    }

    pub fn total_count(&self) -> u64 {
        self.page.pagination.total_count
    }

    /// Derived from the count and the requested page size
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_count(), self.query.page_size)
    }

    pub fn visible_pages(&self, max_visible: u32) -> Vec<u32> {
        compute_window(self.query.page, self.total_pages(), max_visible)
    }

    pub fn summary(&self) -> PageSummary {
        PageSummary::new(self.query.page, self.query.page_size, self.total_count())
    }

    pub fn go_to(&self, page: u32) -> CaseListQuery {
        self.query.with_page(page, self.total_pages())
    }
}
