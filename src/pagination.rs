use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Invalid {field}: '{value}' is not a number")]
    NotANumber { field: &'static str, value: String },

    #[error("Invalid page: {0} (must be >= 1)")]
    InvalidPage(i64),

    #[error("Invalid limit: {0} (must be >= 1)")]
    InvalidLimit(i64),
}

/// A validated page request. `page` and `limit` are both at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

/// Skip/take window handed to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub skip: u64,
    pub take: u64,
}

impl PageRequest {
    pub fn new(page: i64, limit: i64) -> Result<Self, PaginationError> {
        if page < 1 || page > u32::MAX as i64 {
            return Err(PaginationError::InvalidPage(page));
        }
        if limit < 1 || limit > u32::MAX as i64 {
            return Err(PaginationError::InvalidLimit(limit));
        }
        Ok(Self { page: page as u32, limit: limit as u32 })
    }

    /// Parse raw query-string values. Missing values fall back to page 1 and
    /// `default_limit`; anything non-numeric or below 1 is rejected.
    pub fn parse(page: Option<&str>, limit: Option<&str>, default_limit: u32) -> Result<Self, PaginationError> {
        let page = match page.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => parse_number("page", raw)?,
            None => 1,
        };
        let limit = match limit.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => parse_number("limit", raw)?,
            None => default_limit as i64,
        };
        Self::new(page, limit)
    }

    /// Cap the limit at `max_limit`, keeping the page number
    pub fn capped(self, max_limit: Option<u32>) -> Self {
        match max_limit {
            Some(max) if max >= 1 && self.limit > max => {
                tracing::warn!("Limit {} exceeds max {}, capping to max", self.limit, max);
                Self { page: self.page, limit: max }
            }
            _ => self,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn window(&self) -> Window {
        Window {
            skip: (self.page as u64 - 1) * self.limit as u64,
            take: self.limit as u64,
        }
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<i64, PaginationError> {
    raw.parse::<i64>().map_err(|_| PaginationError::NotANumber {
        field,
        value: raw.to_string(),
    })
}

/// Pagination metadata returned alongside every listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationEnvelope {
    pub current_page: u32,
    pub total_pages: u64,
    pub total_count: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationEnvelope {
    pub fn compute(request: PageRequest, total_count: u64) -> Self {
        let window = request.window();
        Self {
            current_page: request.page(),
            total_pages: total_count.div_ceil(window.take),
            total_count,
            has_next: window.skip + window.take < total_count,
            has_prev: request.page() > 1,
        }
    }
}

/// The `{caseLaws, pagination}` envelope. `items` keeps the wire name the
/// front end already consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(rename = "caseLaws")]
    pub items: Vec<T>,
    pub pagination: PaginationEnvelope,
}

impl<T> Page<T> {
    /// Slice an already-filtered, already-ordered collection
    pub fn from_slice(all: &[T], request: PageRequest) -> Self
    where
        T: Clone,
    {
        let window = request.window();
        let items = all
            .iter()
            .skip(usize::try_from(window.skip).unwrap_or(usize::MAX))
            .take(window.take as usize)
            .cloned()
            .collect();
        Self {
            items,
            pagination: PaginationEnvelope::compute(request, all.len() as u64),
        }
    }
}
