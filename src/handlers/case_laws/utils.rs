use crate::error::ApiError;
use crate::filter::filter_order::FilterOrder;
use crate::filter::OrderBy;
use crate::pagination::{PageRequest, PaginationError};

/// Parse the `:tid` path segment
pub fn parse_tid(raw: &str) -> Result<i32, ApiError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ApiError::invalid_field("tid", format!("Invalid tid: '{}' is not an integer", raw)))
}

/// Parse `page`/`limit` query values, falling back to `default_limit` and
/// capping at `max_limit`
pub fn page_request(
    page: Option<&str>,
    limit: Option<&str>,
    default_limit: u32,
    max_limit: Option<u32>,
) -> Result<PageRequest, ApiError> {
    let request = PageRequest::parse(page, limit, default_limit).map_err(|e| {
        let field = match &e {
            PaginationError::NotANumber { field, .. } => *field,
            PaginationError::InvalidPage(_) => "page",
            PaginationError::InvalidLimit(_) => "limit",
        };
        ApiError::invalid_field(field, e.to_string())
    })?;
    Ok(request.capped(max_limit))
}

pub fn order_by(raw: Option<&str>) -> Result<OrderBy, ApiError> {
    match raw {
        Some(raw) => FilterOrder::parse(raw).map_err(|e| ApiError::invalid_field("orderBy", e.to_string())),
        None => Ok(OrderBy::default()),
    }
}
