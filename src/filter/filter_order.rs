use super::error::FilterError;
use super::types::{FilterOrderInfo, OrderBy, SortDirection, SortField};

pub struct FilterOrder;

impl FilterOrder {
    /// Parse `"createdAt desc"`, `"numcitedby desc, title"` and so on.
    /// A blank string yields the default order.
    pub fn parse(raw: &str) -> Result<OrderBy, FilterError> {
        let mut out = Vec::new();
        for part in raw.split(',') {
            let trimmed = part.trim();
            if trimmed.is_empty() { continue; }
            let mut it = trimmed.split_whitespace();
            let Some(col) = it.next() else { continue };
            let field = SortField::from_column(col)
                .ok_or_else(|| FilterError::UnsupportedColumn(col.to_string()))?;
            let sort = match it.next() {
                None => SortDirection::Asc,
                Some(dir) if dir.eq_ignore_ascii_case("asc") => SortDirection::Asc,
                Some(dir) if dir.eq_ignore_ascii_case("desc") => SortDirection::Desc,
                Some(dir) => return Err(FilterError::InvalidDirection(dir.to_string())),
            };
            if let Some(extra) = it.next() {
                return Err(FilterError::InvalidDirection(extra.to_string()));
            }
            out.push(FilterOrderInfo { field, sort });
        }
        Ok(OrderBy::new(out))
    }

    pub fn generate(order: &OrderBy) -> String {
        let mut parts: Vec<String> = order
            .keys()
            .iter()
            .map(|i| format!("\"{}\" {}", i.field.column(), i.sort.to_sql()))
            .collect();
        if order.needs_tiebreak() {
            parts.push(format!("\"{}\" ASC", SortField::Tid.column()));
        }
        format!("ORDER BY {}", parts.join(", "))
    }
}
