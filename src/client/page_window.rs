//! Which page numbers to render between the first and last page buttons.

use std::fmt;

/// Page numbers to show around `current_page`, excluding page 1 and
/// `total_pages`, which are always rendered on their own.
///
/// The window is centered on the current page with `(max_visible - 1) / 2`
/// pages on each side and slides to stay inside `2..total_pages` near either
/// end. Empty when there is at most one page.
pub fn compute_window(current_page: u32, total_pages: u32, max_visible: u32) -> Vec<u32> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let current = current_page as i64;
    let total = total_pages as i64;
    let max_visible = max_visible as i64;
    let side = (max_visible - 1).max(0) / 2;

    let mut start = (current - side).max(2);
    let mut end = (current + side).min(total - 1);

    // Near the start
    if current - side < 2 {
        end = (1 + max_visible).min(total - 1);
    }
    // Near the end
    if current + side >= total {
        start = (total - max_visible).max(2);
    }

    (start..=end)
        .filter(|&p| p != 1 && p != total)
        .map(|p| p as u32)
        .collect()
}

/// Number of page buttons that fit a viewport of `width` pixels
pub fn max_visible_for_width(width: u32) -> u32 {
    match width {
        w if w < 576 => 3,
        w if w < 768 => 5,
        _ => 7,
    }
}

pub fn total_pages(total_count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    u32::try_from(total_count.div_ceil(page_size as u64)).unwrap_or(u32::MAX)
}

/// 1-based index range of the items on a page, for "showing X-Y of Z"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    pub first: u64,
    pub last: u64,
    pub total: u64,
}

impl PageSummary {
    pub fn new(current_page: u32, page_size: u32, total: u64) -> Self {
        let size = page_size as u64;
        let before = (current_page.max(1) as u64 - 1) * size;
        if total == 0 || before >= total {
            return Self { first: 0, last: 0, total };
        }
        Self {
            first: before + 1,
            last: (before + size).min(total),
            total,
        }
    }
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {}-{} of {}", self.first, self.last, self.total)
    }
}
