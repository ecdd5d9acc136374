use std::fmt::Display;

use serde::Serialize;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::types::CaseLawWithDetail;

pub fn output_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Output a success message in the appropriate format
pub fn output_success(output_format: OutputFormat, message: &str) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => output_json(&json!({ "success": true, "message": message })),
        OutputFormat::Text => {
            println!("✓ {}", message);
            Ok(())
        }
    }
}

/// Cut `text` to at most `max_chars` characters, marking the cut with "..."
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

pub fn tag_or_dash<T: Display>(tag: Option<&T>) -> String {
    tag.map(|t| t.to_string()).unwrap_or_else(|| "-".to_string())
}

/// One line per case: tid, publish date, category, title
pub fn print_case_rows(items: &[CaseLawWithDetail]) {
    for item in items {
        let case = &item.case_law;
        println!(
            "{:>10}  {:<10}  {:<14}  {}",
            case.tid,
            case.publishdate,
            tag_or_dash(case.category.as_ref()),
            truncate_text(&case.title, 80)
        );
        if let Some(headline) = case.headline.as_deref().filter(|h| !h.is_empty()) {
            println!("{:>10}  {}", "", truncate_text(headline, 100));
        }
    }
}

/// Page buttons as text: first and last page always, the window in
/// between, gaps shown as "...", the current page in brackets
pub fn pager_line(current: u32, total_pages: u32, window: &[u32]) -> String {
    if total_pages == 0 {
        return String::new();
    }
    let label = |p: u32| if p == current { format!("[{p}]") } else { p.to_string() };

    let mut parts = vec![label(1)];
    if window.first().is_some_and(|&p| p > 2) {
        parts.push("...".to_string());
    }
    parts.extend(window.iter().map(|&p| label(p)));
    if total_pages > 1 {
        if window.last().map_or(total_pages > 2, |&p| p < total_pages - 1) {
            parts.push("...".to_string());
        }
        parts.push(label(total_pages));
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdef", 3), "abc...");
        assert_eq!(truncate_text("धारा १६ जीएसटी", 4), "धारा...");
    }

    #[test]
    fn pager_marks_gaps_and_current_page() {
        assert_eq!(pager_line(1, 1, &[]), "[1]");
        assert_eq!(pager_line(2, 2, &[]), "1 [2]");
        assert_eq!(pager_line(5, 10, &[2, 3, 4, 5, 6, 7, 8]), "1 2 3 4 [5] 6 7 8 ... 10");
        assert_eq!(pager_line(10, 20, &[8, 9, 10, 11, 12]), "1 ... 8 9 [10] 11 12 ... 20");
        assert_eq!(pager_line(1, 0, &[]), "");
    }

    #[test]
    fn missing_tags_render_as_dash() {
        assert_eq!(tag_or_dash::<String>(None), "-");
        assert_eq!(tag_or_dash(Some(&"GST".to_string())), "GST");
    }
}
