//! Query builder: turns raw request inputs into a [`QueryFilter`].
//!
//! Inputs are all optional strings. An empty string is treated the same as a
//! missing one. `"all"` is a sentinel for the categorical fields only and means
//! "no constraint"; as a search term it is searched for like any other text.

use crate::types::{CaseLaw, Category, TaxSection};

use super::types::{QueryFilter, SearchFields, TextMatch};

pub const ALL_SENTINEL: &str = "all";

pub fn build(
    search: Option<&str>,
    category: Option<&str>,
    tax_section: Option<&str>,
    fields: SearchFields,
) -> QueryFilter {
    let text = search
        .filter(|s| !s.is_empty())
        .map(|needle| TextMatch { needle: needle.to_string(), fields });

    let filter = QueryFilter {
        text,
        category: categorical(category).and_then(Category::new),
        tax_section: categorical(tax_section).and_then(TaxSection::new),
    };

    tracing::debug!("Built filter: {:?}", filter);
    filter
}

fn categorical(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != ALL_SENTINEL)
}

impl QueryFilter {
    pub fn is_unconstrained(&self) -> bool {
        self.text.is_none() && self.category.is_none() && self.tax_section.is_none()
    }

    /// In-process evaluation of the predicate, equivalent to the SQL rendering
    pub fn matches(&self, record: &CaseLaw) -> bool {
        if let Some(category) = &self.category {
            if record.category.as_ref() != Some(category) {
                return false;
            }
        }
        if let Some(section) = &self.tax_section {
            if record.tax_section.as_ref() != Some(section) {
                return false;
            }
        }
        if let Some(text) = &self.text {
            let needle = text.needle.to_lowercase();
            let hit = |value: Option<&str>| value.is_some_and(|v| v.to_lowercase().contains(&needle));
            if !hit(text.fields.primary.value(record)) && !hit(text.fields.secondary.value(record)) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TextField;
    use chrono::{TimeZone, Utc};

    fn record(title: &str, headline: Option<&str>, category: Option<&str>, section: Option<&str>) -> CaseLaw {
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        CaseLaw {
            id: format!("id-{title}"),
            tid: 1,
            authorid: None,
            bench: None,
            catids: None,
            docsize: None,
            docsource: "High Court".into(),
            doctype: None,
            fragment: None,
            headline: headline.map(str::to_string),
            description: None,
            numcitedby: 0,
            numcites: 0,
            publishdate: "2024-01-15".into(),
            title: title.into(),
            category: category.and_then(Category::new),
            tax_section: section.and_then(TaxSection::new),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn no_inputs_yield_unconstrained_filter() {
        let filter = build(None, None, None, SearchFields::LISTING);
        assert!(filter.is_unconstrained());
        assert_eq!(filter, QueryFilter::default());

        let filter = build(Some(""), Some(""), Some(""), SearchFields::LISTING);
        assert!(filter.is_unconstrained());
    }

    #[test]
    fn all_sentinel_is_the_same_as_absent() {
        let sentinel = build(None, Some("all"), Some("all"), SearchFields::LISTING);
        let absent = build(None, None, None, SearchFields::LISTING);
        assert_eq!(sentinel, absent);
    }

    #[test]
    fn category_produces_exact_clause() {
        let filter = build(None, Some("GST"), None, SearchFields::LISTING);
        assert_eq!(filter.category, Category::new("GST"));
        assert!(filter.tax_section.is_none());

        assert!(filter.matches(&record("a", None, Some("GST"), None)));
        assert!(!filter.matches(&record("a", None, Some("INCOME_TAX"), None)));
        assert!(!filter.matches(&record("a", None, None, None)));
        // exact, not case-folded
        assert!(!filter.matches(&record("a", None, Some("gst"), None)));
    }

    #[test]
    fn all_is_a_real_search_term() {
        let filter = build(Some("all"), None, None, SearchFields::SEARCH);
        assert_eq!(filter.text.as_ref().map(|t| t.needle.as_str()), Some("all"));
        assert!(filter.matches(&record("Small Traders", None, None, None)));
        assert!(!filter.matches(&record("Nothing here", None, None, None)));
    }

    #[test]
    fn search_is_case_insensitive_over_the_field_pair() {
        let filter = build(Some("input TAX"), None, None, SearchFields::SEARCH);
        assert_eq!(filter.text.as_ref().unwrap().fields.secondary, TextField::Headline);

        assert!(filter.matches(&record("Ruling on Input Tax Credit", None, None, None)));
        assert!(filter.matches(&record("CIT vs. Sharma", Some("eligibility of INPUT tax credit"), None, None)));
        assert!(!filter.matches(&record("CIT vs. Sharma", Some("penalty provisions"), None, None)));
    }

    #[test]
    fn listing_searches_description_not_headline() {
        let filter = build(Some("penalty"), None, None, SearchFields::LISTING);
        assert!(!filter.matches(&record("CIT vs. Sharma", Some("penalty provisions"), None, None)));

        let mut with_description = record("CIT vs. Sharma", None, None, None);
        with_description.description = Some("Penalty provisions".into());
        assert!(filter.matches(&with_description));
    }

    #[test]
    fn clauses_are_combined_with_and() {
        let filter = build(Some("tax"), Some("GST"), Some("SECTION_16_GST"), SearchFields::SEARCH);
        assert!(filter.matches(&record("Tax case", None, Some("GST"), Some("SECTION_16_GST"))));
        assert!(!filter.matches(&record("Tax case", None, Some("GST"), Some("SECTION_7_GST"))));
        assert!(!filter.matches(&record("Other case", None, Some("GST"), Some("SECTION_16_GST"))));
    }
}
