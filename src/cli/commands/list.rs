use clap::Args;

use crate::cli::utils::{output_json, pager_line, print_case_rows};
use crate::cli::OutputFormat;
use crate::client::{max_visible_for_width, CaseLawSource, CaseListQuery, ListView};
use crate::filter::ALL_SENTINEL;

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(long, help = "Search text (takes precedence over category and tax section)")]
    pub search: Option<String>,

    #[arg(long, help = "Category tag, e.g. GST (\"all\" for no filter)")]
    pub category: Option<String>,

    #[arg(long, help = "Tax section tag, e.g. SECTION_16_GST (\"all\" for no filter)")]
    pub tax_section: Option<String>,

    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..), help = "Page number")]
    pub page: u32,

    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..), help = "Page size")]
    pub limit: u32,

    #[arg(long, default_value_t = 1024, help = "Viewport width used to size the page window")]
    pub width: u32,
}

impl ListArgs {
    /// Apply the flags in the same order the list screen applies its controls.
    /// `--category all` leaves an explicit `--tax-section` in place.
    pub fn to_query(&self) -> CaseListQuery {
        let mut query = CaseListQuery::new(self.limit);
        if let Some(section) = &self.tax_section {
            query = query.with_tax_section(section);
        }
        let category = self.category.as_deref().map(str::trim);
        if let Some(category) = category.filter(|c| !c.is_empty() && *c != ALL_SENTINEL) {
            query = query.with_category(category);
        }
        if let Some(search) = &self.search {
            query = query.with_search(search.clone());
        }
        query.at_page(self.page)
    }
}

pub async fn handle(args: ListArgs, source: &dyn CaseLawSource, output_format: OutputFormat) -> anyhow::Result<()> {
    let view = args.to_query().fetch(source).await?;
    match output_format {
        OutputFormat::Json => output_json(&view.page),
        OutputFormat::Text => {
            print_view(&view, max_visible_for_width(args.width));
            Ok(())
        }
    }
}

pub fn print_view(view: &ListView, max_visible: u32) {
    if view.items().is_empty() {
        println!("No case laws found");
    } else {
        print_case_rows(view.items());
    }
    println!();
    println!("{}", view.summary());

    let total_pages = view.total_pages();
    if total_pages > 1 {
        let window = view.visible_pages(max_visible);
        println!("Pages: {}", pager_line(view.query.page(), total_pages, &window));
    }
}
