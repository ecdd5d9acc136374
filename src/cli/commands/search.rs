use clap::Args;

use crate::cli::commands::list::print_view;
use crate::cli::utils::output_json;
use crate::cli::OutputFormat;
use crate::client::{max_visible_for_width, CaseLawSource, CaseListQuery};

#[derive(Args, Debug)]
pub struct SearchArgs {
    #[arg(help = "Text to look for in titles and headlines")]
    pub query: String,

    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..), help = "Page number")]
    pub page: u32,

    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..), help = "Page size")]
    pub limit: u32,

    #[arg(long, default_value_t = 1024, help = "Viewport width used to size the page window")]
    pub width: u32,
}

pub async fn handle(args: SearchArgs, source: &dyn CaseLawSource, output_format: OutputFormat) -> anyhow::Result<()> {
    let query = CaseListQuery::new(args.limit).with_search(args.query.clone()).at_page(args.page);
    let view = query.fetch(source).await?;

    match output_format {
        OutputFormat::Json => output_json(&view.page),
        OutputFormat::Text => {
            if !args.query.trim().is_empty() {
                println!("Results for \"{}\"", args.query);
            }
            print_view(&view, max_visible_for_width(args.width));
            Ok(())
        }
    }
}
