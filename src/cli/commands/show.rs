use clap::Args;

use crate::cli::utils::{output_json, tag_or_dash, truncate_text};
use crate::cli::OutputFormat;
use crate::client::CaseLawSource;
use crate::types::CaseLawWithDetail;

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[arg(help = "Case tid")]
    pub tid: i32,

    #[arg(long, help = "Print the full judgment text instead of an excerpt")]
    pub full: bool,
}

const DOC_EXCERPT_CHARS: usize = 600;

pub async fn handle(args: ShowArgs, source: &dyn CaseLawSource, output_format: OutputFormat) -> anyhow::Result<()> {
    let record = source.get(args.tid).await?;
    match output_format {
        OutputFormat::Json => output_json(&record),
        OutputFormat::Text => {
            print_record(&record, args.full);
            Ok(())
        }
    }
}

fn print_record(record: &CaseLawWithDetail, full: bool) {
    let case = &record.case_law;
    println!("{}", case.title);
    println!("  tid:         {}", case.tid);
    println!("  source:      {}", case.docsource);
    println!("  published:   {}", case.publishdate);
    println!("  category:    {}", tag_or_dash(case.category.as_ref()));
    println!("  tax section: {}", tag_or_dash(case.tax_section.as_ref()));
    println!("  cited by:    {}   cites: {}", case.numcitedby, case.numcites);
    if let Some(bench) = case.bench.as_deref().filter(|b| !b.is_empty()) {
        println!("  bench:       {}", bench);
    }
    if let Some(headline) = case.headline.as_deref().filter(|h| !h.is_empty()) {
        println!();
        println!("{}", headline);
    }

    println!();
    match &record.case_detail {
        Some(detail) if full => println!("{}", detail.doc),
        Some(detail) => println!("{}", truncate_text(&detail.doc, DOC_EXCERPT_CHARS)),
        None => println!("(no judgment text available)"),
    }
}
