use clap::Args;
use serde_json::json;

use crate::cli::utils::output_json;
use crate::cli::OutputFormat;
use crate::client::CaseLawSource;

#[derive(Args, Debug)]
pub struct StatsArgs {
    #[arg(long, help = "Only print the count for this category")]
    pub category: Option<String>,
}

pub async fn handle(args: StatsArgs, source: &dyn CaseLawSource, output_format: OutputFormat) -> anyhow::Result<()> {
    if let Some(category) = args.category {
        let count = source.count_for_category(&category).await?;
        return match output_format {
            OutputFormat::Json => output_json(&json!({ "category": category, "count": count })),
            OutputFormat::Text => {
                println!("{}: {}", category, count);
                Ok(())
            }
        };
    }

    let stats = source.stats().await?;
    match output_format {
        OutputFormat::Json => output_json(&stats),
        OutputFormat::Text => {
            println!("Total: {}", stats.total);
            println!();
            println!("By category:");
            for (category, count) in &stats.by_category {
                println!("  {:<16} {:>8}", category, count);
            }
            println!();
            println!("By tax section:");
            for (section, count) in &stats.by_tax_section {
                println!("  {:<16} {:>8}", section, count);
            }
            Ok(())
        }
    }
}
