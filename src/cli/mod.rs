pub mod commands;
pub mod utils;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::client::{CaseLawSource, Degraded, HttpCaseLawClient};

#[derive(Parser)]
#[command(name = "caselaw")]
#[command(about = "Caselaw CLI - Command-line client for the case law lookup API")]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "CASELAW_API_URL",
        default_value = "http://localhost:3001",
        help = "Base URL of the case law API server"
    )]
    pub server: String,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[arg(
        long,
        global = true,
        help = "JSON file of case laws used for show/search when the server fails"
    )]
    pub fallback_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List case laws, optionally filtered by search text, category or tax section")]
    List(commands::list::ListArgs),

    #[command(about = "Show one case law and its detail by tid")]
    Show(commands::show::ShowArgs),

    #[command(about = "Search case law titles and headlines")]
    Search(commands::search::SearchArgs),

    #[command(about = "Record counts by category and tax section")]
    Stats(commands::stats::StatsArgs),

    #[command(about = "Check server liveness")]
    Health,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// HTTP client, wrapped in degraded mode when a fallback file is given
pub fn build_source(cli: &Cli) -> anyhow::Result<Box<dyn CaseLawSource>> {
    let client = HttpCaseLawClient::new(&cli.server)?;
    match &cli.fallback_file {
        Some(path) => {
            let degraded = Degraded::from_file(client, path)?;
            tracing::info!("Loaded {} fallback records from {}", degraded.records().len(), path.display());
            Ok(Box::new(degraded))
        }
        None => Ok(Box::new(client)),
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let source = build_source(&cli)?;
    let source = source.as_ref();

    match cli.command {
        Commands::List(args) => commands::list::handle(args, source, output_format).await,
        Commands::Show(args) => commands::show::handle(args, source, output_format).await,
        Commands::Search(args) => commands::search::handle(args, source, output_format).await,
        Commands::Stats(args) => commands::stats::handle(args, source, output_format).await,
        Commands::Health => commands::health::handle(source, output_format).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["caselaw", "list", "--category", "GST", "--json", "--server", "http://api:8080"]).unwrap();
        assert_eq!(OutputFormat::from_cli(&cli), OutputFormat::Json);
        assert_eq!(cli.server, "http://api:8080");
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.category.as_deref(), Some("GST"));
                assert_eq!((args.page, args.limit), (1, 20));
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn show_requires_numeric_tid() {
        assert!(Cli::try_parse_from(["caselaw", "show", "abc"]).is_err());
        let cli = Cli::try_parse_from(["caselaw", "show", "1987394"]).unwrap();
        assert!(matches!(cli.command, Commands::Show(ref a) if a.tid == 1987394));
    }
}
