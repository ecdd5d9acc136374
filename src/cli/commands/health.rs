use crate::cli::utils::{output_json, output_success};
use crate::cli::OutputFormat;
use crate::client::CaseLawSource;

pub async fn handle(source: &dyn CaseLawSource, output_format: OutputFormat) -> anyhow::Result<()> {
    let health = source.health().await?;
    match output_format {
        OutputFormat::Json => output_json(&health),
        OutputFormat::Text => output_success(output_format, &format!("{}: {}", health.status, health.message)),
    }
}
