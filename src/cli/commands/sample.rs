//! Show statistics and bounded samples for large or encoded-looking files

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::{OutputFormat, load_project};
use crate::analysis::{FileStatisticsSampler, render_statistics_report};
use crate::cli::Output;
use crate::config::DocsiftConfig;

#[derive(Args)]
pub struct SampleArgs {
    /// Project directory
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn execute(args: SampleArgs, config: &DocsiftConfig, output: &Output) -> Result<()> {
    let files = load_project(&args.dir, config)?;
    let samples = FileStatisticsSampler::new(config).prepare(&files);

    match args.format {
        OutputFormat::Json => {
            output.result(&serde_json::to_string_pretty(&samples)?);
        }
        OutputFormat::Text => {
            if samples.is_empty() {
                output.success(&format!("No large or encoded files among {} files", files.len()));
                return Ok(());
            }
            output.header(&format!("Sampled {} of {} files", samples.len(), files.len()));
            output.result(&render_statistics_report(
                &samples,
                config.sampling.total_sample_budget,
            ));
        }
    }
    Ok(())
}
