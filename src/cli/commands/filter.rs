//! Apply an exclusion decision file to a project and list what remains

use anyhow::Result;
use clap::Args;
use serde_json::json;
use std::path::PathBuf;

use super::{OutputFormat, load_project};
use crate::cli::Output;
use crate::config::DocsiftConfig;
use crate::filter::FileFilterDecision;
use crate::pipeline::{StaticDecider, filter_project_files};

#[derive(Args)]
pub struct FilterArgs {
    /// Project directory
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Decision file (JSON, YAML or TOML)
    #[arg(long, short = 'd', value_name = "FILE")]
    pub decision: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn execute(args: FilterArgs, config: &DocsiftConfig, output: &Output) -> Result<()> {
    let decision = FileFilterDecision::from_path(&args.decision)?;
    let reasoning = decision.reasoning().to_string();

    let files = load_project(&args.dir, config)?;
    let retained = filter_project_files(&files, &StaticDecider::new(decision), config)?;
    let excluded: Vec<&String> = files.keys().filter(|path| !retained.contains_key(*path)).collect();

    match args.format {
        OutputFormat::Json => {
            let report = json!({
                "reasoning": reasoning,
                "retained": retained.keys().collect::<Vec<_>>(),
                "excluded": excluded,
            });
            output.result(&serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            for path in retained.keys() {
                output.result(path);
            }
            output.header("Summary");
            if !reasoning.is_empty() {
                output.key_value("Reasoning", &reasoning);
            }
            output.key_value("Retained", &retained.len().to_string());
            output.key_value("Excluded", &excluded.len().to_string());
            for path in &excluded {
                output.list_item(path);
            }
        }
    }
    Ok(())
}
