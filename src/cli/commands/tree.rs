//! Print the size-annotated directory tree of a project

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::load_project;
use crate::analysis::format_size;
use crate::cli::Output;
use crate::config::DocsiftConfig;
use crate::files::ProjectFiles;

#[derive(Args)]
pub struct TreeArgs {
    /// Project directory
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,
}

pub fn execute(args: TreeArgs, config: &DocsiftConfig, output: &Output) -> Result<()> {
    let project = ProjectFiles::new(load_project(&args.dir, config)?);
    if project.is_empty() {
        output.warning("No files found");
        return Ok(());
    }

    output.result(&project.file_tree());
    output.info(&format!(
        "{} files, {} total",
        project.len(),
        format_size(project.total_size())
    ));
    Ok(())
}
