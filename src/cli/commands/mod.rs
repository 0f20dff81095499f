//! Command implementations for the docsift CLI
//!
//! Every command loads a directory snapshot first, then works on the FileSet.

pub mod filter;
pub mod sample;
pub mod tree;

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::DocsiftConfig;
use crate::files::{FileSet, loader::load_directory};

/// Output format shared by the commands that produce structured data
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON for machine processing
    Json,
}

pub(crate) fn load_project(dir: &Path, config: &DocsiftConfig) -> Result<FileSet> {
    load_directory(dir, &config.loader)
        .with_context(|| format!("Failed to load project files from {}", dir.display()))
}
