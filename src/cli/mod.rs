//! Command-line interface for docsift
//!
//! Thin shell over the library: load a directory into a FileSet, then render
//! its tree, sample it, or filter it with a decision file.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::{DocsiftConfig, ParallelMode};

pub mod commands;
pub mod output;

pub use output::Output;

#[derive(Parser)]
#[command(
    name = "docsift",
    version = env!("CARGO_PKG_VERSION"),
    about = "Prepare project files for documentation pipelines",
    long_about = "docsift renders size-annotated project trees, samples large or \
                  encoded-looking files for a filtering decision, and applies \
                  exclusion decisions to a project snapshot."
)]
pub struct Cli {
    /// Use custom configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<String>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Processing mode: auto (smart default), parallel, or sequential
    #[arg(long, value_enum, global = true)]
    pub mode: Option<ParallelMode>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the size-annotated directory tree
    Tree(commands::tree::TreeArgs),
    /// Show statistics and samples for large or encoded files
    Sample(commands::sample::SampleArgs),
    /// Apply an exclusion decision file and list the retained files
    Filter(commands::filter::FilterArgs),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let mut config = DocsiftConfig::load_with_custom_config(self.config.as_deref())?;
        if let Some(mode) = self.mode {
            config.parallel.mode = mode;
        }

        let output = Output::new(self.quiet);
        match self.command {
            Commands::Tree(args) => commands::tree::execute(args, &config, &output),
            Commands::Sample(args) => commands::sample::execute(args, &config, &output),
            Commands::Filter(args) => commands::filter::execute(args, &config, &output),
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // Keep the walker and glob crates quiet below trace level
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => tracing_subscriber::EnvFilter::new("warn"),
        1 => tracing_subscriber::EnvFilter::new("info,ignore=warn,globset=warn"),
        2 => tracing_subscriber::EnvFilter::new("debug,ignore=warn,globset=warn"),
        _ => tracing_subscriber::EnvFilter::new("trace"),
    });

    // Logs go to stderr so stdout stays machine-readable
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
