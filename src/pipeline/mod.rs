//! Filter pipeline: context preparation, the decision seam, and the filter task
//!
//! ```text
//! FileSet ──┬── FileTree ──────────┐
//!           │                      ├── FilterContext ── decider ── FileFilterDecision
//!           └── StatisticsSampler ─┘                                      │
//! FileSet ─────────────────────────────────── FilterEngine ◀──────────────┘
//! ```
//!
//! Tree rendering and sampling are independent and run concurrently. The
//! decider is the only external collaborator; everything else is pure.

pub mod decider;

pub use decider::{FileFilterDecider, StaticDecider};

use anyhow::{Context, Result};

use crate::analysis::{FileSamples, FileStatisticsSampler, format_size, render_statistics_report};
use crate::config::DocsiftConfig;
use crate::files::FileSet;
use crate::filter::FilterEngine;
use crate::tree::build_tree;

/// Everything the decision-maker sees about a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterContext {
    pub file_tree: String,
    pub samples: FileSamples,
    pub total_files: usize,
    pub total_size: u64,
    /// Byte budget for rendering sample text into a report
    pub sample_budget: usize,
    /// Total size the retained files should fit in
    pub max_total_size: u64,
}

impl FilterContext {
    /// Build the tree and samples for `files`, in parallel
    pub fn prepare(files: &FileSet, config: &DocsiftConfig) -> Self {
        let sampler = FileStatisticsSampler::new(config);
        let (file_tree, samples) = rayon::join(|| build_tree(files), || sampler.prepare(files));

        Self {
            file_tree,
            samples,
            total_files: files.len(),
            total_size: total_size(files),
            sample_budget: config.sampling.total_sample_budget,
            max_total_size: config.filtering.max_total_size,
        }
    }

    /// Sample report bounded by the configured budget
    pub fn statistics_report(&self) -> String {
        render_statistics_report(&self.samples, self.sample_budget)
    }
}

/// Ask the decider which files to drop and apply its answer
///
/// With filtering disabled the input comes back unchanged and the decider is
/// never called. Configured default directory excludes are merged into every
/// decision.
pub fn filter_project_files(
    files: &FileSet,
    decider: &dyn FileFilterDecider,
    config: &DocsiftConfig,
) -> Result<FileSet> {
    if !config.filtering.enabled {
        tracing::info!("File filtering disabled, keeping all {} files", files.len());
        return Ok(files.clone());
    }
    if files.is_empty() {
        return Ok(FileSet::new());
    }

    let context = FilterContext::prepare(files, config);
    tracing::info!(
        "Prepared filter context: {} files ({}), {} sampled",
        context.total_files,
        format_size(context.total_size),
        context.samples.len()
    );

    let decision = decider
        .decide(&context)
        .with_context(|| format!("{} failed to produce a filter decision", decider.name()))?
        .with_extra_directories(&config.filtering.default_exclude_directories);
    tracing::debug!("Filter decision reasoning: {}", decision.reasoning());

    let outcome = FilterEngine::new(&decision)?.apply(files);
    let retained_size = total_size(&outcome.retained);
    tracing::info!(
        "Filtered {} -> {} files ({} -> {})",
        files.len(),
        outcome.retained.len(),
        format_size(context.total_size),
        format_size(retained_size)
    );
    if let Some(excess) = size_target_excess(retained_size, context.max_total_size) {
        tracing::warn!(
            "Retained files ({}) still exceed the {} size target by {}",
            format_size(retained_size),
            format_size(context.max_total_size),
            format_size(excess)
        );
    }

    Ok(outcome.retained)
}

fn total_size(files: &FileSet) -> u64 {
    files.values().map(|content| content.len() as u64).sum()
}

/// Bytes over the target, if any
fn size_target_excess(size: u64, max_total_size: u64) -> Option<u64> {
    size.checked_sub(max_total_size).filter(|&excess| excess > 0)
}
