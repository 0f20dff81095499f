//! # docsift - project snapshot preparation for documentation pipelines
//!
//! Takes a flat snapshot of a project (relative path to text content) and
//! prepares it for automated summarization:
//!
//! - **Tree**: a directory tree annotated with per-file and cumulative
//!   per-directory byte sizes
//! - **Sampling**: bounded, chunked excerpts of large or encoded-looking files
//!   for a filtering decision-maker
//! - **Filtering**: applying that decision (exact paths, directory names,
//!   glob patterns) to produce the retained file set
//!
//! ## Quick Start
//!
//! ```rust
//! use docsift::{FileFilterDecision, FileSet, apply_filters, build_tree};
//!
//! let mut files = FileSet::new();
//! files.insert("src/main.py".into(), "x".repeat(100));
//! files.insert("vendor/lib.js".into(), "y".repeat(50));
//!
//! assert!(build_tree(&files).contains("src/ (100 bytes)"));
//!
//! let decision = FileFilterDecision::new("drop vendored code", Vec::<&str>::new(), ["vendor"], Vec::<&str>::new());
//! let kept = apply_filters(&files, &decision).unwrap();
//! assert_eq!(kept.len(), 1);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod files;
pub mod filter;
pub mod parallel;
pub mod pipeline;
pub mod tree;

pub use analysis::{
    EncodedDataDetector, FileSample, FileSamples, FileStatistics, FileStatisticsSampler,
    format_size, has_likely_encoded_data, prepare_file_statistics,
};
pub use config::DocsiftConfig;
pub use files::{FileSet, ProjectFiles};
pub use filter::{FileFilterDecision, FilterEngine, apply_filters};
pub use pipeline::{FileFilterDecider, FilterContext, StaticDecider, filter_project_files};
pub use tree::{FileTree, TreeNode, build_tree};

/// Result type alias for docsift operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
