//! Exclusion filtering driven by a decision record
//!
//! A [`FileFilterDecision`] names exact files, directory names and glob
//! patterns to drop. [`FilterEngine`] compiles it once with globset and
//! applies it to a FileSet without mutating the input.

pub mod decision;
pub mod engine;

pub use decision::FileFilterDecision;
pub use engine::{ExclusionRule, FilterEngine, FilterOutcome, PathVerdict, apply_filters};

#[cfg(test)]
mod tests;
