use anyhow::Result;
use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use std::collections::HashSet;

use super::decision::FileFilterDecision;
use crate::files::FileSet;

/// The rule that removed a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionRule {
    SpecificFile,
    Directory(String),
    Pattern(String),
}

/// Outcome of checking one path against a decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathVerdict {
    Keep,
    Exclude(ExclusionRule),
}

/// Retained files plus how many files each kind of rule removed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    pub retained: FileSet,
    pub excluded_specific_files: usize,
    pub excluded_by_directory: usize,
    pub excluded_by_pattern: usize,
}

impl FilterOutcome {
    pub fn excluded_total(&self) -> usize {
        self.excluded_specific_files + self.excluded_by_directory + self.excluded_by_pattern
    }
}

/// A decision compiled for repeated matching
///
/// Rules form a union: a file is dropped if any of them matches. The check
/// order (specific file, directory, pattern) only decides which rule gets
/// reported.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    specific_files: HashSet<String>,
    /// Single-segment directory names
    directory_names: HashSet<String>,
    /// Entries like `tests/fixtures`, matched as consecutive segments
    directory_paths: Vec<Vec<String>>,
    patterns: Vec<String>,
    globs: GlobSet,
}

impl FilterEngine {
    /// Compile a decision; fails on the first invalid glob pattern
    pub fn new(decision: &FileFilterDecision) -> Result<Self> {
        decision.validate()?;

        let mut directory_names = HashSet::new();
        let mut directory_paths = Vec::new();
        for entry in decision.exclude_directories() {
            let segments: Vec<String> = entry
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect();
            match segments.len() {
                0 => {}
                1 => {
                    directory_names.extend(segments);
                }
                _ => directory_paths.push(segments),
            }
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in decision.exclude_patterns() {
            builder.add(compile_glob(pattern)?);
        }
        let globs = builder
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build GlobSet: {}", e))?;

        tracing::debug!(
            "Compiled filter: {} files, {} directories, {} patterns",
            decision.exclude_specific_files().len(),
            directory_names.len() + directory_paths.len(),
            decision.exclude_patterns().len()
        );

        Ok(Self {
            specific_files: decision.exclude_specific_files().iter().cloned().collect(),
            directory_names,
            directory_paths,
            patterns: decision.exclude_patterns().to_vec(),
            globs,
        })
    }

    pub fn verdict(&self, path: &str) -> PathVerdict {
        if self.specific_files.contains(path) {
            return PathVerdict::Exclude(ExclusionRule::SpecificFile);
        }

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if let Some(name) = segments.iter().find(|s| self.directory_names.contains(**s)) {
            return PathVerdict::Exclude(ExclusionRule::Directory(name.to_string()));
        }
        for directory in &self.directory_paths {
            if segments
                .windows(directory.len())
                .any(|window| window.iter().zip(directory).all(|(a, b)| *a == b.as_str()))
            {
                return PathVerdict::Exclude(ExclusionRule::Directory(directory.join("/")));
            }
        }

        if let Some(&index) = self.globs.matches(path).first() {
            return PathVerdict::Exclude(ExclusionRule::Pattern(self.patterns[index].clone()));
        }

        PathVerdict::Keep
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        self.verdict(path) != PathVerdict::Keep
    }

    /// Return the retained subset; the input is left untouched
    pub fn apply(&self, files: &FileSet) -> FilterOutcome {
        let mut outcome = FilterOutcome::default();

        for (path, content) in files {
            match self.verdict(path) {
                PathVerdict::Keep => {
                    outcome.retained.insert(path.clone(), content.clone());
                }
                PathVerdict::Exclude(rule) => {
                    tracing::trace!("Excluded {} by {:?}", path, rule);
                    match rule {
                        ExclusionRule::SpecificFile => outcome.excluded_specific_files += 1,
                        ExclusionRule::Directory(_) => outcome.excluded_by_directory += 1,
                        ExclusionRule::Pattern(_) => outcome.excluded_by_pattern += 1,
                    }
                }
            }
        }

        tracing::info!(
            "Filter kept {} of {} files ({} specific, {} directory, {} pattern exclusions)",
            outcome.retained.len(),
            files.len(),
            outcome.excluded_specific_files,
            outcome.excluded_by_directory,
            outcome.excluded_by_pattern
        );
        outcome
    }
}

/// Compile one pattern; `*` stays within a segment, `**` crosses segments
pub(crate) fn compile_glob(pattern: &str) -> Result<Glob> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| anyhow::anyhow!("Invalid glob pattern '{}': {}", pattern, e))
}

/// Apply a decision to a FileSet, returning the files no rule matches
pub fn apply_filters(files: &FileSet, decision: &FileFilterDecision) -> Result<FileSet> {
    Ok(FilterEngine::new(decision)?.apply(files).retained)
}
