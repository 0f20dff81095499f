use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Exclusion rules produced by the external decision step
///
/// The value is immutable: build it with [`FileFilterDecision::new`] or load
/// it from a file, then hand it to the filter engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileFilterDecision {
    /// Free text from the decision-maker; never used for matching
    #[serde(default)]
    reasoning: String,
    /// Glob patterns matched against the full relative path
    #[serde(default)]
    exclude_patterns: Vec<String>,
    /// Directory names; any matching path segment excludes the file
    #[serde(default)]
    exclude_directories: Vec<String>,
    /// Exact relative paths
    #[serde(default)]
    exclude_specific_files: Vec<String>,
}

impl FileFilterDecision {
    pub fn new<S: Into<String>>(
        reasoning: impl Into<String>,
        exclude_patterns: impl IntoIterator<Item = S>,
        exclude_directories: impl IntoIterator<Item = S>,
        exclude_specific_files: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            reasoning: reasoning.into(),
            exclude_patterns: exclude_patterns.into_iter().map(Into::into).collect(),
            exclude_directories: exclude_directories.into_iter().map(Into::into).collect(),
            exclude_specific_files: exclude_specific_files.into_iter().map(Into::into).collect(),
        }
    }

    /// A decision that keeps everything
    pub fn keep_all(reasoning: impl Into<String>) -> Self {
        Self {
            reasoning: reasoning.into(),
            ..Self::default()
        }
    }

    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }

    pub fn exclude_patterns(&self) -> &[String] {
        &self.exclude_patterns
    }

    pub fn exclude_directories(&self) -> &[String] {
        &self.exclude_directories
    }

    pub fn exclude_specific_files(&self) -> &[String] {
        &self.exclude_specific_files
    }

    pub fn is_empty(&self) -> bool {
        self.exclude_patterns.is_empty()
            && self.exclude_directories.is_empty()
            && self.exclude_specific_files.is_empty()
    }

    /// A copy with extra directory names appended (duplicates skipped)
    pub fn with_extra_directories(&self, directories: &[String]) -> Self {
        let mut merged = self.clone();
        for directory in directories {
            if !merged.exclude_directories.contains(directory) {
                merged.exclude_directories.push(directory.clone());
            }
        }
        merged
    }

    /// Check that every rule is usable: no blank entries, every glob compiles
    pub fn validate(&self) -> Result<()> {
        for (field, entries) in [
            ("exclude_patterns", &self.exclude_patterns),
            ("exclude_directories", &self.exclude_directories),
            ("exclude_specific_files", &self.exclude_specific_files),
        ] {
            if entries.iter().any(|entry| entry.trim_matches('/').trim().is_empty()) {
                anyhow::bail!("{} contains an empty entry", field);
            }
        }

        for pattern in &self.exclude_patterns {
            super::engine::compile_glob(pattern)?;
        }
        Ok(())
    }

    /// Load and validate a decision from a JSON, YAML or TOML file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read decision file: {}", path.display()))?;

        let decision: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => serde_yml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML decision: {}", path.display()))?,
            Some("toml") => toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML decision: {}", path.display()))?,
            _ => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON decision: {}", path.display()))?,
        };

        decision.validate()?;
        Ok(decision)
    }
}
