//! Configuration management for docsift
//!
//! Thresholds live in code as named constants; configuration only overrides
//! them. Layers are merged with figment, lowest priority first:
//! embedded defaults, user config, repository config (or an explicit
//! `--config` file), then `DOCSIFT_` environment variables.

use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::analysis::{encoded, sampler};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

const ENV_PREFIX: &str = "DOCSIFT_";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsiftConfig {
    pub encoded: EncodedConfig,
    pub sampling: SamplingConfig,
    pub filtering: FilteringConfig,
    pub parallel: ParallelConfig,
    pub loader: LoaderConfig,
}

/// Encoded-data heuristic thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodedConfig {
    pub min_text_length: usize,
    pub base64_run_length: usize,
    pub hex_run_length: usize,
    pub escape_sequence_count: usize,
}

impl Default for EncodedConfig {
    fn default() -> Self {
        Self {
            min_text_length: encoded::MIN_TEXT_LENGTH,
            base64_run_length: encoded::BASE64_RUN_LENGTH,
            hex_run_length: encoded::HEX_RUN_LENGTH,
            escape_sequence_count: encoded::ESCAPE_SEQUENCE_COUNT,
        }
    }
}

/// File selection and sampling limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Files strictly larger than this many bytes are sampled
    pub large_file_threshold: usize,
    pub chunk_count: usize,
    pub lines_per_chunk: usize,
    /// Longer lines are cut and suffixed with `...`
    pub max_line_chars: usize,
    /// Bytes of sample text allowed in a rendered statistics report
    pub total_sample_budget: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            large_file_threshold: sampler::LARGE_FILE_THRESHOLD,
            chunk_count: sampler::CHUNK_COUNT,
            lines_per_chunk: sampler::LINES_PER_CHUNK,
            max_line_chars: sampler::MAX_LINE_CHARS,
            total_sample_budget: sampler::TOTAL_SAMPLE_BUDGET,
        }
    }
}

/// Filter task options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilteringConfig {
    /// When false the filter task returns its input untouched
    pub enabled: bool,
    /// Directory names excluded on top of every decision
    pub default_exclude_directories: Vec<String>,
    /// Total content size (bytes) the decision should bring the project under
    pub max_total_size: u64,
}

impl Default for FilteringConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_exclude_directories: Vec::new(),
            max_total_size: 100_000_000,
        }
    }
}

/// How per-file sampling work is scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ParallelMode {
    /// Parallel only once the candidate count reaches `min_files_for_parallel`
    #[default]
    Auto,
    Parallel,
    Sequential,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    pub mode: ParallelMode,
    /// 0 = no explicit limit
    pub max_threads: usize,
    /// Share of CPU cores to use (1-100)
    pub thread_percentage: u8,
    pub min_files_for_parallel: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            mode: ParallelMode::Auto,
            max_threads: 0,
            thread_percentage: 75,
            min_files_for_parallel: 32,
        }
    }
}

/// Options for reading a project snapshot from disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub respect_gitignore: bool,
    pub include_hidden: bool,
    /// Files above this many bytes are skipped entirely
    pub max_file_size: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            respect_gitignore: true,
            include_hidden: true,
            max_file_size: 100 * 1024 * 1024,
        }
    }
}

impl DocsiftConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    /// Load configuration; a custom file replaces the user and repository layers
    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        let config: DocsiftConfig = Self::figment(custom_config)?
            .extract()
            .context("Failed to parse docsift configuration")?;
        config.validate()?;

        tracing::debug!("Configuration loaded: {:?}", config);
        Ok(config)
    }

    /// Build the layered figment without extracting it
    pub fn figment(custom_config: Option<&str>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        if let Some(custom_path) = custom_config {
            let path = Path::new(custom_path);
            if !path.is_file() {
                anyhow::bail!("Config file not found: {}", custom_path);
            }
            figment = merge_by_extension(figment, path);
        } else {
            let user_base = Self::user_config_base();
            figment = figment
                .merge(Toml::file(format!("{user_base}.toml")))
                .merge(Json::file(format!("{user_base}.json")))
                .merge(Yaml::file(format!("{user_base}.yaml")))
                .merge(Yaml::file(format!("{user_base}.yml")))
                .merge(Toml::file("docsift.toml"))
                .merge(Json::file("docsift.json"))
                .merge(Yaml::file("docsift.yaml"))
                .merge(Yaml::file("docsift.yml"));
        }

        // Environment variables always have highest priority
        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Reject values the algorithms cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.sampling.chunk_count == 0 {
            anyhow::bail!("sampling.chunk_count must be at least 1");
        }
        if self.sampling.lines_per_chunk == 0 {
            anyhow::bail!("sampling.lines_per_chunk must be at least 1");
        }
        if self.sampling.max_line_chars == 0 {
            anyhow::bail!("sampling.max_line_chars must be at least 1");
        }
        if !(1..=100).contains(&self.parallel.thread_percentage) {
            anyhow::bail!(
                "parallel.thread_percentage must be between 1 and 100, got {}",
                self.parallel.thread_percentage
            );
        }
        Ok(())
    }

    fn user_config_base() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{home}/.config/docsift/config"),
            Err(_) => "~/.config/docsift/config".to_string(),
        }
    }
}

fn merge_by_extension(figment: Figment, path: &Path) -> Figment {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => figment.merge(Json::file(path)),
        Some("yaml") | Some("yml") => figment.merge(Yaml::file(path)),
        _ => figment.merge(Toml::file(path)),
    }
}

#[cfg(test)]
mod tests;
