use serde::Serialize;
use std::collections::BTreeMap;

use super::encoded::{EncodedDataDetector, EncodedSignal, looks_undecodable};
use super::size::format_size;
use crate::config::{DocsiftConfig, ParallelConfig, SamplingConfig};
use crate::files::FileSet;
use crate::parallel::ExecutionStrategy;

/// Files larger than this many bytes are always sampled
pub const LARGE_FILE_THRESHOLD: usize = 10 * 1024;
/// Evenly spaced chunks taken from a long file
pub const CHUNK_COUNT: usize = 5;
pub const LINES_PER_CHUNK: usize = 20;
/// Longer lines are cut to this many characters plus [`TRUNCATION_MARKER`]
pub const MAX_LINE_CHARS: usize = 200;
/// Sample text allowed in one rendered statistics report
pub const TOTAL_SAMPLE_BUDGET: usize = 256 * 1024;

pub const TRUNCATION_MARKER: &str = "...";
pub const CHUNK_MARKER_PREFIX: &str = "// Lines ";

/// What the decision-maker learns about a sampled file without reading it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStatistics {
    pub path: String,
    pub size_bytes: u64,
    pub size_human: String,
    pub line_count: usize,
    pub is_large: bool,
    pub has_encoded_data: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoded_signal: Option<EncodedSignal>,
    pub chunk_count: usize,
}

/// Statistics paired with the bounded sample text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSample {
    pub statistics: FileStatistics,
    pub sample: String,
}

pub type FileSamples = BTreeMap<String, FileSample>;

/// Picks noteworthy files (large or encoded) and builds chunked samples of them
#[derive(Debug, Clone, Default)]
pub struct FileStatisticsSampler {
    sampling: SamplingConfig,
    parallel: ParallelConfig,
    detector: EncodedDataDetector,
}

impl FileStatisticsSampler {
    pub fn new(config: &DocsiftConfig) -> Self {
        Self {
            sampling: config.sampling.clone(),
            parallel: config.parallel.clone(),
            detector: EncodedDataDetector::new(&config.encoded),
        }
    }

    /// Sample every noteworthy file; small plain-text files are left out
    pub fn prepare(&self, files: &FileSet) -> FileSamples {
        let entries: Vec<(&String, &String)> = files.iter().collect();
        let strategy = ExecutionStrategy::from_config(&self.parallel, entries.len());

        let samples: FileSamples = strategy
            .execute(&entries, |(path, content)| self.inspect(path, content))
            .into_iter()
            .flatten()
            .map(|sample| (sample.statistics.path.clone(), sample))
            .collect();

        tracing::info!(
            "Sampled {} of {} files for filtering",
            samples.len(),
            files.len()
        );
        samples
    }

    /// Sample a single file, or `None` if it is small and plain
    pub fn inspect(&self, path: &str, content: &str) -> Option<FileSample> {
        let is_large = content.len() > self.sampling.large_file_threshold;
        let encoded_signal = if looks_undecodable(content) {
            Some(EncodedSignal::Undecodable)
        } else {
            self.detector.signal(content)
        };

        if !is_large && encoded_signal.is_none() {
            return None;
        }

        let lines: Vec<&str> = content.lines().collect();
        let (sample, chunk_count) = self.sample_lines(&lines);
        tracing::debug!(
            "Sampled {} ({}, {} chunks, encoded: {:?})",
            path,
            format_size(content.len() as u64),
            chunk_count,
            encoded_signal
        );

        Some(FileSample {
            statistics: FileStatistics {
                path: path.to_string(),
                size_bytes: content.len() as u64,
                size_human: format_size(content.len() as u64),
                line_count: lines.len(),
                is_large,
                has_encoded_data: encoded_signal.is_some(),
                encoded_signal,
                chunk_count,
            },
            sample,
        })
    }

    /// Build the sample text and report how many chunks it holds
    ///
    /// Files with at most `chunk_count * lines_per_chunk` lines become a single
    /// chunk; longer files get `chunk_count` windows spread from head to tail.
    pub fn sample_lines(&self, lines: &[&str]) -> (String, usize) {
        let ranges = chunk_ranges(
            lines.len(),
            self.sampling.chunk_count,
            self.sampling.lines_per_chunk,
        );

        let chunks: Vec<String> = ranges
            .iter()
            .map(|&(start, end)| {
                let mut chunk = format!("{CHUNK_MARKER_PREFIX}{}-{}", start + 1, end);
                for line in &lines[start..end] {
                    chunk.push('\n');
                    chunk.push_str(&truncate_line(line, self.sampling.max_line_chars));
                }
                chunk
            })
            .collect();

        (chunks.join("\n\n"), chunks.len())
    }
}

/// Half-open line ranges to sample from a file of `line_count` lines
fn chunk_ranges(line_count: usize, chunk_count: usize, lines_per_chunk: usize) -> Vec<(usize, usize)> {
    if line_count == 0 {
        return Vec::new();
    }
    if chunk_count <= 1 || line_count <= chunk_count * lines_per_chunk {
        return vec![(0, line_count.min(chunk_count.max(1) * lines_per_chunk))];
    }

    // Spacing exceeds the window here, so chunks never overlap
    let span = line_count - lines_per_chunk;
    (0..chunk_count)
        .map(|i| {
            let start = i * span / (chunk_count - 1);
            (start, start + lines_per_chunk)
        })
        .collect()
}

fn truncate_line(line: &str, max_chars: usize) -> String {
    match line.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{TRUNCATION_MARKER}", &line[..cut]),
        None => line.to_string(),
    }
}

/// Sample the noteworthy files of a FileSet with default thresholds
pub fn prepare_file_statistics(files: &FileSet) -> FileSamples {
    FileStatisticsSampler::default().prepare(files)
}
