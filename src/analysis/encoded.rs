use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::config::EncodedConfig;

/// Text shorter than this (in characters) is never flagged
pub const MIN_TEXT_LENGTH: usize = 1000;
/// Minimum contiguous run of base64 alphabet characters
pub const BASE64_RUN_LENGTH: usize = 500;
/// Minimum contiguous run of hexadecimal digits
pub const HEX_RUN_LENGTH: usize = 1000;
/// Minimum number of `\xHH`, `\uHHHH` or `\NNN` escapes across the whole text
pub const ESCAPE_SEQUENCE_COUNT: usize = 50;
/// Replacement characters needed before text counts as lossily decoded
pub const REPLACEMENT_CHAR_COUNT: usize = 2;

lazy_static! {
    static ref BASE64_RUN: Regex = Regex::new(r"[A-Za-z0-9+/=]+").unwrap();
    static ref HEX_RUN: Regex = Regex::new(r"[0-9a-fA-F]+").unwrap();
    static ref ESCAPE_SEQUENCE: Regex =
        Regex::new(r"\\(?:x[0-9a-fA-F]{2}|u[0-9a-fA-F]{4}|[0-7]{3})").unwrap();
}

/// Which heuristic flagged a text as carrying an encoded payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodedSignal {
    Base64Run,
    HexRun,
    EscapeSequences,
    /// Content was not valid text when loaded
    Undecodable,
}

impl EncodedSignal {
    pub fn describe(&self) -> &'static str {
        match self {
            EncodedSignal::Base64Run => "long base64 run",
            EncodedSignal::HexRun => "long hex run",
            EncodedSignal::EscapeSequences => "dense escape sequences",
            EncodedSignal::Undecodable => "undecodable content",
        }
    }
}

/// Structural scan for embedded binary payloads (recorded HTTP cassettes,
/// inlined blobs, generated fixtures).
///
/// The detector never looks at what language the text is written in; it only
/// measures character runs and escape density.
#[derive(Debug, Clone)]
pub struct EncodedDataDetector {
    config: EncodedConfig,
}

impl Default for EncodedDataDetector {
    fn default() -> Self {
        Self::new(&EncodedConfig::default())
    }
}

impl EncodedDataDetector {
    pub fn new(config: &EncodedConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Returns true if any heuristic fires
    pub fn detect(&self, text: &str) -> bool {
        self.signal(text).is_some()
    }

    /// Returns the first heuristic that fires, checked in order base64, hex, escapes
    pub fn signal(&self, text: &str) -> Option<EncodedSignal> {
        // Cheap byte check first: fewer bytes always means fewer characters
        if text.len() < self.config.min_text_length
            || text.chars().count() < self.config.min_text_length
        {
            return None;
        }

        if longest_run(&BASE64_RUN, text) >= self.config.base64_run_length {
            tracing::trace!("base64 run threshold reached");
            return Some(EncodedSignal::Base64Run);
        }

        if longest_run(&HEX_RUN, text) >= self.config.hex_run_length {
            tracing::trace!("hex run threshold reached");
            return Some(EncodedSignal::HexRun);
        }

        let escapes = ESCAPE_SEQUENCE
            .find_iter(text)
            .take(self.config.escape_sequence_count)
            .count();
        if escapes >= self.config.escape_sequence_count {
            tracing::trace!("escape sequence threshold reached");
            return Some(EncodedSignal::EscapeSequences);
        }

        None
    }
}

/// Length of the longest match; all run patterns are ASCII-only so bytes equal characters
fn longest_run(pattern: &Regex, text: &str) -> usize {
    pattern
        .find_iter(text)
        .map(|m| m.len())
        .max()
        .unwrap_or(0)
}

/// Check text against the default thresholds
pub fn has_likely_encoded_data(text: &str) -> bool {
    EncodedDataDetector::default().detect(text)
}

/// Content that was decoded lossily (or holds NUL bytes) is not real text
///
/// A lone U+FFFD can be legitimate text, so it takes [`REPLACEMENT_CHAR_COUNT`]
/// of them. A single NUL is enough.
pub fn looks_undecodable(text: &str) -> bool {
    text.contains('\0')
        || text
            .chars()
            .filter(|&c| c == '\u{FFFD}')
            .take(REPLACEMENT_CHAR_COUNT)
            .count()
            >= REPLACEMENT_CHAR_COUNT
}
