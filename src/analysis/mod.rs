//! Statistical file analysis: size formatting, encoded-data detection and sampling
//!
//! Nothing here parses the language inside a file. Decisions come from sizes,
//! character runs and line shapes only.

pub mod encoded;
pub mod report;
pub mod sampler;
pub mod size;

pub use encoded::{EncodedDataDetector, EncodedSignal, has_likely_encoded_data};
pub use report::render_statistics_report;
pub use sampler::{FileSample, FileSamples, FileStatistics, FileStatisticsSampler, prepare_file_statistics};
pub use size::format_size;
