use std::fmt::Write;

use super::sampler::{FileSample, FileSamples};

const OMITTED_NOTE: &str = "[sample omitted: report budget exhausted]";

/// Render samples as prompt-ready text for the filter decision step
///
/// Files are listed largest first. Sample bodies are added until the next one
/// would overrun `budget` bytes; from then on every file gets its statistics
/// header only, so the decision-maker still knows it exists.
pub fn render_statistics_report(samples: &FileSamples, budget: usize) -> String {
    let mut ordered: Vec<&FileSample> = samples.values().collect();
    ordered.sort_by(|a, b| {
        b.statistics
            .size_bytes
            .cmp(&a.statistics.size_bytes)
            .then_with(|| a.statistics.path.cmp(&b.statistics.path))
    });

    let mut remaining = budget;
    let mut omitted = 0usize;
    let mut sections = Vec::with_capacity(ordered.len());

    for FileSample { statistics, sample } in ordered {
        let mut section = String::new();
        let encoded = match statistics.encoded_signal {
            Some(signal) => format!("yes ({})", signal.describe()),
            None => "no".to_string(),
        };
        // Writing to a String cannot fail
        let _ = writeln!(section, "=== {} ===", statistics.path);
        let _ = writeln!(
            section,
            "size: {} ({} bytes), lines: {}, encoded data: {}",
            statistics.size_human, statistics.size_bytes, statistics.line_count, encoded
        );

        if omitted == 0 && sample.len() <= remaining {
            remaining -= sample.len();
            section.push_str(sample);
        } else {
            omitted += 1;
            section.push_str(OMITTED_NOTE);
        }
        sections.push(section);
    }

    if omitted > 0 {
        tracing::warn!(
            "Report budget of {} bytes exhausted; {} samples omitted",
            budget,
            omitted
        );
    }

    sections.join("\n\n")
}
