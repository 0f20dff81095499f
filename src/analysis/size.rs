//! Human-readable byte sizes

const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;

/// Format a byte count as a short string with one decimal digit (`512.0B`, `1.5KB`, `10.0MB`)
///
/// Unit boundaries are powers of 1024. Megabytes are the largest unit; larger
/// values keep growing in MB rather than switching units.
pub fn format_size(byte_count: u64) -> String {
    let bytes = byte_count as f64;
    if bytes < KIB {
        format!("{bytes:.1}B")
    } else if bytes < MIB {
        format!("{:.1}KB", bytes / KIB)
    } else {
        format!("{:.1}MB", bytes / MIB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0.0B");
        assert_eq!(format_size(512), "512.0B");
        assert_eq!(format_size(1024), "1.0KB");
        assert_eq!(format_size(1536), "1.5KB");
        assert_eq!(format_size(1048576), "1.0MB");
        assert_eq!(format_size(10485760), "10.0MB");
        assert_eq!(format_size(104857600), "100.0MB");
    }

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(format_size(1023), "1023.0B");
        assert_eq!(format_size(1024), "1.0KB");
        assert!(format_size(1024 * 1024 - 1).ends_with("KB"));
        assert_eq!(format_size(1024 * 1024), "1.0MB");
    }

    #[test]
    fn test_monotonic_within_band() {
        let parse = |s: String| -> f64 {
            s.trim_end_matches(|c: char| c.is_ascii_alphabetic())
                .parse()
                .unwrap()
        };

        let mut previous = 0.0;
        for n in (1024..1024 * 1024).step_by(997) {
            let value = parse(format_size(n));
            assert!(value >= previous, "{n} formatted lower than its predecessor");
            previous = value;
        }
    }
}
