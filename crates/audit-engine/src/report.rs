//! Report snapshot assembly

use chrono::{SecondsFormat, Utc};
use shared_types::{AuditMetrics, Issue, RawSamples, Report};

/// Default file name for an exported JSON snapshot.
pub const REPORT_FILE_NAME: &str = "dotali-performance-report.json";

/// Inputs are truncated to this many characters in the snapshot.
const SAMPLE_LIMIT: usize = 4_000;

/// First [`SAMPLE_LIMIT`] characters of the input, for the `raw` section.
pub fn truncate_sample(text: &str) -> String {
    text.chars().take(SAMPLE_LIMIT).collect()
}

pub(crate) fn build(html: &str, css: &str, meta: AuditMetrics, results: Vec<Issue>) -> Report {
    Report {
        meta,
        results,
        raw: RawSamples {
            html_sample: truncate_sample(html),
            css_sample: truncate_sample(css),
        },
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_truncated_to_limit() {
        let long = "x".repeat(5_000);
        assert_eq!(truncate_sample(&long).len(), 4_000);
        assert_eq!(truncate_sample("short"), "short");
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let long = "é".repeat(5_000);
        let sample = truncate_sample(&long);
        assert_eq!(sample.chars().count(), 4_000);
    }

    #[test]
    fn test_snapshot_carries_inputs_and_timestamp() {
        let report = build("<p>hi</p>", ".a{}", AuditMetrics::default(), Vec::new());
        assert_eq!(report.raw.html_sample, "<p>hi</p>");
        assert_eq!(report.raw.css_sample, ".a{}");
        // RFC 3339 with Z suffix
        assert!(report.timestamp.ends_with('Z'));
        assert!(report.timestamp.contains('T'));
    }
}
