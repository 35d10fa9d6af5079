//! Console reporter for audit reports
//!
//! Human-readable output: score, badge lines, then the issue list with
//! uppercased type labels and indented highlight excerpts.

use anyhow::Result;
use std::fmt::Write;

use shared_types::{Issue, Report};

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Format an audit report for console output
    pub fn format(report: &Report) -> Result<String> {
        let mut output = String::new();

        writeln!(output)?;
        writeln!(output, "╔══════════════════════════════════════════════════════════════╗")?;
        writeln!(output, "║                  PERFORMANCE AUDIT REPORT                     ║")?;
        writeln!(output, "╚══════════════════════════════════════════════════════════════╝")?;
        writeln!(output)?;

        writeln!(output, "Score:      {}", report.meta.score)?;
        writeln!(output, "CLS:        {}", report.meta.cls)?;
        writeln!(output, "LCP:        {}", report.meta.lcp)?;
        writeln!(output, "CSS weight: {}", report.meta.css_weight)?;
        if let Some(count) = report.meta.important_count {
            writeln!(output, "!important: {} occurrence(s)", count)?;
        }
        writeln!(output, "Generated:  {}", report.timestamp)?;
        writeln!(output)?;

        writeln!(output, "{} issue(s) detected.", report.results.len())?;

        for issue in &report.results {
            Self::format_issue(&mut output, issue)?;
        }

        writeln!(output)?;
        Ok(output)
    }

    /// The message shown when there is nothing to analyze
    pub fn format_empty() -> String {
        "Nothing to analyze.\n".to_string()
    }

    fn format_issue(output: &mut String, issue: &Issue) -> Result<()> {
        writeln!(output)?;
        writeln!(output, "────────────────────────────────────────────────────────────────")?;
        writeln!(output, "[{}] {}", issue.kind.label(), issue.title)?;
        writeln!(output, "  {}", issue.message)?;

        if let Some(highlight) = &issue.highlight {
            writeln!(output)?;
            for line in highlight.lines() {
                writeln!(output, "    {}", line)?;
            }
        }

        Ok(())
    }
}
