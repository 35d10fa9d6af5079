//! Static heuristic audit of markup and stylesheet text
//!
//! Two rule evaluators run over caller-supplied text: the markup pass
//! scans a parsed document tree for structural anti-patterns (missing
//! image dimensions, missing lazy loading, inline styles, stylesheet
//! sprawl, absent preload hints), the stylesheet pass classifies weight
//! and override density. The aggregator threads one metrics record
//! through both passes, markup first, and returns a report snapshot
//! owned by the caller.

pub mod markup;
pub mod report;
pub mod reporter;
pub mod rules;
pub mod stylesheet;

mod selectors;

use shared_types::{AuditMetrics, Report};
use tracing::debug;

/// Outcome of one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    /// At least one input was non-empty; a snapshot was built.
    Report(Report),
    /// Both inputs were empty; there is nothing to analyze.
    Empty,
}

impl Analysis {
    pub fn report(&self) -> Option<&Report> {
        match self {
            Analysis::Report(report) => Some(report),
            Analysis::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Analysis::Empty)
    }
}

/// AuditEngine entry point
pub struct AuditEngine;

impl AuditEngine {
    pub fn new() -> Self {
        Self
    }

    /// Analyze markup and stylesheet text. Either input may be empty;
    /// both empty short-circuits to [`Analysis::Empty`]. Each run starts
    /// from fresh metrics and shares no state with previous runs.
    pub fn analyze(&self, html: &str, css: &str) -> Analysis {
        let html = html.trim();
        let css = css.trim();

        if html.is_empty() && css.is_empty() {
            debug!("both inputs empty, nothing to analyze");
            return Analysis::Empty;
        }

        let mut metrics = AuditMetrics::default();
        let mut issues = Vec::new();

        if !html.is_empty() {
            let (next, found) = markup::evaluate(html, metrics);
            metrics = next;
            issues = found;
        }
        if !css.is_empty() {
            metrics = stylesheet::evaluate(css, metrics);
        }

        metrics.score = metrics.score.clamp(0, 100);
        debug!(score = metrics.score, issues = issues.len(), "analysis complete");

        Analysis::Report(report::build(html, css, metrics, issues))
    }
}

impl Default for AuditEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{ClsStatus, CssWeight, LcpStatus};

    #[test]
    fn test_empty_inputs_short_circuit() {
        let engine = AuditEngine::new();
        let analysis = engine.analyze("", "   \n  ");

        assert!(analysis.is_empty());
        assert!(analysis.report().is_none());
    }

    #[test]
    fn test_unoptimized_image_scores_seventy() {
        let engine = AuditEngine::new();
        let analysis = engine.analyze(r#"<img src="a.png">"#, "");
        let report = analysis.report().unwrap();

        assert_eq!(report.meta.score, 70);
        assert_eq!(report.meta.cls, ClsStatus::Risk);
        assert_eq!(report.meta.lcp, LcpStatus::Risk);
        assert_eq!(report.results.len(), 2);
    }

    #[test]
    fn test_css_weight_stays_unknown_without_stylesheet() {
        let engine = AuditEngine::new();
        let analysis = engine.analyze("<p>hi</p>", "");
        assert_eq!(analysis.report().unwrap().meta.css_weight, CssWeight::Unknown);
    }

    #[test]
    fn test_markup_risk_survives_stylesheet_pass() {
        let engine = AuditEngine::new();
        let analysis = engine.analyze(r#"<img src="a.png">"#, ".a{color:red !important}");
        let report = analysis.report().unwrap();

        // Risk from the markup pass is not downgraded to mixed
        assert_eq!(report.meta.cls, ClsStatus::Risk);
        assert_eq!(report.meta.score, 60);
        assert_eq!(report.meta.important_count, Some(1));
    }

    #[test]
    fn test_stylesheet_findings_emit_no_issues() {
        let engine = AuditEngine::new();
        let css = format!(".a{{color:red !important}}{}", "b".repeat(25_000));
        let analysis = engine.analyze("", &css);
        let report = analysis.report().unwrap();

        // Weight and override density only adjust metrics
        assert!(report.results.is_empty());
        assert_eq!(report.meta.score, 85);
        assert_eq!(report.meta.cls, ClsStatus::Mixed);
    }

    #[test]
    fn test_successive_runs_share_nothing() {
        let engine = AuditEngine::new();

        let first = engine.analyze(r#"<img src="a.png">"#, "");
        assert_eq!(first.report().unwrap().results.len(), 2);

        let second = engine.analyze("<p>clean</p>", "");
        let report = second.report().unwrap();
        assert!(report.results.is_empty());
        assert_eq!(report.meta.score, 100);
        assert_eq!(report.raw.html_sample, "<p>clean</p>");
    }

    #[test]
    fn test_inputs_are_trimmed_before_evaluation() {
        let engine = AuditEngine::new();
        let analysis = engine.analyze("  <p>hi</p>  ", "");
        assert_eq!(analysis.report().unwrap().raw.html_sample, "<p>hi</p>");
    }
}
