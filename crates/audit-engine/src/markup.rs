//! Markup rule evaluator
//!
//! Parses markup into a best-effort tree and folds the metrics record
//! through the structural rules in fixed order. Malformed markup never
//! fails; the parser always produces a tree to scan.

use crate::rules::{images, links, styles};
use scraper::Html;
use shared_types::{AuditMetrics, Issue};
use tracing::debug;

type MarkupRule = fn(&Html, AuditMetrics) -> (AuditMetrics, Option<Issue>);

/// Rule order is fixed; it determines issue emission order in the report.
const RULES: [MarkupRule; 5] = [
    images::check_image_dimensions,
    images::check_lazy_loading,
    styles::check_inline_styles,
    links::check_stylesheet_links,
    links::check_preload_hints,
];

/// Run all markup rules over `html`, returning the updated metrics and the
/// issues emitted, in rule order. The score is clamped to >= 0 before
/// returning.
pub fn evaluate(html: &str, metrics: AuditMetrics) -> (AuditMetrics, Vec<Issue>) {
    let doc = Html::parse_document(html);

    let mut metrics = metrics;
    let mut issues = Vec::new();
    for rule in RULES {
        let (next, issue) = rule(&doc, metrics);
        metrics = next;
        issues.extend(issue);
    }

    metrics.score = metrics.score.max(0);
    debug!(score = metrics.score, issues = issues.len(), "markup pass done");
    (metrics, issues)
}
