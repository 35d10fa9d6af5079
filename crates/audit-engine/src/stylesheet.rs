//! Stylesheet rule evaluator
//!
//! A pure metrics pass: classifies stylesheet weight and measures override
//! density. Unlike the markup rules it emits no discrete issues; the
//! override count is recorded on the metrics record for the report.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{AuditMetrics, ClsStatus, CssWeight};
use tracing::debug;

/// Byte-length boundaries for the weight classes.
const SMALL_LIMIT: usize = 5_000;
const MEDIUM_LIMIT: usize = 20_000;

lazy_static! {
    // Case-sensitive, matching the literal token only
    static ref IMPORTANT_TOKEN: Regex = Regex::new("!important").unwrap();
}

/// Run the stylesheet rules over `css` and return the updated metrics.
pub fn evaluate(css: &str, mut metrics: AuditMetrics) -> AuditMetrics {
    metrics.css_weight = if css.len() < SMALL_LIMIT {
        CssWeight::Small
    } else if css.len() < MEDIUM_LIMIT {
        CssWeight::Medium
    } else {
        metrics.score -= 5;
        CssWeight::Large
    };

    let important_count = IMPORTANT_TOKEN.find_iter(css).count() as u32;
    if important_count > 0 {
        // Flat penalty regardless of how many occurrences
        metrics.score -= 10;
        if metrics.cls == ClsStatus::Ok {
            metrics.cls = ClsStatus::Mixed;
        }
        metrics.important_count = Some(important_count);
    }

    debug!(
        weight = %metrics.css_weight,
        important = important_count,
        "stylesheet pass done"
    );
    metrics
}
