// Inline style density rule
use crate::selectors::inline_style_selector;
use scraper::Html;
use shared_types::{AuditMetrics, Issue, IssueKind};

/// Flag elements carrying a `style` attribute. Repeated inline styles
/// belong in a stylesheet.
pub fn check_inline_styles(doc: &Html, mut metrics: AuditMetrics) -> (AuditMetrics, Option<Issue>) {
    let count = doc.select(inline_style_selector()).count();
    if count == 0 {
        return (metrics, None);
    }

    metrics.score -= 5;
    let issue = Issue {
        kind: IssueKind::Info,
        title: "Inline styles detected".to_string(),
        message: format!(
            "{} element(s) using inline styles. Repeated ones should go to CSS.",
            count
        ),
        highlight: None,
    };
    (metrics, Some(issue))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_inline_styles() {
        let doc = Html::parse_document(r#"<div style="color:red"><p style="margin:0">x</p></div>"#);
        let (metrics, issue) = check_inline_styles(&doc, AuditMetrics::default());

        assert_eq!(metrics.score, 95);
        let issue = issue.unwrap();
        assert_eq!(issue.kind, IssueKind::Info);
        assert!(issue.message.starts_with("2 element(s)"));
    }

    #[test]
    fn test_accepts_markup_without_inline_styles() {
        let doc = Html::parse_document("<div><p>x</p></div>");
        let (metrics, issue) = check_inline_styles(&doc, AuditMetrics::default());
        assert!(issue.is_none());
        assert_eq!(metrics.score, 100);
    }

    #[test]
    fn test_empty_style_attribute_still_counts() {
        let doc = Html::parse_document(r#"<div style="">x</div>"#);
        let (_, issue) = check_inline_styles(&doc, AuditMetrics::default());
        assert!(issue.is_some());
    }
}
