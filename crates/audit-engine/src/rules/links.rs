// External stylesheet count and preload hint rules
use crate::selectors::{preload_hint_selector, stylesheet_link_selector};
use scraper::Html;
use shared_types::{AuditMetrics, Issue, IssueKind};

/// More external stylesheets than this triggers the merge suggestion.
const STYLESHEET_LINK_LIMIT: usize = 4;

/// Flag pages pulling in many external stylesheets.
pub fn check_stylesheet_links(
    doc: &Html,
    mut metrics: AuditMetrics,
) -> (AuditMetrics, Option<Issue>) {
    let count = doc.select(stylesheet_link_selector()).count();
    if count <= STYLESHEET_LINK_LIMIT {
        return (metrics, None);
    }

    metrics.score -= 5;
    let issue = Issue {
        kind: IssueKind::Info,
        title: "Many external CSS files".to_string(),
        message: format!(
            "{} external stylesheets. Consider merging some for fewer requests.",
            count
        ),
        highlight: None,
    };
    (metrics, Some(issue))
}

/// Suggest a preload hint when stylesheets are linked but no
/// `rel="preload"` for style or image exists. Advisory only, no score
/// penalty.
pub fn check_preload_hints(doc: &Html, metrics: AuditMetrics) -> (AuditMetrics, Option<Issue>) {
    let has_stylesheets = doc.select(stylesheet_link_selector()).next().is_some();
    let has_preload = doc.select(preload_hint_selector()).next().is_some();

    if !has_stylesheets || has_preload {
        return (metrics, None);
    }

    let issue = Issue {
        kind: IssueKind::Info,
        title: "No preload hints".to_string(),
        message: "No <link rel=\"preload\"> found for critical CSS / hero image. Adding one can help LCP."
            .to_string(),
        highlight: None,
    };
    (metrics, Some(issue))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stylesheet_links(n: usize) -> String {
        (0..n)
            .map(|i| format!(r#"<link rel="stylesheet" href="s{}.css">"#, i))
            .collect()
    }

    #[test]
    fn test_four_stylesheets_are_fine() {
        let doc = Html::parse_document(&stylesheet_links(4));
        let (metrics, issue) = check_stylesheet_links(&doc, AuditMetrics::default());
        assert!(issue.is_none());
        assert_eq!(metrics.score, 100);
    }

    #[test]
    fn test_five_stylesheets_are_flagged() {
        let doc = Html::parse_document(&stylesheet_links(5));
        let (metrics, issue) = check_stylesheet_links(&doc, AuditMetrics::default());

        assert_eq!(metrics.score, 95);
        assert!(issue.unwrap().message.starts_with("5 external"));
    }

    #[test]
    fn test_suggests_preload_when_stylesheets_lack_hints() {
        let doc = Html::parse_document(&stylesheet_links(1));
        let (metrics, issue) = check_preload_hints(&doc, AuditMetrics::default());

        // Advisory rule, score untouched
        assert_eq!(metrics.score, 100);
        assert_eq!(issue.unwrap().title, "No preload hints");
    }

    #[test]
    fn test_style_preload_satisfies_the_hint_rule() {
        let html = format!(
            r#"{}<link rel="preload" as="style" href="critical.css">"#,
            stylesheet_links(2)
        );
        let doc = Html::parse_document(&html);
        let (_, issue) = check_preload_hints(&doc, AuditMetrics::default());
        assert!(issue.is_none());
    }

    #[test]
    fn test_image_preload_satisfies_the_hint_rule() {
        let html = format!(
            r#"{}<link rel="preload" as="image" href="hero.jpg">"#,
            stylesheet_links(2)
        );
        let doc = Html::parse_document(&html);
        let (_, issue) = check_preload_hints(&doc, AuditMetrics::default());
        assert!(issue.is_none());
    }

    #[test]
    fn test_no_stylesheets_means_no_preload_suggestion() {
        let doc = Html::parse_document("<p>plain page</p>");
        let (_, issue) = check_preload_hints(&doc, AuditMetrics::default());
        assert!(issue.is_none());
    }

    #[test]
    fn test_font_preload_does_not_count() {
        let html = format!(
            r#"{}<link rel="preload" as="font" href="a.woff2">"#,
            stylesheet_links(1)
        );
        let doc = Html::parse_document(&html);
        let (_, issue) = check_preload_hints(&doc, AuditMetrics::default());
        assert!(issue.is_some());
    }
}
