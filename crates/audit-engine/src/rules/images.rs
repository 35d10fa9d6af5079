// Image rules: reserved dimensions (CLS) and lazy loading (LCP)
use crate::selectors::img_selector;
use scraper::Html;
use shared_types::{AuditMetrics, ClsStatus, Issue, IssueKind, LcpStatus};

/// Width at or below which an image is considered too small to matter for
/// lazy loading.
const SMALL_IMAGE_WIDTH: f64 = 120.0;

/// Flag `<img>` elements that do not reserve layout space. An empty
/// `width=""` or `height=""` counts as missing.
pub fn check_image_dimensions(doc: &Html, mut metrics: AuditMetrics) -> (AuditMetrics, Option<Issue>) {
    let missing: Vec<String> = doc
        .select(img_selector())
        .filter(|img| {
            img.value().attr("width").map_or(true, str::is_empty)
                || img.value().attr("height").map_or(true, str::is_empty)
        })
        .map(|img| img.html())
        .collect();

    if missing.is_empty() {
        return (metrics, None);
    }

    metrics.score -= 20;
    metrics.cls = ClsStatus::Risk;
    let issue = Issue {
        kind: IssueKind::Warning,
        title: "Images missing width/height".to_string(),
        message: format!(
            "{} <img> tag(s) without dimensions. This can hurt CLS.",
            missing.len()
        ),
        highlight: Some(missing.join("\n\n")),
    };
    (metrics, Some(issue))
}

/// Flag `<img>` elements with a source that are not small and carry no
/// `loading` attribute.
pub fn check_lazy_loading(doc: &Html, mut metrics: AuditMetrics) -> (AuditMetrics, Option<Issue>) {
    let count = doc
        .select(img_selector())
        .filter(|img| {
            let has_src = img.value().attr("src").map_or(false, |s| !s.is_empty());
            has_src && !is_small(img.value().attr("width")) && img.value().attr("loading").is_none()
        })
        .count();

    if count == 0 {
        return (metrics, None);
    }

    metrics.score -= 10;
    metrics.lcp = LcpStatus::Risk;
    let issue = Issue {
        kind: IssueKind::Info,
        title: "Images missing lazy-loading".to_string(),
        message: format!(
            "{} image(s) without loading=\"lazy\". This can affect LCP.",
            count
        ),
        highlight: None,
    };
    (metrics, Some(issue))
}

/// A declared numeric width of at most 120 marks the image as small. A
/// missing, empty, or non-numeric width does not.
fn is_small(width: Option<&str>) -> bool {
    width
        .filter(|w| !w.is_empty())
        .and_then(|w| w.trim().parse::<f64>().ok())
        .map_or(false, |w| w <= SMALL_IMAGE_WIDTH)
}
