use std::fmt;

/// Layout-shift risk badge. Starts at `Ok` and only moves toward a worse
/// state within a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ClsStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "risk")]
    Risk,
    #[serde(rename = "mixed")]
    Mixed,
}

/// Largest-contentful-paint risk badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LcpStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "risk")]
    Risk,
}

/// Stylesheet weight classification. `Unknown` means no stylesheet input
/// was supplied for this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CssWeight {
    #[serde(rename = "--")]
    Unknown,
    #[serde(rename = "small")]
    Small,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "large")]
    Large,
}

/// Summary metrics for one analysis run, threaded through the rule
/// evaluators and clamped to [0, 100] at aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AuditMetrics {
    pub score: i32,
    pub cls: ClsStatus,
    pub lcp: LcpStatus,
    #[serde(rename = "cssWeight")]
    pub css_weight: CssWeight,
    /// Count of `!important` occurrences, recorded for downstream reporting.
    /// The stylesheet evaluator does not emit a discrete issue for it.
    #[serde(
        rename = "_importantCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub important_count: Option<u32>,
}

impl Default for AuditMetrics {
    fn default() -> Self {
        Self {
            score: 100,
            cls: ClsStatus::Ok,
            lcp: LcpStatus::Ok,
            css_weight: CssWeight::Unknown,
            important_count: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum IssueKind {
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "warning")]
    Warning,
}

impl IssueKind {
    /// Uppercased label for list rendering.
    pub fn label(&self) -> &'static str {
        match self {
            IssueKind::Info => "INFO",
            IssueKind::Warning => "WARNING",
        }
    }
}

/// A single finding. Immutable once created; ordering in a report is
/// emission order (markup rules first, in fixed rule order).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub title: String,
    pub message: String,
    /// Serialized markup excerpt of the offending elements, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
}

/// Truncated copies of the analyzed inputs, kept in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawSamples {
    #[serde(rename = "htmlSample")]
    pub html_sample: String,
    #[serde(rename = "cssSample")]
    pub css_sample: String,
}

/// Snapshot of one completed analysis run. Owned by the caller; a new run
/// fully replaces the previous snapshot.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Report {
    pub meta: AuditMetrics,
    pub results: Vec<Issue>,
    pub raw: RawSamples,
    /// ISO-8601 timestamp of when the snapshot was built.
    pub timestamp: String,
}

impl fmt::Display for ClsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClsStatus::Ok => "OK",
            ClsStatus::Risk => "risk",
            ClsStatus::Mixed => "mixed",
        };
        f.write_str(s)
    }
}

impl fmt::Display for LcpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LcpStatus::Ok => "OK",
            LcpStatus::Risk => "risk",
        };
        f.write_str(s)
    }
}

impl fmt::Display for CssWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CssWeight::Unknown => "--",
            CssWeight::Small => "small",
            CssWeight::Medium => "medium",
            CssWeight::Large => "large",
        };
        f.write_str(s)
    }
}
