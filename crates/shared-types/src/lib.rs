pub mod types;

pub use types::{
    AuditMetrics, ClsStatus, CssWeight, Issue, IssueKind, LcpStatus, RawSamples, Report,
};
