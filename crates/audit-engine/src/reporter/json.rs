//! JSON reporter for audit reports

use anyhow::Result;
use shared_types::Report;

/// JSON format reporter
pub struct JsonReporter;

impl JsonReporter {
    /// Format an audit report as JSON
    ///
    /// # Arguments
    ///
    /// * `report` - The report snapshot to format
    /// * `pretty` - Whether to pretty-print the JSON
    pub fn format(report: &Report, pretty: bool) -> Result<String> {
        let output = if pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(output)
    }
}
