//! Output Rendering
//!
//! JSON documents printed on stdout when `--json` is set. Human-readable
//! output goes through the reporter instead.

use serde_json::json;

use crate::application::TransferReport;

/// `{"destination": ..., "keys": [...]}`
pub fn report_json(report: &TransferReport) -> String {
    serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string())
}

/// Listed keys as a JSON array
pub fn keys_json(keys: &[String]) -> String {
    json!(keys).to_string()
}
