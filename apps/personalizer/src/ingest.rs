//! Lite report ingest: parses a Lite report from JSON into a `LiteReport`.
//!
//! Parsing is permissive: missing keys, `null` values, unknown keys and values
//! of the wrong shape are all accepted and read as defaults later. Only text
//! that is not JSON, or JSON that is not an object, is rejected.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::models::LiteReport;

/// Example Lite report from the upgrade page walkthrough.
pub const SAMPLE_LITE_REPORT: &str = r#"{
    "score": 7,
    "max_score": 10,
    "effectiveness": "Strong discovery, weak close",
    "primary_pattern": {
        "name": "The Advice Avalanche",
        "type": "weakness",
        "description": "Tim gave away the entire strategy session during discovery..."
    },
    "secondary_pattern": {
        "name": "The Soft Close Fade",
        "type": "weakness",
        "description": "Tim spent 57 minutes building trust, then ended with..."
    },
    "buying_signals_detected": 8,
    "missed_close_opportunities": 3,
    "call_duration_minutes": 57,
    "total_lite_reports_generated": 1,
    "rep_name": "Tim",
    "prospect_name": "Marjorie"
}"#;

/// Parses a Lite report from a JSON object string.
pub fn parse_lite_report(json: &str) -> Result<LiteReport, AppError> {
    let value: Value = serde_json::from_str(json)?;
    let kind = match &value {
        Value::Object(_) => None,
        Value::Null => Some("null"),
        Value::Bool(_) => Some("a boolean"),
        Value::Number(_) => Some("a number"),
        Value::String(_) => Some("a string"),
        Value::Array(_) => Some("an array"),
    };
    if let Some(kind) = kind {
        return Err(AppError::ReportNotObject(kind));
    }

    let report: LiteReport = serde_json::from_value(value)?;
    debug!(
        defaulted = ?report.defaulted_fields(),
        primary_pattern = report.primary_pattern_name(),
        "Parsed lite report"
    );
    Ok(report)
}

/// Reads and parses a Lite report JSON file.
pub fn load_lite_report(path: &Path) -> Result<LiteReport, AppError> {
    let raw = std::fs::read_to_string(path).map_err(|source| AppError::ReportRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = raw.len(), "Read lite report file");
    parse_lite_report(&raw)
}
