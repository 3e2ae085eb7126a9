use std::path::PathBuf;

use thiserror::Error;

/// Application-level error type.
///
/// Only the boundaries fail: reading a lite report, parsing it, and reading
/// configuration. Copy generation itself is total and never returns this.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read lite report {}: {source}", .path.display())]
    ReportRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid lite report JSON: {0}")]
    ReportParse(#[from] serde_json::Error),

    #[error("Lite report must be a JSON object, got {0}")]
    ReportNotObject(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_read_message_includes_path() {
        let err = AppError::ReportRead {
            path: PathBuf::from("/tmp/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.json"), "message was {msg}");
        assert!(msg.contains("no such file"), "message was {msg}");
    }

    #[test]
    fn test_report_parse_wraps_serde_error() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: AppError = serde_err.into();
        assert!(matches!(err, AppError::ReportParse(_)));
        assert!(err.to_string().starts_with("Invalid lite report JSON"));
    }
}
