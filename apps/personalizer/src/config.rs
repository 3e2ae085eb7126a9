use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::errors::AppError;

/// How the demo binary prints the personalized copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Sectioned console layout.
    #[default]
    Text,
    /// Pretty-printed template variables.
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::Config(format!(
                "unknown output format '{other}' (expected 'text' or 'json')"
            ))),
        }
    }
}

/// Demo configuration loaded from environment variables.
/// Every variable is optional.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lite report to personalize. `None` uses the built-in sample report.
    pub report_path: Option<PathBuf>,
    pub output_format: OutputFormat,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let output_format = match std::env::var("COPY_OUTPUT_FORMAT") {
            Ok(raw) => raw
                .parse::<OutputFormat>()
                .context("COPY_OUTPUT_FORMAT must be 'text' or 'json'")?,
            Err(_) => OutputFormat::default(),
        };

        Ok(Config {
            report_path: std::env::var_os("LITE_REPORT_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            output_format,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parses_text_and_json() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_output_format_is_case_insensitive() {
        assert_eq!(" JSON ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("Text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_output_format_rejects_unknown() {
        let err = "yaml".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn test_output_format_defaults_to_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
