use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use personalizer::config::{Config, OutputFormat};
use personalizer::ingest::{load_lite_report, parse_lite_report, SAMPLE_LITE_REPORT};
use personalizer::render::{render_console, render_json};
use personalizer::UpgradePagePersonalizer;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries only the rendered copy
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting upgrade page personalizer v{}", env!("CARGO_PKG_VERSION"));

    let report = match &config.report_path {
        Some(path) => {
            info!("Loading lite report from {}", path.display());
            load_lite_report(path)?
        }
        None => {
            info!("LITE_REPORT_PATH not set, using the built-in sample report");
            parse_lite_report(SAMPLE_LITE_REPORT).context("built-in sample report is invalid")?
        }
    };

    let copy = UpgradePagePersonalizer::new(report).full_copy();

    match config.output_format {
        OutputFormat::Text => print!("{}", render_console(&copy)),
        OutputFormat::Json => println!("{}", render_json(&copy)?),
    }

    Ok(())
}
