//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_report` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Rendering the report to stdout
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_report::initialization::init_logger_with;
use domain_report::{render, run_report, AnalysisError, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let format = config.format;
    match run_report(config).await {
        Ok(outcome) => {
            let rendered =
                render(&outcome.analysis.report, format).context("Failed to render report")?;
            print!("{rendered}");
            Ok(())
        }
        Err(e) => {
            // A failed probe still leaves the geolocation results worth showing.
            if let Some(AnalysisError::Probe { partial, .. }) = e.downcast_ref::<AnalysisError>() {
                match render(partial, format) {
                    Ok(rendered) => print!("{rendered}"),
                    Err(render_err) => eprintln!("Failed to render partial report: {render_err}"),
                }
            }
            eprintln!("domain_report error: {:#}", e);
            process::exit(1);
        }
    }
}
