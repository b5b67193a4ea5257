//! Request orchestration.
//!
//! [`PipelineContext::analyze`] runs one analysis over in-memory input;
//! [`run_report`] is the configuration-driven entry point used by the binary.

mod context;
mod finalize;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use tokio::io::AsyncReadExt;

use crate::config::Config;

pub use context::{Analysis, PipelineContext};
pub use finalize::{print_error_statistics, RunSummary};

/// A completed run: the analysis and its summary.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub analysis: Analysis,
    pub summary: RunSummary,
}

/// Reads the configured input, analyzes it and logs the run statistics.
///
/// # Errors
///
/// Fails when the input cannot be read, the collaborators cannot be
/// initialized, or the analysis fails. A probe failure surfaces as
/// [`AnalysisError::Probe`](crate::AnalysisError::Probe) and can be recovered
/// with `downcast_ref` to get at the partial report.
pub async fn run_report(config: Config) -> Result<RunOutcome> {
    let start_time = Instant::now();

    let raw = read_input(&config.input)
        .await
        .context("Failed to read input")?;
    let ctx = PipelineContext::from_config(&config).context("Failed to initialize pipeline")?;

    let result = ctx.analyze(&raw).await;
    print_error_statistics(ctx.stats());
    let analysis = result?;

    let summary = RunSummary::new(&analysis, start_time.elapsed().as_secs_f64());
    summary.log();

    Ok(RunOutcome { analysis, summary })
}

/// Reads the whole input from a file, or from stdin when the path is `-`.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub async fn read_input(path: &Path) -> Result<String> {
    let bytes = if path.as_os_str() == "-" {
        info!("Reading input from stdin");
        let mut buf = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut buf)
            .await
            .context("Failed to read stdin")?;
        buf
    } else {
        tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to open input file {}", path.display()))?
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
