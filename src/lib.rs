//! domain_report library: domain analysis pipeline
//!
//! This library turns a free-form list of domains, URLs and IP addresses into a
//! report combining resolved IPv4 addresses, the country of each first address,
//! and registration and TLS certificate data gathered by an external probe.
//!
//! # Example
//!
//! ```no_run
//! use domain_report::{render, run_report, Config, OutputFormat};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input: std::path::PathBuf::from("domains.txt"),
//!     max_concurrency: 4,
//!     ..Default::default()
//! };
//!
//! let outcome = run_report(config).await?;
//! println!("{}", render(&outcome.analysis.report, OutputFormat::Text)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Resolution and the probe spawn
//! external programs (`dig` and the probe script by default).

pub mod config;
pub mod dns;
pub mod domain;
mod error_handling;
pub mod external;
pub mod geoip;
pub mod initialization;
pub mod models;
pub mod probe;
pub mod report;
mod run;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{
    AnalysisError, CommandError, ErrorType, InitializationError, ProbeError, ProcessingStats,
    WarningType,
};
pub use report::render::render;
pub use report::{assemble, Report};
pub use run::{
    print_error_statistics, read_input, run_report, Analysis, PipelineContext, RunOutcome,
    RunSummary,
};
