//! Error handling and processing statistics.
//!
//! This module provides:
//! - Typed errors for initialization, external commands, the probe and whole
//!   analyses
//! - Soft failure categories and their thread-safe counters
//!
//! Per-target failures (resolution, geolocation) are never propagated; they
//! are replaced by sentinel values and counted here. Only a probe failure
//! aborts a request.

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{
    AnalysisError, CommandError, ErrorType, InitializationError, ProbeError, WarningType,
};
