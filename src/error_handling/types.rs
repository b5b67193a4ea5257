//! Error type definitions.
//!
//! This module defines the typed errors surfaced by the pipeline and the soft
//! failure categories counted while processing individual targets.

use std::time::Duration;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::report::Report;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failure of an external lookup command.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The command could not be started.
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        /// Program that failed to start
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The command did not finish within its time limit.
    #[error("`{program}` timed out after {}s", .timeout.as_secs())]
    Timeout {
        /// Program that timed out
        program: String,
        /// Time limit that was exceeded
        timeout: Duration,
    },

    /// The command finished with a non-zero exit status.
    #[error("`{program}` exited with {status}: {stderr}")]
    Failed {
        /// Program that failed
        program: String,
        /// Exit status description (code or signal)
        status: String,
        /// Trimmed standard error output
        stderr: String,
    },
}

/// Failure of the registration/certificate probe.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The probe input or output files could not be written or read.
    #[error("probe file error ({context}): {source}")]
    Io {
        /// What was being done with the file
        context: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The probe command itself failed.
    #[error("probe invocation failed: {0}")]
    Command(#[from] CommandError),
}

/// Request-level failure of an analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// More non-blank input lines than the configured limit.
    #[error("input has {lines} entries, the limit is {limit}")]
    TooManyLines {
        /// Non-blank lines in the input
        lines: usize,
        /// Configured limit
        limit: usize,
    },

    /// The probe failed. Geolocation results computed before the failure are
    /// kept in `partial`.
    #[error("{source}")]
    Probe {
        /// Probe failure
        #[source]
        source: ProbeError,
        /// Report holding only the geolocation section (if any)
        partial: Box<Report>,
    },
}

/// Per-target failures that are recovered with a sentinel value.
///
/// These never abort a run; they are counted in
/// [`ProcessingStats`](super::ProcessingStats) and summarized at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// Resolver command could not start or exited non-zero
    ResolutionCommandError,
    /// Resolver command exceeded its timeout
    ResolutionTimeout,
    /// Geolocation request failed (network, timeout)
    GeolocationRequestError,
    /// Geolocation response was not a JSON object
    GeolocationDecodeError,
}

impl ErrorType {
    /// Human-readable label for summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::ResolutionCommandError => "Resolver command error",
            ErrorType::ResolutionTimeout => "Resolver timeout",
            ErrorType::GeolocationRequestError => "Geolocation request error",
            ErrorType::GeolocationDecodeError => "Geolocation response decode error",
        }
    }
}

/// Notable but expected outcomes that leave data missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    /// Input line from which no host could be extracted
    UnparsableLine,
    /// Resolver succeeded but returned no IPv4-shaped line
    NoIpv4Address,
    /// Geolocation response had no `country_code`
    MissingCountryCode,
}

impl WarningType {
    /// Human-readable label for summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::UnparsableLine => "Unparsable input line",
            WarningType::NoIpv4Address => "No IPv4 address resolved",
            WarningType::MissingCountryCode => "Missing country code",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_error_types_have_string_representation() {
        for error_type in ErrorType::iter() {
            assert!(
                !error_type.as_str().is_empty(),
                "{:?} should have non-empty string",
                error_type
            );
        }
    }

    #[test]
    fn test_all_warning_types_have_string_representation() {
        for warning_type in WarningType::iter() {
            assert!(
                !warning_type.as_str().is_empty(),
                "{:?} should have non-empty string",
                warning_type
            );
        }
    }

    #[test]
    fn test_command_error_display() {
        let err = CommandError::Timeout {
            program: "dig".to_string(),
            timeout: Duration::from_secs(5),
        };
        assert_eq!(err.to_string(), "`dig` timed out after 5s");

        let err = CommandError::Failed {
            program: "bash".to_string(),
            status: "exit status: 2".to_string(),
            stderr: "whois: not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "`bash` exited with exit status: 2: whois: not found"
        );
    }

    #[test]
    fn test_probe_error_wraps_command_error() {
        let err: ProbeError = CommandError::Timeout {
            program: "bash".to_string(),
            timeout: Duration::from_secs(300),
        }
        .into();
        assert!(err.to_string().starts_with("probe invocation failed"));
    }

    #[test]
    fn test_too_many_lines_display() {
        let err = AnalysisError::TooManyLines {
            lines: 12,
            limit: 10,
        };
        assert_eq!(err.to_string(), "input has 12 entries, the limit is 10");
    }
}
