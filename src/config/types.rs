//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_GEO_API_URL, DEFAULT_MAX_CONCURRENCY, DEFAULT_MAX_INPUT_LINES,
    DEFAULT_PROBE_ARGS, DEFAULT_PROBE_COMMAND, DEFAULT_RESOLVER_ARGS, DEFAULT_RESOLVER_COMMAND,
    DEFAULT_USER_AGENT, GEO_TIMEOUT_SECS, PROBE_TIMEOUT_SECS, RESOLVER_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Output format of the rendered report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text tables
    Text,
    /// HTML tables, content lines joined with `<br>`
    Html,
    /// The report serialized as JSON
    Json,
}

/// Pipeline configuration.
///
/// Usable both as the CLI option set (via `clap`) and programmatically through
/// `Default` and struct update syntax.
///
/// # Examples
///
/// ```no_run
/// use domain_report::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("domains.txt"),
///     max_concurrency: 4,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_report",
    about = "Resolves, geolocates and probes a list of domains or IP addresses."
)]
pub struct Config {
    /// File with one domain or IP address per line (`-` reads stdin)
    #[arg(value_parser, default_value = "-")]
    pub input: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Report format: text|html|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Maximum number of concurrent resolution and geolocation lookups
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Maximum number of non-blank input lines per request
    #[arg(long, default_value_t = DEFAULT_MAX_INPUT_LINES)]
    pub max_input_lines: usize,

    /// Resolve the entries as written instead of their registrable domains
    #[arg(long)]
    pub resolve_entries: bool,

    /// Name-resolution command
    #[arg(long, default_value = DEFAULT_RESOLVER_COMMAND)]
    pub resolver_command: String,

    /// Argument passed to the resolver before the target (repeatable)
    #[arg(long = "resolver-arg", allow_hyphen_values = true, default_values = DEFAULT_RESOLVER_ARGS)]
    pub resolver_args: Vec<String>,

    /// Resolution timeout in seconds
    #[arg(long, default_value_t = RESOLVER_TIMEOUT_SECS)]
    pub resolver_timeout_secs: u64,

    /// Base URL of the geolocation API (`{base}/json/{ip}`)
    #[arg(long, default_value = DEFAULT_GEO_API_URL)]
    pub geo_api_url: String,

    /// Geolocation request timeout in seconds
    #[arg(long, default_value_t = GEO_TIMEOUT_SECS)]
    pub geo_timeout_secs: u64,

    /// Program launching the registration/certificate probe
    #[arg(long, default_value = DEFAULT_PROBE_COMMAND)]
    pub probe_command: String,

    /// Argument passed to the probe before its file paths (repeatable)
    #[arg(long = "probe-arg", allow_hyphen_values = true, default_values = DEFAULT_PROBE_ARGS)]
    pub probe_args: Vec<String>,

    /// Probe timeout in seconds
    #[arg(long, default_value_t = PROBE_TIMEOUT_SECS)]
    pub probe_timeout_secs: u64,

    /// HTTP User-Agent header value for geolocation requests
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Config {
    /// Resolution timeout as a `Duration`.
    pub fn resolver_timeout(&self) -> Duration {
        Duration::from_secs(self.resolver_timeout_secs)
    }

    /// Geolocation timeout as a `Duration`.
    pub fn geo_timeout(&self) -> Duration {
        Duration::from_secs(self.geo_timeout_secs)
    }

    /// Probe timeout as a `Duration`.
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("-"),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            format: OutputFormat::Text,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            max_input_lines: DEFAULT_MAX_INPUT_LINES,
            resolve_entries: false,
            resolver_command: DEFAULT_RESOLVER_COMMAND.to_string(),
            resolver_args: DEFAULT_RESOLVER_ARGS.iter().map(|a| a.to_string()).collect(),
            resolver_timeout_secs: RESOLVER_TIMEOUT_SECS,
            geo_api_url: DEFAULT_GEO_API_URL.to_string(),
            geo_timeout_secs: GEO_TIMEOUT_SECS,
            probe_command: DEFAULT_PROBE_COMMAND.to_string(),
            probe_args: DEFAULT_PROBE_ARGS.iter().map(|a| a.to_string()).collect(),
            probe_timeout_secs: PROBE_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("-"));
        assert_eq!(config.max_concurrency, 10);
        assert_eq!(config.max_input_lines, 1000);
        assert_eq!(config.resolver_timeout(), Duration::from_secs(5));
        assert_eq!(config.geo_timeout(), Duration::from_secs(5));
        assert_eq!(config.resolver_command, "dig");
        assert_eq!(config.resolver_args, vec!["+short".to_string()]);
        assert_eq!(config.probe_args, vec!["whois_cert/whois_cert.sh".to_string()]);
        assert!(!config.resolve_entries);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_cli_defaults_match_config_default() {
        let parsed = Config::try_parse_from(["domain_report"]).unwrap();
        let default = Config::default();
        assert_eq!(parsed.input, default.input);
        assert_eq!(parsed.max_concurrency, default.max_concurrency);
        assert_eq!(parsed.resolver_args, default.resolver_args);
        assert_eq!(parsed.probe_args, default.probe_args);
        assert_eq!(parsed.geo_api_url, default.geo_api_url);
        assert_eq!(parsed.user_agent, default.user_agent);
    }

    #[test]
    fn test_cli_overrides() {
        let parsed = Config::try_parse_from([
            "domain_report",
            "domains.txt",
            "--format",
            "html",
            "--max-concurrency",
            "3",
            "--resolver-command",
            "host",
            "--resolver-arg",
            "-t",
            "--resolver-arg",
            "A",
            "--resolve-entries",
        ])
        .unwrap();
        assert_eq!(parsed.input, PathBuf::from("domains.txt"));
        assert_eq!(parsed.format, OutputFormat::Html);
        assert_eq!(parsed.max_concurrency, 3);
        assert_eq!(parsed.resolver_command, "host");
        assert_eq!(parsed.resolver_args, vec!["-t".to_string(), "A".to_string()]);
        assert!(parsed.resolve_entries);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Config::try_parse_from(["domain_report", "--format", "pdf"]).is_err());
    }
}
