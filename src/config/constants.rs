//! Configuration constants.
//!
//! This module defines the defaults used throughout the pipeline: collaborator
//! commands and endpoints, timeouts, size limits and the probe text grammar.

// Concurrency and input limits
/// Maximum number of targets resolved or geolocated at the same time
pub const DEFAULT_MAX_CONCURRENCY: usize = 10;
/// Maximum number of non-blank input lines accepted per request
pub const DEFAULT_MAX_INPUT_LINES: usize = 1000;

// Resolver collaborator
/// Name-resolution command invoked once per target
pub const DEFAULT_RESOLVER_COMMAND: &str = "dig";
/// Arguments placed before the target (`dig +short <target>`)
pub const DEFAULT_RESOLVER_ARGS: &[&str] = &["+short"];
/// Resolution timeout in seconds
pub const RESOLVER_TIMEOUT_SECS: u64 = 5;

// Geolocation collaborator
/// Base URL of the geolocation API; lookups go to `{base}/json/{ip}`
pub const DEFAULT_GEO_API_URL: &str = "https://reallyfreegeoip.org";
/// Geolocation request timeout in seconds
pub const GEO_TIMEOUT_SECS: u64 = 5;

// Probe collaborator
/// Program used to launch the registration/certificate probe
pub const DEFAULT_PROBE_COMMAND: &str = "bash";
/// Arguments placed before the four file paths handed to the probe
pub const DEFAULT_PROBE_ARGS: &[&str] = &["whois_cert/whois_cert.sh"];
/// Probe timeout in seconds. The probe runs WHOIS and TLS lookups for every
/// target sequentially, so it gets far more room than a single lookup.
pub const PROBE_TIMEOUT_SECS: u64 = 300;

/// File name of the full address list handed to the probe
pub const PROBE_ADDRESSES_FILE: &str = "domeny.txt";
/// File name of the registrable-domain list handed to the probe
pub const PROBE_DOMAINS_FILE: &str = "domeny_glowne.txt";
/// File the probe writes registration data to
pub const PROBE_WHOIS_FILE: &str = "whois.txt";
/// File the probe writes certificate data to
pub const PROBE_CERT_FILE: &str = "certyfikaty.txt";

/// Default User-Agent for geolocation requests
pub const DEFAULT_USER_AGENT: &str = concat!("domain_report/", env!("CARGO_PKG_VERSION"));

// Sentinel values
/// Country code used when there is nothing to look up or the service gave no code
pub const COUNTRY_CODE_NONE: &str = "-";
/// Country code used when the geolocation lookup failed
pub const COUNTRY_CODE_FAILED: &str = "?";

// Probe text grammar
/// Segment delimiter emitted by the probe (exactly 40 dashes)
pub const PROBE_SEGMENT_DELIMITER: &str = "----------------------------------------";
/// Case-insensitive key of the segment header line
pub const PROBE_HEADER_KEY: &str = "domena:";
/// Title suffix used when a segment has no header line
pub const PROBE_NO_DOMAIN_PLACEHOLDER: &str = "(brak domeny)";

// URL handling
/// A line carrying any `scheme://` prefix
pub const URL_SCHEME_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9+.\-]*://";
