//! Input normalization and registrable domain extraction.
//!
//! Turns free-form user input (one domain, URL or IP address per line) into two
//! sorted, deduplicated sets:
//! - the entries as written (trimmed), handed to the probe as the full address list
//! - the normalized targets: literal IPs or registrable domains
//!
//! The registrable domain is the last two dot-separated labels of the host.
//! No public suffix list is consulted, so `example.co.uk` reduces to `co.uk`.

use std::collections::BTreeSet;
use std::net::{IpAddr, Ipv6Addr};
use std::sync::LazyLock;

use regex::Regex;

use crate::config::URL_SCHEME_PATTERN;
use crate::utils::compile_regex_unsafe;

static URL_SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(URL_SCHEME_PATTERN, "URL_SCHEME_RE"));

/// Result of normalizing one batch of raw input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedInput {
    /// Trimmed lines as written, deduplicated and sorted
    pub entries: Vec<String>,
    /// Literal IPs and registrable domains, deduplicated and sorted
    pub targets: Vec<String>,
    /// Non-blank lines dropped because no host could be extracted
    pub skipped: Vec<String>,
}

impl NormalizedInput {
    /// Returns `true` if no line produced a target.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Normalizes raw newline-separated input.
///
/// Blank lines are ignored and lines without an extractable host are skipped;
/// neither is an error. Carriage returns are treated as whitespace.
pub fn normalize_input(raw: &str) -> NormalizedInput {
    let mut entries = BTreeSet::new();
    let mut targets = BTreeSet::new();
    let mut skipped = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match normalize_target(line) {
            Some(target) => {
                entries.insert(line.to_string());
                targets.insert(target);
            }
            None => {
                log::debug!("Skipping line without an extractable host: {line}");
                skipped.push(line.to_string());
            }
        }
    }

    NormalizedInput {
        entries: entries.into_iter().collect(),
        targets: targets.into_iter().collect(),
        skipped,
    }
}

/// Normalizes a single trimmed line into a target.
///
/// Literal IP addresses are returned unchanged. Anything else is treated as a
/// URL and reduced to the registrable domain of its host.
///
/// Returns `None` if no host can be extracted.
pub fn normalize_target(line: &str) -> Option<String> {
    if line.parse::<IpAddr>().is_ok() {
        return Some(line.to_string());
    }

    let host = extract_host(line)?;
    if host.parse::<IpAddr>().is_ok() {
        return Some(host.to_string());
    }
    Some(registrable_domain(host))
}

/// Extracts the host of a URL-shaped line exactly as written.
///
/// A line without a `scheme://` prefix is read as an `http://` URL. The
/// authority ends at the first `/`, `?` or `#`; userinfo and port are dropped
/// and a bracketed IPv6 host loses its brackets. The host is never
/// IDNA-mapped or reinterpreted as a numeric address, so `10` stays `10` and
/// `Bücher.de` keeps its spelling.
fn extract_host(line: &str) -> Option<&str> {
    let rest = match URL_SCHEME_RE.find(line) {
        Some(scheme) => &line[scheme.end()..],
        None => line,
    };
    let authority = &rest[..rest.find(['/', '?', '#']).unwrap_or(rest.len())];
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host_port)| host_port);

    if let Some(bracketed) = host_port.strip_prefix('[') {
        let (inner, _) = bracketed.split_once(']')?;
        return inner.parse::<Ipv6Addr>().is_ok().then_some(inner);
    }

    let host = host_port.split_once(':').map_or(host_port, |(host, _)| host);
    is_host_text(host).then_some(host)
}

/// Letters and digits of any script, `-`, `_` and `.`.
fn is_host_text(host: &str) -> bool {
    !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Reduces a hostname to its registrable domain.
///
/// Lowercases, strips one leading `www.` and keeps the last two labels when
/// there are at least two.
pub fn registrable_domain(host: &str) -> String {
    let host = host.to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() >= 2 {
        labels[labels.len() - 2..].join(".")
    } else {
        host.to_string()
    }
}
