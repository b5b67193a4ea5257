//! Resolver output parsing.

use std::sync::LazyLock;

use regex::Regex;

use crate::utils::compile_regex_unsafe;

/// Dotted-quad shape. Octet values are not range-checked.
const IPV4_SHAPE_PATTERN: &str = r"^[0-9]{1,3}(\.[0-9]{1,3}){3}$";

static IPV4_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(IPV4_SHAPE_PATTERN, "IPV4_SHAPE_RE"));

/// Keeps the lines of resolver output that look like IPv4 addresses.
///
/// `dig +short` mixes CNAME targets and addresses; only address-shaped lines
/// survive, in output order. `999.1.1.1` is kept since only the shape is
/// checked.
pub fn extract_ipv4_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| IPV4_SHAPE_RE.is_match(line))
        .map(str::to_string)
        .collect()
}
