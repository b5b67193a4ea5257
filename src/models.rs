use serde::Serialize;

use crate::config::COUNTRY_CODE_NONE;

/// Resolution and geolocation result for one target.
///
/// Created by the resolver with `country_code` set to `"-"` and filled in by
/// the geolocation enricher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionRecord {
    /// Literal IP or registrable domain that was resolved
    pub target: String,
    /// IPv4 addresses in resolver output order (may be empty)
    pub ips: Vec<String>,
    /// Country code of the first IP, `"-"` or `"?"`
    pub country_code: String,
}

impl ResolutionRecord {
    pub fn new(target: impl Into<String>, ips: Vec<String>) -> Self {
        Self {
            target: target.into(),
            ips,
            country_code: COUNTRY_CODE_NONE.to_string(),
        }
    }

    /// The IP address used for geolocation, if any.
    pub fn first_ip(&self) -> Option<&str> {
        self.ips.first().map(String::as_str)
    }
}
