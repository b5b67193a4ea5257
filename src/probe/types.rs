//! Probe data structures.

use serde::Serialize;
use strum_macros::Display;

/// Which probe output a block was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Registration (WHOIS) data
    #[strum(serialize = "WHOIS")]
    Whois,
    /// TLS certificate data
    #[strum(serialize = "Certyfikat SSL")]
    Certificate,
}

/// One parsed segment of probe output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextBlock {
    /// `"<label> – <domain>"`, or the no-domain placeholder
    pub title: String,
    /// Remaining lines of the segment, each trimmed, in order
    pub content_lines: Vec<String>,
}

impl TextBlock {
    pub fn new(title: impl Into<String>, content_lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            content_lines,
        }
    }
}

/// Raw text written by the probe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeOutput {
    /// Registration data segments
    pub whois: String,
    /// Certificate data segments
    pub certificates: String,
}
