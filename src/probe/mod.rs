//! Registration and certificate probe.
//!
//! The probe is an external script that performs WHOIS and TLS certificate
//! lookups for a batch of targets and writes two delimited text files. This
//! module hands it its input files, runs it, and parses what it wrote:
//! - [`Probe`] is the seam the pipeline depends on
//! - [`ScriptProbe`] runs the script in a per-request temporary directory
//! - [`parse_probe_output`] turns each output file into [`TextBlock`]s

mod parse;
mod types;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::{PROBE_ADDRESSES_FILE, PROBE_CERT_FILE, PROBE_DOMAINS_FILE, PROBE_WHOIS_FILE};
use crate::error_handling::ProbeError;
use crate::external::ExternalCommand;

// Re-export public API
pub use parse::parse_probe_output;
pub use types::{BlockKind, ProbeOutput, TextBlock};

/// Source of registration and certificate data for a batch of targets.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Probes the batch.
    ///
    /// `entries` is the full address list as entered, `domains` the
    /// registrable domains and literal IPs. Any failure here is fatal to the
    /// request.
    async fn probe(&self, entries: &[String], domains: &[String]) -> Result<ProbeOutput, ProbeError>;
}

/// A [`Probe`] backed by an external script.
///
/// The script is invoked with four trailing arguments: the address list file,
/// the domain list file, and the two files it must write registration and
/// certificate data to. All four live in a temporary directory removed once
/// the outputs are read.
pub struct ScriptProbe {
    command: Arc<dyn ExternalCommand>,
    timeout: Duration,
}

impl ScriptProbe {
    pub fn new(command: Arc<dyn ExternalCommand>, timeout: Duration) -> Self {
        Self { command, timeout }
    }

    /// Time the script may run before it is killed.
    #[cfg(test)]
    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl Probe for ScriptProbe {
    async fn probe(&self, entries: &[String], domains: &[String]) -> Result<ProbeOutput, ProbeError> {
        let workdir = tempfile::tempdir().map_err(|source| ProbeError::Io {
            context: "creating probe work directory".to_string(),
            source,
        })?;
        let dir = workdir.path();

        let addresses = dir.join(PROBE_ADDRESSES_FILE);
        let domain_list = dir.join(PROBE_DOMAINS_FILE);
        let whois = dir.join(PROBE_WHOIS_FILE);
        let certificates = dir.join(PROBE_CERT_FILE);

        write_list(&addresses, entries).await?;
        write_list(&domain_list, domains).await?;

        let args: Vec<String> = [&addresses, &domain_list, &whois, &certificates]
            .iter()
            .map(|path| path.to_string_lossy().into_owned())
            .collect();

        log::info!(
            "Running probe {} for {} entries ({} domains)",
            self.command.program(),
            entries.len(),
            domains.len()
        );
        let stdout = self.command.run(&args, self.timeout).await?;
        if !stdout.trim().is_empty() {
            log::debug!("Probe output: {}", stdout.trim());
        }

        Ok(ProbeOutput {
            whois: read_output(&whois).await?,
            certificates: read_output(&certificates).await?,
        })
    }
}

async fn write_list(path: &Path, lines: &[String]) -> Result<(), ProbeError> {
    let mut contents = lines.join("\n");
    contents.push('\n');
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| ProbeError::Io {
            context: format!("writing {}", path.display()),
            source,
        })
}

async fn read_output(path: &Path) -> Result<String, ProbeError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| ProbeError::Io {
            context: format!("reading {}", path.display()),
            source,
        })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
