//! Target resolution through an external command.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};

use crate::error_handling::{CommandError, ErrorType, ProcessingStats, WarningType};
use crate::external::ExternalCommand;
use crate::models::ResolutionRecord;

use super::extract::extract_ipv4_lines;

/// Resolves targets to IPv4 addresses by running an external command.
///
/// Failures are soft: a target whose lookup fails resolves to no addresses and
/// the failure is logged and counted, never returned.
pub struct Resolver {
    command: Arc<dyn ExternalCommand>,
    timeout: Duration,
    stats: Arc<ProcessingStats>,
}

impl Resolver {
    pub fn new(command: Arc<dyn ExternalCommand>, timeout: Duration) -> Self {
        Self {
            command,
            timeout,
            stats: Arc::new(ProcessingStats::new()),
        }
    }

    /// Records soft failures in `stats` instead of a private tracker.
    pub fn with_stats(mut self, stats: Arc<ProcessingStats>) -> Self {
        self.stats = stats;
        self
    }

    /// Per-lookup timeout.
    #[cfg(test)]
    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolves one target to its IPv4-shaped addresses.
    ///
    /// Returns an empty list on timeout, command failure or output without any
    /// address-shaped line.
    pub async fn resolve(&self, target: &str) -> Vec<String> {
        let output = match self
            .command
            .run(&[target.to_string()], self.timeout)
            .await
        {
            Ok(output) => output,
            Err(e) => {
                let error_type = match e {
                    CommandError::Timeout { .. } => ErrorType::ResolutionTimeout,
                    _ => ErrorType::ResolutionCommandError,
                };
                self.stats.increment_error(error_type);
                log::warn!("Resolution of {target} failed: {e}");
                return Vec::new();
            }
        };

        let ips = extract_ipv4_lines(&output);
        if ips.is_empty() {
            self.stats.increment_warning(WarningType::NoIpv4Address);
            log::debug!("No IPv4 address for {target}");
        } else {
            log::debug!("Resolved {target} to {}", ips.join(", "));
        }
        ips
    }

    /// Resolves every target with at most `concurrency` lookups in flight.
    ///
    /// Records come back in the order of `targets`, whatever order the lookups
    /// finish in.
    pub async fn resolve_all(&self, targets: &[String], concurrency: usize) -> Vec<ResolutionRecord> {
        stream::iter(targets)
            .map(|target| async move {
                let ips = self.resolve(target).await;
                ResolutionRecord::new(target.as_str(), ips)
            })
            .buffered(concurrency.max(1))
            .collect()
            .await
    }
}
