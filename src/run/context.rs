//! Pipeline context and the per-request analysis.

use std::sync::Arc;

use crate::config::{Config, DEFAULT_MAX_CONCURRENCY, DEFAULT_MAX_INPUT_LINES};
use crate::dns::Resolver;
use crate::domain::{normalize_input, NormalizedInput};
use crate::error_handling::{AnalysisError, InitializationError, ProcessingStats, WarningType};
use crate::geoip::GeoEnricher;
use crate::initialization::{init_client, init_probe, init_resolver};
use crate::probe::{parse_probe_output, BlockKind, Probe};
use crate::report::{assemble, GeoTable, Report};

/// Outcome of one analysis: the normalized input and the assembled report.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub input: NormalizedInput,
    pub report: Report,
}

/// Everything one analysis needs: collaborators, limits and shared counters.
///
/// The context is built once and can serve any number of requests; it holds
/// no per-request state besides the processing counters.
pub struct PipelineContext {
    resolver: Resolver,
    geo: GeoEnricher,
    probe: Arc<dyn Probe>,
    stats: Arc<ProcessingStats>,
    max_concurrency: usize,
    max_input_lines: usize,
    resolve_entries: bool,
}

impl PipelineContext {
    /// Creates a context around the given collaborators with default limits.
    ///
    /// The resolver and enricher are attached to the context's counters.
    pub fn new(resolver: Resolver, geo: GeoEnricher, probe: Arc<dyn Probe>) -> Self {
        let stats = Arc::new(ProcessingStats::new());
        Self {
            resolver: resolver.with_stats(Arc::clone(&stats)),
            geo: geo.with_stats(Arc::clone(&stats)),
            probe,
            stats,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            max_input_lines: DEFAULT_MAX_INPUT_LINES,
            resolve_entries: false,
        }
    }

    /// Builds the production context: system resolver command, HTTP
    /// geolocation client and script probe.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config.geo_timeout(), &config.user_agent)?;
        let geo = GeoEnricher::new(client, config.geo_api_url.as_str());
        let context = Self::new(init_resolver(config), geo, Arc::new(init_probe(config)))
            .with_limits(config.max_concurrency, config.max_input_lines)
            .resolving_entries(config.resolve_entries);
        Ok(context)
    }

    /// Sets the lookup concurrency and the input size limit.
    pub fn with_limits(mut self, max_concurrency: usize, max_input_lines: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self.max_input_lines = max_input_lines;
        self
    }

    /// Resolves the entries as written instead of the normalized targets.
    pub fn resolving_entries(mut self, enabled: bool) -> Self {
        self.resolve_entries = enabled;
        self
    }

    pub fn stats(&self) -> &Arc<ProcessingStats> {
        &self.stats
    }

    /// Analyzes raw newline-separated input.
    ///
    /// Resolution and geolocation run on a bounded pool while the probe runs
    /// alongside them. Per-target failures end up as sentinel values in the
    /// report. A probe failure fails the request, and the error carries the
    /// geolocation section computed so far.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::TooManyLines`] before any lookup when the input
    /// exceeds the line limit, and [`AnalysisError::Probe`] when the probe fails.
    pub async fn analyze(&self, raw: &str) -> Result<Analysis, AnalysisError> {
        let lines = raw.lines().filter(|line| !line.trim().is_empty()).count();
        if lines > self.max_input_lines {
            return Err(AnalysisError::TooManyLines {
                lines,
                limit: self.max_input_lines,
            });
        }

        let input = normalize_input(raw);
        for line in &input.skipped {
            self.stats.increment_warning(WarningType::UnparsableLine);
            log::debug!("Skipping line without a host: {line:?}");
        }

        if input.is_empty() {
            log::warn!("No usable targets in input ({lines} non-blank lines)");
            return Ok(Analysis {
                input,
                report: Report::default(),
            });
        }

        log::info!(
            "Analyzing {} targets from {} entries",
            input.targets.len(),
            input.entries.len()
        );

        let lookup_targets = if self.resolve_entries {
            &input.entries
        } else {
            &input.targets
        };

        let geolocation = async {
            let records = self
                .resolver
                .resolve_all(lookup_targets, self.max_concurrency)
                .await;
            self.geo.enrich(records, self.max_concurrency).await
        };
        let (records, probe_result) = tokio::join!(
            geolocation,
            self.probe.probe(&input.entries, &input.targets)
        );

        let geo = GeoTable::from_records(records);
        let output = match probe_result {
            Ok(output) => output,
            Err(source) => {
                log::error!("Probe failed: {source}");
                return Err(AnalysisError::Probe {
                    source,
                    partial: Box::new(assemble(geo, Vec::new(), Vec::new())),
                });
            }
        };

        let whois = parse_probe_output(&output.whois, BlockKind::Whois);
        let certificates = parse_probe_output(&output.certificates, BlockKind::Certificate);
        log::debug!(
            "Parsed {} WHOIS and {} certificate blocks",
            whois.len(),
            certificates.len()
        );

        Ok(Analysis {
            input,
            report: assemble(geo, whois, certificates),
        })
    }
}
