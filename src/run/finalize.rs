//! End-of-run statistics and summary.

use log::info;
use strum::IntoEnumIterator;

use crate::config::COUNTRY_CODE_FAILED;
use crate::error_handling::{ErrorType, ProcessingStats, WarningType};
use crate::report::SectionOrigin;

use super::Analysis;

/// Summary of a completed analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Normalized targets analyzed
    pub targets: usize,
    /// Geolocation rows with at least one IP
    pub resolved: usize,
    /// Geolocation rows whose lookup failed
    pub geolocation_failures: usize,
    pub whois_blocks: usize,
    pub certificate_blocks: usize,
    pub elapsed_seconds: f64,
}

impl RunSummary {
    pub fn new(analysis: &Analysis, elapsed_seconds: f64) -> Self {
        let rows = analysis
            .report
            .geolocation()
            .map(|table| table.rows.as_slice())
            .unwrap_or_default();

        Self {
            targets: analysis.input.targets.len(),
            resolved: rows.iter().filter(|row| !row.ips.is_empty()).count(),
            geolocation_failures: rows
                .iter()
                .filter(|row| row.country_code == COUNTRY_CODE_FAILED)
                .count(),
            whois_blocks: analysis.report.count(SectionOrigin::Whois),
            certificate_blocks: analysis.report.count(SectionOrigin::Certificate),
            elapsed_seconds,
        }
    }

    /// Logs the one-line summary.
    pub fn log(&self) {
        info!(
            "✅ Analyzed {} target{} ({} resolved, {} geolocation failures, {} WHOIS / {} certificate blocks) in {:.1}s",
            self.targets,
            if self.targets == 1 { "" } else { "s" },
            self.resolved,
            self.geolocation_failures,
            self.whois_blocks,
            self.certificate_blocks,
            self.elapsed_seconds
        );
    }
}

/// Logs error and warning counts, skipping kinds that never occurred.
pub fn print_error_statistics(stats: &ProcessingStats) {
    let total_errors = stats.total_errors();
    let total_warnings = stats.total_warnings();

    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    if total_warnings > 0 {
        info!("Warning Counts ({} total):", total_warnings);
        for warning_type in WarningType::iter() {
            let count = stats.get_warning_count(warning_type);
            if count > 0 {
                info!("   {}: {}", warning_type.as_str(), count);
            }
        }
    }
}
