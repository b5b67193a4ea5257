//! Country lookups against the HTTP geolocation API.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use serde_json::Value;

use crate::config::{COUNTRY_CODE_FAILED, COUNTRY_CODE_NONE};
use crate::error_handling::{ErrorType, ProcessingStats, WarningType};
use crate::models::ResolutionRecord;

/// Fills in country codes by querying `{base_url}/json/{ip}`.
///
/// Only the `country_code` field of the response is used. The HTTP status is
/// not checked: an error page that still carries JSON without the field
/// yields `"-"`, anything that is not a JSON object yields `"?"`.
pub struct GeoEnricher {
    client: reqwest::Client,
    base_url: String,
    stats: Arc<ProcessingStats>,
}

impl GeoEnricher {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            stats: Arc::new(ProcessingStats::new()),
        }
    }

    /// Records soft failures in `stats` instead of a private tracker.
    pub fn with_stats(mut self, stats: Arc<ProcessingStats>) -> Self {
        self.stats = stats;
        self
    }

    /// URL queried for `ip`.
    pub fn lookup_url(&self, ip: &str) -> String {
        format!("{}/json/{}", self.base_url.trim_end_matches('/'), ip)
    }

    /// Looks up the country code of a single IP address.
    ///
    /// Returns `"?"` when the request or JSON decoding fails and `"-"` when the
    /// response has no usable `country_code`.
    pub async fn country_code(&self, ip: &str) -> String {
        let body = match self.fetch(ip).await {
            Ok(body) => body,
            Err(e) => {
                let error_type = if e.is_decode() {
                    ErrorType::GeolocationDecodeError
                } else {
                    ErrorType::GeolocationRequestError
                };
                self.stats.increment_error(error_type);
                log::warn!("Geolocation lookup for {ip} failed: {e}");
                return COUNTRY_CODE_FAILED.to_string();
            }
        };

        let Some(object) = body.as_object() else {
            self.stats.increment_error(ErrorType::GeolocationDecodeError);
            log::warn!("Geolocation response for {ip} is not a JSON object");
            return COUNTRY_CODE_FAILED.to_string();
        };

        match object.get("country_code") {
            Some(Value::String(code)) => code.clone(),
            Some(Value::Null) | None => {
                self.stats.increment_warning(WarningType::MissingCountryCode);
                log::debug!("Geolocation response for {ip} has no country_code");
                COUNTRY_CODE_NONE.to_string()
            }
            Some(other) => other.to_string(),
        }
    }

    async fn fetch(&self, ip: &str) -> Result<Value, reqwest::Error> {
        self.client
            .get(self.lookup_url(ip))
            .send()
            .await?
            .json::<Value>()
            .await
    }

    /// Fills in the country code of one record.
    ///
    /// Records without addresses get `"-"` without any request; otherwise the
    /// first address is looked up.
    pub async fn enrich_record(&self, mut record: ResolutionRecord) -> ResolutionRecord {
        record.country_code = match record.first_ip() {
            Some(ip) => self.country_code(ip).await,
            None => COUNTRY_CODE_NONE.to_string(),
        };
        record
    }

    /// Enriches every record with at most `concurrency` requests in flight.
    ///
    /// The returned records keep the input order.
    pub async fn enrich(
        &self,
        records: Vec<ResolutionRecord>,
        concurrency: usize,
    ) -> Vec<ResolutionRecord> {
        stream::iter(records)
            .map(|record| self.enrich_record(record))
            .buffered(concurrency.max(1))
            .collect()
            .await
    }
}
