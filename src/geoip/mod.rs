//! Geolocation enrichment.
//!
//! Looks up the country of the first resolved address of each record through
//! an external HTTP API. Every failure is isolated to its record and replaced
//! by a sentinel country code (`"-"` or `"?"`).

mod lookup;

// Re-export public API
pub use lookup::GeoEnricher;
