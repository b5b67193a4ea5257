//! Report assembly.
//!
//! A [`Report`] is the ordered concatenation of the geolocation table, the
//! registration blocks and the certificate blocks. Assembly never transforms,
//! drops or reorders content; rendering lives in [`render`].

pub mod render;

use serde::Serialize;
use strum_macros::Display;

use crate::models::ResolutionRecord;
use crate::probe::TextBlock;

/// Geolocation table: one row per resolved target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeoTable {
    pub rows: Vec<ResolutionRecord>,
}

impl GeoTable {
    /// Builds a table from records, or `None` when there are no records.
    pub fn from_records(records: Vec<ResolutionRecord>) -> Option<Self> {
        if records.is_empty() {
            None
        } else {
            Some(Self { rows: records })
        }
    }
}

/// Where a report section came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum SectionOrigin {
    #[strum(serialize = "Geolocation")]
    Geolocation,
    #[strum(serialize = "WHOIS")]
    Whois,
    #[strum(serialize = "SSL certificates")]
    Certificate,
}

/// One section of a report, tagged by origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "origin", rename_all = "snake_case")]
pub enum ReportSection {
    Geolocation(GeoTable),
    Whois(TextBlock),
    Certificate(TextBlock),
}

impl ReportSection {
    pub fn origin(&self) -> SectionOrigin {
        match self {
            ReportSection::Geolocation(_) => SectionOrigin::Geolocation,
            ReportSection::Whois(_) => SectionOrigin::Whois,
            ReportSection::Certificate(_) => SectionOrigin::Certificate,
        }
    }

    /// The probe block behind this section, if it is not the geolocation table.
    pub fn block(&self) -> Option<&TextBlock> {
        match self {
            ReportSection::Geolocation(_) => None,
            ReportSection::Whois(block) | ReportSection::Certificate(block) => Some(block),
        }
    }
}

/// Ordered report: geolocation, then WHOIS blocks, then certificate blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The geolocation table, if the report has one.
    pub fn geolocation(&self) -> Option<&GeoTable> {
        self.sections.iter().find_map(|section| match section {
            ReportSection::Geolocation(table) => Some(table),
            _ => None,
        })
    }

    /// Number of sections with the given origin.
    pub fn count(&self, origin: SectionOrigin) -> usize {
        self.sections
            .iter()
            .filter(|section| section.origin() == origin)
            .count()
    }
}

/// Assembles a report.
///
/// The geolocation table comes first when present, followed by every WHOIS
/// block and then every certificate block, each in the given order.
pub fn assemble(geo: Option<GeoTable>, whois: Vec<TextBlock>, certs: Vec<TextBlock>) -> Report {
    let mut sections = Vec::with_capacity(usize::from(geo.is_some()) + whois.len() + certs.len());
    sections.extend(geo.map(ReportSection::Geolocation));
    sections.extend(whois.into_iter().map(ReportSection::Whois));
    sections.extend(certs.into_iter().map(ReportSection::Certificate));
    Report { sections }
}
