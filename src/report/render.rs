//! Report rendering.
//!
//! Consecutive sections of the same origin are rendered as one group. Text
//! output lines up the geolocation table in columns; HTML output emits one
//! table per group with content lines joined by `<br>`.

use std::fmt::Write as _;

use crate::config::{OutputFormat, COUNTRY_CODE_NONE};
use crate::probe::TextBlock;

use super::{GeoTable, Report, ReportSection, SectionOrigin};

const GEO_HEADERS: [&str; 3] = ["Domain", "IP", "Country"];

/// Renders a report in the requested format.
pub fn render(report: &Report, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Html => Ok(render_html(report)),
        OutputFormat::Json => render_json(report),
    }
}

pub fn render_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Plain text rendering for terminals.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();

    for (origin, sections) in groups(report) {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "== {origin} ==");
        for section in sections {
            match section {
                ReportSection::Geolocation(table) => text_geo_table(&mut out, table),
                ReportSection::Whois(block) | ReportSection::Certificate(block) => {
                    text_block(&mut out, block)
                }
            }
        }
    }

    out
}

fn text_geo_table(out: &mut String, table: &GeoTable) {
    let rows: Vec<[String; 3]> = table
        .rows
        .iter()
        .map(|record| {
            [
                record.target.clone(),
                ips_cell(&record.ips, ", "),
                record.country_code.clone(),
            ]
        })
        .collect();

    let mut widths = GEO_HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = GEO_HEADERS.map(String::from);
    for row in std::iter::once(&header).chain(&rows) {
        let _ = writeln!(
            out,
            "{:<w0$}  {:<w1$}  {}",
            row[0],
            row[1],
            row[2],
            w0 = widths[0],
            w1 = widths[1]
        );
    }
}

fn text_block(out: &mut String, block: &TextBlock) {
    let _ = writeln!(out, "-- {} --", block.title);
    for line in &block.content_lines {
        let _ = writeln!(out, "{line}");
    }
}

/// HTML fragment rendering: a heading and a table per section group.
pub fn render_html(report: &Report) -> String {
    let mut out = String::new();

    for (origin, sections) in groups(report) {
        let _ = writeln!(out, "<h3>{}</h3>", escape_html(&origin.to_string()));
        out.push_str("<table>\n");
        if origin == SectionOrigin::Geolocation {
            out.push_str("<tr>");
            for header in GEO_HEADERS {
                let _ = write!(out, "<th>{header}</th>");
            }
            out.push_str("</tr>\n");
        }
        for section in sections {
            match section {
                ReportSection::Geolocation(table) => {
                    for record in &table.rows {
                        let _ = writeln!(
                            out,
                            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                            escape_html(&record.target),
                            html_ips_cell(&record.ips),
                            escape_html(&record.country_code)
                        );
                    }
                }
                ReportSection::Whois(block) | ReportSection::Certificate(block) => {
                    let content: Vec<String> =
                        block.content_lines.iter().map(|line| escape_html(line)).collect();
                    let _ = writeln!(
                        out,
                        "<tr><td>{}</td><td>{}</td></tr>",
                        escape_html(&block.title),
                        content.join("<br>")
                    );
                }
            }
        }
        out.push_str("</table>\n");
    }

    out
}

fn html_ips_cell(ips: &[String]) -> String {
    let escaped: Vec<String> = ips.iter().map(|ip| escape_html(ip)).collect();
    ips_cell(&escaped, "<br>")
}

fn ips_cell(ips: &[String], separator: &str) -> String {
    if ips.is_empty() {
        COUNTRY_CODE_NONE.to_string()
    } else {
        ips.join(separator)
    }
}

/// Splits the report into runs of consecutive sections sharing an origin.
fn groups(report: &Report) -> Vec<(SectionOrigin, &[ReportSection])> {
    let mut result = Vec::new();
    let sections = report.sections();
    let mut start = 0;

    while start < sections.len() {
        let origin = sections[start].origin();
        let len = sections[start..]
            .iter()
            .take_while(|section| section.origin() == origin)
            .count();
        result.push((origin, &sections[start..start + len]));
        start += len;
    }

    result
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
