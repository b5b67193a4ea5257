//! Probe output grammar.
//!
//! Output is a sequence of segments separated by a line of exactly 40 dashes.
//! A segment may carry a `domena: <name>` header line (key matched
//! case-insensitively); every other line is content. Blank segments, such as
//! those produced by a leading, trailing or doubled delimiter, are dropped.

use crate::config::{PROBE_HEADER_KEY, PROBE_NO_DOMAIN_PLACEHOLDER, PROBE_SEGMENT_DELIMITER};

use super::types::{BlockKind, TextBlock};

/// Parses one probe output stream into titled blocks, in order.
pub fn parse_probe_output(text: &str, kind: BlockKind) -> Vec<TextBlock> {
    split_segments(text)
        .iter()
        .filter_map(|segment| parse_segment(segment, kind))
        .collect()
}

fn split_segments(text: &str) -> Vec<Vec<&str>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for line in text.lines() {
        if line.trim() == PROBE_SEGMENT_DELIMITER {
            segments.push(std::mem::take(&mut current));
        } else {
            current.push(line);
        }
    }
    segments.push(current);

    segments
}

fn parse_segment(lines: &[&str], kind: BlockKind) -> Option<TextBlock> {
    let start = lines.iter().position(|line| !line.trim().is_empty())?;
    let end = lines.iter().rposition(|line| !line.trim().is_empty())?;
    let lines = &lines[start..=end];

    let header = lines.iter().position(|line| is_header(line));

    let title = match header {
        Some(index) => {
            let name = lines[index]
                .split_once(':')
                .map(|(_, rest)| rest.trim())
                .unwrap_or_default();
            format!("{kind} – {name}")
        }
        None => format!("{kind} – {PROBE_NO_DOMAIN_PLACEHOLDER}"),
    };

    let content_lines = lines
        .iter()
        .enumerate()
        .filter(|(index, _)| Some(*index) != header)
        .map(|(_, line)| line.trim().to_string())
        .collect();

    Some(TextBlock::new(title, content_lines))
}

fn is_header(line: &str) -> bool {
    line.trim_start()
        .to_lowercase()
        .starts_with(PROBE_HEADER_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELIM: &str = "----------------------------------------";

    fn titles(blocks: &[TextBlock]) -> Vec<&str> {
        blocks.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_delimiter_is_forty_dashes() {
        assert_eq!(PROBE_SEGMENT_DELIMITER.len(), 40);
        assert!(PROBE_SEGMENT_DELIMITER.chars().all(|c| c == '-'));
    }

    #[test]
    fn test_parse_two_segments() {
        let text = format!("domena: x.com\nLine1\nLine2\n{DELIM}\ndomena: y.com\nLine3");
        let blocks = parse_probe_output(&text, BlockKind::Whois);
        assert_eq!(
            blocks,
            vec![
                TextBlock::new("WHOIS – x.com", vec!["Line1".into(), "Line2".into()]),
                TextBlock::new("WHOIS – y.com", vec!["Line3".into()]),
            ]
        );
    }

    #[test]
    fn test_parse_certificate_label() {
        let text = "Domena: example.com\nissuer=Let's Encrypt";
        let blocks = parse_probe_output(text, BlockKind::Certificate);
        assert_eq!(titles(&blocks), vec!["Certyfikat SSL – example.com"]);
    }

    #[test]
    fn test_parse_header_key_case_insensitive() {
        let text = "DOMENA:   Example.COM  \nbody";
        let blocks = parse_probe_output(text, BlockKind::Whois);
        assert_eq!(titles(&blocks), vec!["WHOIS – Example.COM"]);
    }

    #[test]
    fn test_parse_header_keeps_text_after_first_colon() {
        let text = "domena: host:8443\nbody";
        let blocks = parse_probe_output(text, BlockKind::Certificate);
        assert_eq!(titles(&blocks), vec!["Certyfikat SSL – host:8443"]);
    }

    #[test]
    fn test_parse_missing_header_uses_placeholder() {
        let text = "Registrar: Example Inc.\nCreated: 2001-01-01";
        let blocks = parse_probe_output(text, BlockKind::Whois);
        assert_eq!(
            blocks,
            vec![TextBlock::new(
                "WHOIS – (brak domeny)",
                vec!["Registrar: Example Inc.".into(), "Created: 2001-01-01".into()]
            )]
        );
    }

    #[test]
    fn test_parse_header_not_first_line() {
        let text = "preamble\ndomena: z.org\nafter";
        let blocks = parse_probe_output(text, BlockKind::Whois);
        assert_eq!(
            blocks,
            vec![TextBlock::new(
                "WHOIS – z.org",
                vec!["preamble".into(), "after".into()]
            )]
        );
    }

    #[test]
    fn test_parse_only_first_header_is_title() {
        let text = "domena: a.com\ndomena: b.com";
        let blocks = parse_probe_output(text, BlockKind::Whois);
        assert_eq!(
            blocks,
            vec![TextBlock::new("WHOIS – a.com", vec!["domena: b.com".into()])]
        );
    }

    #[test]
    fn test_parse_leading_and_trailing_delimiters() {
        let text = format!("{DELIM}\ndomena: a.com\nx\n{DELIM}\n\n{DELIM}\n   \n");
        let blocks = parse_probe_output(&text, BlockKind::Whois);
        assert_eq!(titles(&blocks), vec!["WHOIS – a.com"]);
    }

    #[test]
    fn test_parse_header_only_segment_has_no_content() {
        let text = format!("domena: a.com\n{DELIM}\ndomena: b.com\n  \n");
        let blocks = parse_probe_output(&text, BlockKind::Whois);
        assert_eq!(
            blocks,
            vec![
                TextBlock::new("WHOIS – a.com", vec![]),
                TextBlock::new("WHOIS – b.com", vec![]),
            ]
        );
    }

    #[test]
    fn test_parse_trims_content_lines_and_keeps_inner_blanks() {
        let text = "\n\n  domena: a.com\n   Registrar: X   \n\n\tStatus: ok\n\n";
        let blocks = parse_probe_output(text, BlockKind::Whois);
        assert_eq!(
            blocks[0].content_lines,
            vec!["Registrar: X".to_string(), String::new(), "Status: ok".to_string()]
        );
    }

    #[test]
    fn test_parse_crlf_output() {
        let text = format!("domena: a.com\r\nline\r\n{DELIM}\r\ndomena: b.com\r\n");
        let blocks = parse_probe_output(&text, BlockKind::Whois);
        assert_eq!(titles(&blocks), vec!["WHOIS – a.com", "WHOIS – b.com"]);
        assert_eq!(blocks[0].content_lines, vec!["line".to_string()]);
    }

    #[test]
    fn test_parse_other_dash_runs_are_content() {
        let text = "domena: a.com\n---\n-----------------------------------------";
        let blocks = parse_probe_output(text, BlockKind::Whois);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content_lines.len(), 2);
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_probe_output("", BlockKind::Whois).is_empty());
        assert!(parse_probe_output("\n  \n", BlockKind::Certificate).is_empty());
        assert!(parse_probe_output(DELIM, BlockKind::Whois).is_empty());
    }
}
