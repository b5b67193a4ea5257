//! Tests for input normalization (blank lines, URLs, IP literals, deduplication)

use domain_report::domain::{normalize_input, normalize_target};

#[test]
fn test_blank_lines_are_ignored() {
    let input = normalize_input("example.com\n\n   \n\t\nrust-lang.org\n");
    assert_eq!(input.entries, vec!["example.com", "rust-lang.org"]);
    assert_eq!(input.targets, vec!["example.com", "rust-lang.org"]);
    assert!(input.skipped.is_empty());
}

#[test]
fn test_duplicates_collapse_to_one_target() {
    let input = normalize_input("a.com\na.com\nA.com");
    assert_eq!(input.targets, vec!["a.com"]);
    // Entries are kept as written, so differing case survives there.
    assert_eq!(input.entries, vec!["A.com", "a.com"]);
}

#[test]
fn test_crlf_input() {
    let input = normalize_input("example.com\r\nwww.example.com\r\n8.8.8.8\r\n");
    assert_eq!(input.entries, vec!["8.8.8.8", "example.com", "www.example.com"]);
    assert_eq!(input.targets, vec!["8.8.8.8", "example.com"]);
}

#[test]
fn test_urls_reduce_to_registrable_domain() {
    let input = normalize_input(
        "https://www.Example.com/path?q=1\nhttp://blog.example.com:8080/\nftp://files.rust-lang.org",
    );
    assert_eq!(input.targets, vec!["example.com", "rust-lang.org"]);
    assert_eq!(input.entries.len(), 3);
}

#[test]
fn test_ip_literals_pass_through() {
    assert_eq!(normalize_target("8.8.8.8").as_deref(), Some("8.8.8.8"));
    assert_eq!(normalize_target("2001:db8::1").as_deref(), Some("2001:db8::1"));
    assert_eq!(normalize_target("http://1.2.3.4/admin").as_deref(), Some("1.2.3.4"));
}

#[test]
fn test_naive_two_label_heuristic() {
    assert_eq!(normalize_target("shop.example.co.uk").as_deref(), Some("co.uk"));
    assert_eq!(normalize_target("localhost").as_deref(), Some("localhost"));
}

#[test]
fn test_unparsable_lines_are_skipped_everywhere() {
    let input = normalize_input("http://\nexample.com");
    assert_eq!(input.skipped, vec!["http://"]);
    assert_eq!(input.entries, vec!["example.com"]);
    assert_eq!(input.targets, vec!["example.com"]);
}

#[test]
fn test_empty_input() {
    let input = normalize_input("");
    assert!(input.is_empty());
    assert!(input.entries.is_empty());
}

#[test]
fn test_hosts_are_taken_as_written() {
    assert_eq!(normalize_target("10").as_deref(), Some("10"));
    assert_eq!(normalize_target("example.123").as_deref(), Some("example.123"));
    assert_eq!(normalize_target("http://Bücher.de/").as_deref(), Some("bücher.de"));
}
