//! Shared-link domain extraction.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::record::Record;

/// Host part of an `https://` link, captured up to the first slash.
const LINK_PATTERN: &str = r"https://(.+?)/";

fn link_regex() -> &'static Regex {
    static LINK: OnceLock<Regex> = OnceLock::new();
    LINK.get_or_init(|| Regex::new(LINK_PATTERN).unwrap())
}

/// Extracts the domain label from the first `https://` link in `text`.
///
/// The captured host is split on `.`: with more than two labels the second
/// one is taken (the first is presumed to be a `www`-style prefix),
/// otherwise the first. This is a label heuristic, not a public-suffix
/// lookup, so `https://bbc.co.uk/` yields `co`.
///
/// Returns `None` when the text has no `https://` link with a path slash.
///
/// # Example
///
/// ```rust
/// use chatstats::stats::extract_domain;
///
/// assert_eq!(
///     extract_domain("Check https://www.example.com/page out"),
///     Some("example")
/// );
/// assert_eq!(extract_domain("Check https://sub.co/x out"), Some("sub"));
/// assert_eq!(extract_domain("no links here"), None);
/// ```
pub fn extract_domain(text: &str) -> Option<&str> {
    let caps = link_regex().captures(text)?;
    let host = caps.get(1).map_or("", |m| m.as_str());

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() > 2 {
        Some(labels[1])
    } else {
        Some(labels[0])
    }
}

/// Counts link-domain labels across records.
///
/// At most one label per record: only the first link in each text
/// contributes, and records without a link contribute nothing. Keys
/// iterate in sorted order.
pub fn domain_counts(records: &[Record]) -> BTreeMap<String, u64> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for record in records {
        if let Some(domain) = extract_domain(&record.text) {
            *counts.entry(domain.to_string()).or_insert(0) += 1;
        }
    }
    counts
}
