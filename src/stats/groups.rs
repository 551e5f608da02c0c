//! Partitioning records by sender and by day.
//!
//! All groupings return sorted maps, so iteration order (and any report
//! built from it) is deterministic. Within each partition the records keep
//! their original sequence order, which is what the per-partition day-span
//! calculation relies on.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::error::Result;
use crate::record::Record;
use crate::stats::detailed::DetailedStats;

/// Groups records by the sender's first name.
///
/// The key is [`Record::first_name`], so "Alice Smith" and "Alice Jones"
/// land in the same partition. A record with an empty sender lands under
/// the empty-string key.
pub fn by_sender(records: &[Record]) -> BTreeMap<String, Vec<Record>> {
    let mut groups: BTreeMap<String, Vec<Record>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.first_name().to_string())
            .or_default()
            .push(record.clone());
    }
    groups
}

/// Groups records by calendar date.
pub fn by_day(records: &[Record]) -> BTreeMap<NaiveDate, Vec<Record>> {
    let mut groups: BTreeMap<NaiveDate, Vec<Record>> = BTreeMap::new();
    for record in records {
        groups.entry(record.date).or_default().push(record.clone());
    }
    groups
}

/// Groups records by date, then by sender's first name within each date.
pub fn by_day_and_sender(
    records: &[Record],
) -> BTreeMap<NaiveDate, BTreeMap<String, Vec<Record>>> {
    let mut groups: BTreeMap<NaiveDate, BTreeMap<String, Vec<Record>>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.date)
            .or_default()
            .entry(record.first_name().to_string())
            .or_default()
            .push(record.clone());
    }
    groups
}

/// Detailed stats per sender.
///
/// # Errors
/// Propagates [`InsufficientData`](crate::ChatstatsError::InsufficientData)
/// from any partition whose day span is not positive, which only happens
/// when the export itself is out of order.
pub fn sender_stats(records: &[Record]) -> Result<BTreeMap<String, DetailedStats>> {
    let mut stats = BTreeMap::new();
    for (name, group) in by_sender(records) {
        stats.insert(name, DetailedStats::compute(&group)?);
    }
    Ok(stats)
}

/// Detailed stats per day.
///
/// Partitions share a single date, so their span is always one day and
/// `messages_per_day` equals the day's raw message count.
pub fn day_stats(records: &[Record]) -> Result<BTreeMap<NaiveDate, DetailedStats>> {
    let mut stats = BTreeMap::new();
    for (date, group) in by_day(records) {
        stats.insert(date, DetailedStats::compute(&group)?);
    }
    Ok(stats)
}

/// Detailed stats per sender within each day.
pub fn day_sender_stats(
    records: &[Record],
) -> Result<BTreeMap<NaiveDate, BTreeMap<String, DetailedStats>>> {
    let mut stats = BTreeMap::new();
    for (date, senders) in by_day_and_sender(records) {
        let mut per_sender = BTreeMap::new();
        for (name, group) in senders {
            per_sender.insert(name, DetailedStats::compute(&group)?);
        }
        stats.insert(date, per_sender);
    }
    Ok(stats)
}

/// Distinct participant names, sorted.
///
/// Uses first names by default; pass `full_names` to keep complete display
/// names (so two people sharing a first name stay distinct).
pub fn participants(records: &[Record], full_names: bool) -> Vec<String> {
    let mut names = BTreeSet::new();
    for record in records {
        let name = if full_names {
            record.sender.as_str()
        } else {
            record.first_name()
        };
        names.insert(name.to_string());
    }
    names.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn record(day: u32, sender: &str, text: &str) -> Record {
        Record::new(
            NaiveDate::from_ymd_opt(2021, 6, day).unwrap(),
            "7:45 pm",
            sender,
            text,
        )
    }

    #[test]
    fn test_by_sender_merges_on_first_name() {
        let records = vec![
            record(1, "Alice Smith", "hi"),
            record(1, "Bob", "hello"),
            record(2, "Alice Jones", "again"),
        ];
        let groups = by_sender(&records);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups["Alice"].len(), 2);
        assert_eq!(groups["Bob"].len(), 1);
        assert_eq!(groups["Alice"][1].text, "again");
    }

    #[test]
    fn test_by_sender_empty_name_key() {
        let records = vec![record(1, "", "anonymous")];
        let groups = by_sender(&records);
        assert_eq!(groups[""].len(), 1);
    }

    #[test]
    fn test_by_day_keys_sorted() {
        let records = vec![
            record(3, "Alice", "c"),
            record(1, "Alice", "a"),
            record(2, "Alice", "b"),
        ];
        let groups = by_day(&records);

        let dates: Vec<_> = groups.keys().map(|date| date.day()).collect();
        assert_eq!(dates, vec![1, 2, 3]);
    }

    #[test]
    fn test_by_day_and_sender_nesting() {
        let records = vec![
            record(1, "Alice", "a1"),
            record(1, "Bob", "b1"),
            record(2, "Alice", "a2"),
        ];
        let groups = by_day_and_sender(&records);

        let day1 = NaiveDate::from_ymd_opt(2021, 6, 1).unwrap();
        let day2 = NaiveDate::from_ymd_opt(2021, 6, 2).unwrap();
        assert_eq!(groups[&day1].len(), 2);
        assert_eq!(groups[&day1]["Alice"][0].text, "a1");
        assert_eq!(groups[&day2]["Alice"][0].text, "a2");
        assert!(!groups[&day2].contains_key("Bob"));
    }

    #[test]
    fn test_sender_stats_per_partition() {
        let records = vec![
            record(1, "Alice", "aaaa"),
            record(1, "Bob", "bb"),
            record(1, "Alice", "aaaaaa"),
        ];
        let stats = sender_stats(&records).unwrap();

        assert_eq!(stats["Alice"].chars_per_message, 5);
        assert_eq!(stats["Alice"].longest_message, 6);
        assert_eq!(stats["Bob"].chars_per_message, 2);
    }

    #[test]
    fn test_day_stats_span_is_one() {
        let records = vec![
            record(1, "Alice", "one two"),
            record(1, "Bob", "three"),
            record(4, "Alice", "x"),
        ];
        let stats = day_stats(&records).unwrap();

        let day1 = NaiveDate::from_ymd_opt(2021, 6, 1).unwrap();
        assert_eq!(stats[&day1].messages_per_day, 2);
        // 3 words / 2 messages truncates to 1, times 2 messages per day.
        assert_eq!(stats[&day1].words_per_message, 1);
        assert_eq!(stats[&day1].words_per_day, 2);
    }

    #[test]
    fn test_day_sender_stats() {
        let records = vec![
            record(1, "Alice", "hi there"),
            record(1, "Alice", "hello"),
            record(2, "Bob", "yo"),
        ];
        let stats = day_sender_stats(&records).unwrap();

        let day1 = NaiveDate::from_ymd_opt(2021, 6, 1).unwrap();
        let day2 = NaiveDate::from_ymd_opt(2021, 6, 2).unwrap();
        assert_eq!(stats[&day1]["Alice"].messages_per_day, 2);
        assert_eq!(stats[&day2]["Bob"].chars_per_message, 2);
    }

    #[test]
    fn test_out_of_order_partition_propagates_error() {
        // Alice's partition runs day 5 then day 1, a negative span.
        let records = vec![
            record(5, "Alice", "late"),
            record(3, "Bob", "middle"),
            record(1, "Alice", "early"),
        ];
        let err = sender_stats(&records).unwrap_err();
        assert!(err.is_insufficient_data());
    }

    #[test]
    fn test_participants_first_names() {
        let records = vec![
            record(1, "Alice Smith", "a"),
            record(1, "Bob Jones", "b"),
            record(2, "Alice Smith", "c"),
        ];
        assert_eq!(participants(&records, false), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_participants_full_names_keep_distinct_people() {
        let records = vec![
            record(1, "Alice Smith", "a"),
            record(1, "Alice Jones", "b"),
        ];
        assert_eq!(participants(&records, false), vec!["Alice"]);
        assert_eq!(
            participants(&records, true),
            vec!["Alice Jones", "Alice Smith"]
        );
    }

    #[test]
    fn test_empty_records_empty_groups() {
        assert!(by_sender(&[]).is_empty());
        assert!(by_day(&[]).is_empty());
        assert!(by_day_and_sender(&[]).is_empty());
        assert!(participants(&[], false).is_empty());
        assert!(sender_stats(&[]).unwrap().is_empty());
    }
}
