//! CSV report and record writers.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::Result;
use crate::record::Record;
use crate::report::Report;
use crate::stats::DetailedStats;

const STATS_HEADER: [&str; 8] = [
    "Sender",
    "Messages/Day",
    "Chars/Message",
    "Chars/Day",
    "Words/Message",
    "Words/Day",
    "Media/Day",
    "Longest",
];

const RECORDS_HEADER: [&str; 4] = ["Date", "Time", "Sender", "Text"];

/// Writes a report to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Sender`, `Messages/Day`, `Chars/Message`, `Chars/Day`,
///   `Words/Message`, `Words/Day`, `Media/Day`, `Longest`
/// - The first data row is the whole-chat `(overall)` entry; one row per
///   sender follows when the report carries the senders section.
/// - Encoding: UTF-8
pub fn write_csv(report: &Report, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    write_report(report, file)
}

/// Converts a report to a CSV string.
///
/// Same format as `write_csv`, but returns a String instead of writing to
/// a file.
pub fn to_csv(report: &Report) -> Result<String> {
    let mut buf = Vec::new();
    write_report(report, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes assembled records to CSV with semicolon delimiter.
///
/// Columns: `Date`, `Time`, `Sender`, `Text`. Texts holding line breaks or
/// semicolons come out quoted.
pub fn write_records_csv(records: &[Record], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(records, file)
}

/// Converts assembled records to a CSV string.
pub fn records_to_csv(records: &[Record]) -> Result<String> {
    let mut buf = Vec::new();
    write_records(records, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_report<W: io::Write>(report: &Report, wtr: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(wtr);

    writer.write_record(STATS_HEADER)?;
    writer.write_record(build_row("(overall)", &report.detailed))?;

    if let Some(senders) = &report.senders {
        for (name, stats) in senders {
            writer.write_record(build_row(name, stats))?;
        }
    }

    writer.flush()?;
    Ok(())
}

fn write_records<W: io::Write>(records: &[Record], wtr: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(wtr);

    writer.write_record(RECORDS_HEADER)?;
    for record in records {
        writer.write_record([
            record.date.to_string(),
            record.time.clone(),
            record.sender.clone(),
            record.text.clone(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Builds one stats row for a named partition.
fn build_row(name: &str, stats: &DetailedStats) -> Vec<String> {
    vec![
        name.to_string(),
        stats.messages_per_day.to_string(),
        stats.chars_per_message.to_string(),
        stats.chars_per_day.to_string(),
        stats.words_per_message.to_string(),
        stats.words_per_day.to_string(),
        stats.media_per_day.to_string(),
        stats.longest_message.to_string(),
    ]
}
