//! JSON report and record writers.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::record::Record;
use crate::report::Report;

/// Writes a report to a file as pretty-printed JSON.
pub fn write_json(report: &Report, output_path: &Path) -> Result<()> {
    let json = to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts a report to a pretty-printed JSON string.
///
/// Sections the report does not carry are absent keys, not nulls, so
/// consumers can feature-detect by key presence.
pub fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Writes assembled records to a file as a JSON array.
pub fn write_records_json(records: &[Record], output_path: &Path) -> Result<()> {
    let json = records_to_json(records)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts assembled records to a JSON array string.
///
/// # Format
/// ```json
/// [
///   {"date": "2020-01-01", "time": "9:00 am", "sender": "Alice", "text": "Hello"}
/// ]
/// ```
pub fn records_to_json(records: &[Record]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
