//! Report assembly and rendering.
//!
//! A [`Report`] bundles the aggregate results for one parsed chat log. The
//! overall counts and rates are always present; every other section is
//! opt-in through [`ReportConfig`]. Renderers and writers:
//! - [`render_text`] - plain-text rendering
//! - [`write_json`] / [`to_json`] - pretty JSON - requires `json-output`
//! - [`write_csv`] / [`to_csv`] - semicolon CSV of per-sender stats - requires `csv-output`
//! - [`write_records_json`] / [`write_records_csv`] - the assembled records
//!   themselves, as data
//!
//! # Example
//!
//! ```rust
//! use chatstats::{ChatParser, Report, ReportConfig, render_text};
//!
//! let records = ChatParser::new().parse_str(
//!     "01/01/2020, 9:00 am - Alice: see https://sub.co/x\n\
//!      01/01/2020, 9:01 am - Bob: <Media omitted>",
//! );
//!
//! let config = ReportConfig::new().with_links().with_participants();
//! let report = Report::build(&records, &config)?;
//!
//! let text = render_text(&report);
//! assert!(text.contains("messages:"));
//! assert!(text.contains("sub: 1"));
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::Record;
use crate::stats::{
    BasicStats, DetailedStats, day_sender_stats, day_stats, domain_counts, participants,
    sender_stats,
};

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{records_to_csv, to_csv, write_csv, write_records_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{records_to_json, to_json, write_json, write_records_json};

// ============================================================================
// Configuration
// ============================================================================

/// Output format for a rendered report.
///
/// Available without clap; the `ValueEnum` derive is only attached when
/// the `cli` feature is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ReportFormat {
    /// Human-readable text (default).
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// Semicolon-delimited CSV of per-sender stats.
    Csv,
}

impl ReportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json", "csv"]
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "JSON"),
            ReportFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ReportFormat::all_names().join(", ")
            )),
        }
    }
}

/// Controls which sections a [`Report`] carries beyond the overall stats.
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    /// Include per-sender detailed stats.
    pub include_senders: bool,
    /// Include per-day detailed stats.
    pub include_days: bool,
    /// Include per-sender stats nested within each day.
    pub include_day_senders: bool,
    /// Include link-domain counts.
    pub include_links: bool,
    /// Include the participant list.
    pub include_participants: bool,
    /// List complete display names instead of first names.
    pub full_names: bool,
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_senders(mut self) -> Self {
        self.include_senders = true;
        self
    }

    pub fn with_days(mut self) -> Self {
        self.include_days = true;
        self
    }

    pub fn with_day_senders(mut self) -> Self {
        self.include_day_senders = true;
        self
    }

    pub fn with_links(mut self) -> Self {
        self.include_links = true;
        self
    }

    pub fn with_participants(mut self) -> Self {
        self.include_participants = true;
        self
    }

    pub fn with_full_names(mut self) -> Self {
        self.full_names = true;
        self
    }

    /// Enables every optional section. Name style (`full_names`) is left
    /// as-is; it selects how participants are listed, not whether.
    pub fn all(mut self) -> Self {
        self.include_senders = true;
        self.include_days = true;
        self.include_day_senders = true;
        self.include_links = true;
        self.include_participants = true;
        self
    }
}

// ============================================================================
// Report
// ============================================================================

/// Aggregate results for one parsed chat log.
///
/// Omitted sections serialize as absent rather than null or empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Whole-chat counts.
    pub basic: BasicStats,
    /// Whole-chat truncated rates.
    pub detailed: DetailedStats,
    /// Per-sender rates, keyed by first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub senders: Option<BTreeMap<String, DetailedStats>>,
    /// Per-day rates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<BTreeMap<NaiveDate, DetailedStats>>,
    /// Per-sender rates within each day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_senders: Option<BTreeMap<NaiveDate, BTreeMap<String, DetailedStats>>>,
    /// Link-domain label counts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<BTreeMap<String, u64>>,
    /// Distinct participant names, sorted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<String>>,
}

impl Report {
    /// Assembles a report over `records` with the sections `config` asks
    /// for.
    ///
    /// # Errors
    /// Returns [`InsufficientData`](crate::ChatstatsError::InsufficientData)
    /// when the sequence is empty or a day span is not positive.
    pub fn build(records: &[Record], config: &ReportConfig) -> Result<Self> {
        Ok(Self {
            basic: BasicStats::compute(records)?,
            detailed: DetailedStats::compute(records)?,
            senders: if config.include_senders {
                Some(sender_stats(records)?)
            } else {
                None
            },
            days: if config.include_days {
                Some(day_stats(records)?)
            } else {
                None
            },
            day_senders: if config.include_day_senders {
                Some(day_sender_stats(records)?)
            } else {
                None
            },
            links: if config.include_links {
                Some(domain_counts(records))
            } else {
                None
            },
            participants: if config.include_participants {
                Some(participants(records, config.full_names))
            } else {
                None
            },
        })
    }
}

// ============================================================================
// Text rendering
// ============================================================================

/// Renders a report as plain text, one section per enabled part.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();

    out.push_str("Overall\n");
    out.push_str(&format!("  messages:        {}\n", report.basic.messages));
    out.push_str(&format!("  day span:        {}\n", report.basic.span_days));
    out.push_str(&format!("  characters:      {}\n", report.basic.characters));
    out.push_str(&format!("  words:           {}\n", report.basic.words));
    out.push_str(&format!("  media:           {}\n", report.basic.media));
    out.push_str(&format!(
        "  longest message: {}\n",
        report.detailed.longest_message
    ));
    out.push_str(&format!(
        "  per day:         {} messages, {} chars, {} words, {} media\n",
        report.detailed.messages_per_day,
        report.detailed.chars_per_day,
        report.detailed.words_per_day,
        report.detailed.media_per_day,
    ));
    out.push_str(&format!(
        "  per message:     {} chars, {} words\n",
        report.detailed.chars_per_message, report.detailed.words_per_message,
    ));

    if let Some(senders) = &report.senders {
        out.push_str("\nSenders\n");
        for (name, stats) in senders {
            out.push_str(&format!("  {name}: {}\n", detail_line(stats)));
        }
    }

    if let Some(days) = &report.days {
        out.push_str("\nDays\n");
        for (date, stats) in days {
            out.push_str(&format!("  {date}: {}\n", detail_line(stats)));
        }
    }

    if let Some(day_senders) = &report.day_senders {
        out.push_str("\nDays by sender\n");
        for (date, senders) in day_senders {
            out.push_str(&format!("  {date}\n"));
            for (name, stats) in senders {
                out.push_str(&format!("    {name}: {}\n", detail_line(stats)));
            }
        }
    }

    if let Some(links) = &report.links {
        out.push_str("\nLink domains\n");
        for (domain, count) in links {
            out.push_str(&format!("  {domain}: {count}\n"));
        }
    }

    if let Some(participants) = &report.participants {
        out.push_str(&format!("\nParticipants ({})\n", participants.len()));
        for name in participants {
            out.push_str(&format!("  {name}\n"));
        }
    }

    out
}

fn detail_line(stats: &DetailedStats) -> String {
    format!(
        "{} msg/day, {} chars/msg, {} chars/day, {} words/msg, {} words/day, {} media/day, longest {}",
        stats.messages_per_day,
        stats.chars_per_message,
        stats.chars_per_day,
        stats.words_per_message,
        stats.words_per_day,
        stats.media_per_day,
        stats.longest_message,
    )
}

// ============================================================================
// Format dispatch
// ============================================================================

/// Renders a report as a string in the selected format.
///
/// # Errors
/// Returns [`UnsupportedFormat`](crate::ChatstatsError::UnsupportedFormat)
/// when the format's writer is not compiled in.
pub fn render(report: &Report, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        #[cfg(feature = "json-output")]
        ReportFormat::Json => to_json(report),
        #[cfg(feature = "csv-output")]
        ReportFormat::Csv => to_csv(report),
        #[allow(unreachable_patterns)]
        other => Err(feature_error(other)),
    }
}

/// Writes a report to a file in the selected format.
///
/// # Errors
/// Returns [`UnsupportedFormat`](crate::ChatstatsError::UnsupportedFormat)
/// when the format's writer is not compiled in.
pub fn write_report(report: &Report, output_path: &Path, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Text => {
            std::fs::write(output_path, render_text(report))?;
            Ok(())
        }
        #[cfg(feature = "json-output")]
        ReportFormat::Json => write_json(report, output_path),
        #[cfg(feature = "csv-output")]
        ReportFormat::Csv => write_csv(report, output_path),
        #[allow(unreachable_patterns)]
        other => Err(feature_error(other)),
    }
}

/// Writes assembled records to a file as data. `Text` maps to CSV.
///
/// # Errors
/// Returns [`UnsupportedFormat`](crate::ChatstatsError::UnsupportedFormat)
/// when the format's writer is not compiled in.
#[allow(unused_variables)]
pub fn write_records(records: &[Record], output_path: &Path, format: ReportFormat) -> Result<()> {
    match format {
        #[cfg(feature = "json-output")]
        ReportFormat::Json => write_records_json(records, output_path),
        #[cfg(feature = "csv-output")]
        ReportFormat::Text | ReportFormat::Csv => write_records_csv(records, output_path),
        #[allow(unreachable_patterns)]
        other => Err(feature_error(other)),
    }
}

fn feature_error(format: ReportFormat) -> crate::ChatstatsError {
    let feature = match format {
        ReportFormat::Json => "json-output",
        ReportFormat::Text | ReportFormat::Csv => "csv-output",
    };
    crate::ChatstatsError::unsupported_format(format!(
        "{format} output requires the '{feature}' feature"
    ))
}
