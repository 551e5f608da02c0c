//! Command-line interface definition using clap.
//!
//! This module defines [`Args`], the argument structure for the `chatstats`
//! binary. The format enum it references is [`ReportFormat`] from
//! [`crate::report`].

use clap::Parser;

use crate::report::{ReportConfig, ReportFormat};

/// Parse a WhatsApp chat export and report descriptive statistics.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats chat_export.txt
    chatstats chat_export.txt --senders --links
    chatstats chat_export.txt --all --format json -o report.json
    chatstats chat_export.txt --participants --full-names
    chatstats chat_export.txt --records records.csv")]
pub struct Args {
    /// Path to the exported chat TXT file
    pub input: String,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Also export the assembled records to this file (text format maps to CSV)
    #[arg(long, value_name = "PATH")]
    pub records: Option<String>,

    /// Include per-sender stats
    #[arg(long)]
    pub senders: bool,

    /// Include per-day stats
    #[arg(long)]
    pub days: bool,

    /// Include per-sender stats within each day
    #[arg(long)]
    pub day_senders: bool,

    /// Include link-domain counts
    #[arg(long)]
    pub links: bool,

    /// Include the participant list
    #[arg(long)]
    pub participants: bool,

    /// List complete names instead of first names
    #[arg(long)]
    pub full_names: bool,

    /// Enable every report section
    #[arg(long)]
    pub all: bool,
}

impl Args {
    /// Builds the report configuration the section flags describe.
    pub fn report_config(&self) -> ReportConfig {
        let mut config = ReportConfig::new();
        if self.all {
            config = config.all();
        }
        if self.senders {
            config = config.with_senders();
        }
        if self.days {
            config = config.with_days();
        }
        if self.day_senders {
            config = config.with_day_senders();
        }
        if self.links {
            config = config.with_links();
        }
        if self.participants {
            config = config.with_participants();
        }
        if self.full_names {
            config = config.with_full_names();
        }
        config
    }
}
