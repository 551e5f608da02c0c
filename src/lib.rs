//! # chatstats
//!
//! A Rust library for parsing WhatsApp-style chat log exports and computing
//! descriptive statistics over them.
//!
//! ## Overview
//!
//! The export format is line-oriented: each message starts with a
//! `DD/MM/YYYY, H:MM am - Name: text` prefix, long messages wrap onto plain
//! continuation lines, and group notices carry a timestamp without a
//! sender/message pair. chatstats reconstructs logical messages from those
//! lines, then computes counts, truncated rates, per-sender and per-day
//! breakdowns, participant lists, and shared-link domain frequency.
//!
//! Parsing is tolerant on purpose: group notices and orphan continuation
//! lines are dropped silently rather than reported, mirroring how the
//! exports themselves are malformed in practice.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let parser = ChatParser::new();
//!     let records = parser.parse_str(
//!         "01/01/2020, 9:00 am - Alice: Hello\n\
//!          there\n\
//!          01/01/2020, 9:01 am - Bob: <Media omitted>",
//!     );
//!
//!     let basic = BasicStats::compute(&records)?;
//!     assert_eq!(basic.messages, 2);
//!     assert_eq!(basic.media, 1);
//!
//!     let report = Report::build(&records, &ReportConfig::new().all())?;
//!     println!("{}", render_text(&report));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`classify`] — [`LineClassifier`](classify::LineClassifier) and the
//!   [`ClassifiedLine`](classify::ClassifiedLine) line taxonomy
//! - [`parser`] — [`ChatParser`], assembling records from files, readers,
//!   or strings
//! - [`record`] — [`Record`], the merged message unit
//! - [`stats`] — [`BasicStats`](stats::BasicStats),
//!   [`DetailedStats`](stats::DetailedStats), groupings, link domains
//! - [`report`] — [`Report`], [`ReportConfig`], renderers and writers
//! - [`cli`] — CLI argument types (requires the `cli` feature)
//! - [`error`] — Unified error types ([`ChatstatsError`], [`Result`])
//! - [`prelude`] — Convenient re-exports

pub mod classify;
#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod parser;
pub mod record;
pub mod report;
pub mod stats;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatsError, Result};
pub use parser::ChatParser;
pub use record::{MEDIA_PLACEHOLDER, Record};
pub use report::{Report, ReportConfig, ReportFormat, render_text};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{ChatstatsError, Result};

    // Parsing
    pub use crate::classify::{ClassifiedLine, LineClassifier};
    pub use crate::parser::ChatParser;
    pub use crate::record::{MEDIA_PLACEHOLDER, Record};

    // Aggregation
    pub use crate::stats::{
        BasicStats, DetailedStats, by_day, by_day_and_sender, by_sender, day_sender_stats,
        day_stats, domain_counts, extract_domain, participants, sender_stats,
    };

    // Reports (rendering and format dispatch)
    pub use crate::report::{
        Report, ReportConfig, ReportFormat, render, render_text, write_records, write_report,
    };

    // Writers and string converters
    #[cfg(feature = "csv-output")]
    pub use crate::report::{records_to_csv, to_csv, write_csv, write_records_csv};
    #[cfg(feature = "json-output")]
    pub use crate::report::{records_to_json, to_json, write_json, write_records_json};
}
