//! Descriptive statistics over assembled records.
//!
//! This module contains:
//! - [`basic`] - Whole-sequence counts
//! - [`detailed`] - Truncated per-day and per-message rates
//! - [`groups`] - Partitioning by sender, by day, or both
//! - [`links`] - Shared-link domain frequency
//!
//! Everything here takes `&[Record]` and never mutates; aggregation is
//! plain arithmetic once assembly has produced the record sequence.
//!
//! # Quick Start
//!
//! ```rust
//! use chatstats::ChatParser;
//! use chatstats::stats::{BasicStats, domain_counts};
//!
//! let records = ChatParser::new()
//!     .parse_str("01/01/2020, 9:00 am - Alice: see https://sub.co/x");
//!
//! let basic = BasicStats::compute(&records)?;
//! assert_eq!(basic.messages, 1);
//! assert_eq!(domain_counts(&records)["sub"], 1);
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

pub mod basic;
pub mod detailed;
pub mod groups;
pub mod links;

pub use basic::BasicStats;
pub use detailed::DetailedStats;
pub use groups::{
    by_day, by_day_and_sender, by_sender, day_sender_stats, day_stats, participants, sender_stats,
};
pub use links::{domain_counts, extract_domain};
