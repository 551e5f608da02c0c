//! Whole-sequence counting statistics.

use serde::{Deserialize, Serialize};

use crate::error::{ChatstatsError, Result};
use crate::record::Record;

/// Raw counts over an assembled record sequence.
///
/// All fields are totals; the derived rates live in
/// [`DetailedStats`](crate::stats::DetailedStats).
///
/// # Example
///
/// ```rust
/// use chatstats::{ChatParser, stats::BasicStats};
///
/// let records = ChatParser::new().parse_str(
///     "01/01/2020, 9:00 am - Alice: Hello\n\
///      there\n\
///      01/01/2020, 9:01 am - Bob: <Media omitted>",
/// );
/// let basic = BasicStats::compute(&records)?;
///
/// assert_eq!(basic.messages, 2);
/// assert_eq!(basic.media, 1);
/// assert_eq!(basic.span_days, 1);
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicStats {
    /// Number of records in the sequence.
    pub messages: u64,
    /// Inclusive day span between the first and last record, in sequence
    /// order. An out-of-order export can make this zero or negative.
    pub span_days: i64,
    /// Total characters across all message texts, spaces included.
    pub characters: u64,
    /// Total whitespace-separated words across all message texts.
    pub words: u64,
    /// Records whose text is exactly the media placeholder.
    pub media: u64,
}

impl BasicStats {
    /// Computes counts over `records`.
    ///
    /// # Errors
    /// Returns [`ChatstatsError::InsufficientData`] for an empty sequence,
    /// so downstream rate calculations never divide by a zero message
    /// count.
    pub fn compute(records: &[Record]) -> Result<Self> {
        let (first, last) = match (records.first(), records.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                return Err(ChatstatsError::insufficient_data(
                    "no messages in the chat log",
                ));
            }
        };

        let span_days = (last.date - first.date).num_days() + 1;

        let mut characters = 0;
        let mut words = 0;
        let mut media = 0;
        for record in records {
            characters += record.char_count() as u64;
            words += record.word_count() as u64;
            if record.is_media() {
                media += 1;
            }
        }

        Ok(Self {
            messages: records.len() as u64,
            span_days,
            characters,
            words,
            media,
        })
    }
}
