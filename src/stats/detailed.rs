//! Derived per-day and per-message rates.

use serde::{Deserialize, Serialize};

use crate::error::{ChatstatsError, Result};
use crate::record::Record;
use crate::stats::basic::BasicStats;

/// Integer-truncated averages derived from [`BasicStats`].
///
/// Every rate uses truncating division. The per-day character and word
/// rates are products of the already-truncated factors rather than direct
/// ratios, so they can undershoot the true averages; keep that in mind when
/// comparing against externally computed numbers.
///
/// # Example
///
/// ```rust
/// use chatstats::{ChatParser, stats::DetailedStats};
///
/// let records = ChatParser::new().parse_str(
///     "01/01/2020, 9:00 am - Alice: Hello\n\
///      01/01/2020, 9:01 am - Bob: Hi there",
/// );
/// let detailed = DetailedStats::compute(&records)?;
///
/// assert_eq!(detailed.messages_per_day, 2);
/// assert_eq!(detailed.longest_message, 8);
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedStats {
    /// Messages per day of chat span.
    pub messages_per_day: u64,
    /// Characters per message.
    pub chars_per_message: u64,
    /// Characters per day, computed as `messages_per_day * chars_per_message`.
    pub chars_per_day: u64,
    /// Words per message.
    pub words_per_message: u64,
    /// Words per day, computed as `words_per_message * messages_per_day`.
    pub words_per_day: u64,
    /// Media messages per day of chat span.
    pub media_per_day: u64,
    /// Character count of the longest message.
    pub longest_message: u64,
}

impl DetailedStats {
    /// Computes truncated rates over `records`.
    ///
    /// # Errors
    /// Returns [`ChatstatsError::InsufficientData`] when the sequence is
    /// empty or its day span is not positive (an out-of-order export).
    pub fn compute(records: &[Record]) -> Result<Self> {
        let basic = BasicStats::compute(records)?;

        // BasicStats::compute rejects empty input, so messages >= 1 here;
        // only the span still needs guarding.
        let span_days = match u64::try_from(basic.span_days) {
            Ok(days) if days > 0 => days,
            _ => {
                return Err(ChatstatsError::insufficient_data(format!(
                    "day span {} is not positive; is the export out of order?",
                    basic.span_days
                )));
            }
        };

        let messages_per_day = basic.messages / span_days;
        let chars_per_message = basic.characters / basic.messages;
        let words_per_message = basic.words / basic.messages;

        let longest_message = records
            .iter()
            .map(|record| record.char_count() as u64)
            .max()
            .unwrap_or(0);

        Ok(Self {
            messages_per_day,
            chars_per_message,
            chars_per_day: messages_per_day * chars_per_message,
            words_per_message,
            words_per_day: words_per_message * messages_per_day,
            media_per_day: basic.media / span_days,
            longest_message,
        })
    }
}
