//! Line classification for WhatsApp TXT exports.
//!
//! Exports put one logical entry per physical line only when the message is
//! short; longer messages wrap onto following lines with no timestamp prefix.
//! The classifier looks at a single line and decides which of three shapes it
//! has:
//!
//! - `01/01/2020, 9:00 am - Alice: Hello` → a new message
//! - `01/01/2020, 9:05 am - Alice added Bob` → a system event (timestamp but
//!   no `name: text` pair)
//! - `there` → a continuation fragment of the previous message
//!
//! "No timestamp" is the distinguishing signal for continuations, so a
//! continuation line that happens to contain date-like and time-like
//! substrings is misclassified as a new record or system event. That is a
//! known limitation of the grammar, kept deliberately.

use chrono::NaiveDate;
use regex::Regex;

/// Date token: strictly two/two/four digits, `DD/MM/YYYY`.
const DATE_PATTERN: &str = r"\d{2}/\d{2}/\d{4}";

/// Time token: 12-hour clock with a lowercase meridiem, e.g. `9:00 am`.
const TIME_PATTERN: &str = r"\d+:\d{2}\s[ap]m";

/// Sender and message: ` - <name>: <text>`, name non-greedy up to the first
/// colon, text to end of line.
const ENTRY_PATTERN: &str = r"\s-\s(.*?):\s(.+)";

/// chrono format string matching [`DATE_PATTERN`].
const DATE_FORMAT: &str = "%d/%m/%Y";

/// Classification of one raw export line.
///
/// Borrows from the line it was produced from, so a `ClassifiedLine` can only
/// live as long as the line itself. The assembler consumes it immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClassifiedLine<'a> {
    /// A line that opens a new record: full timestamp plus `name: text`.
    NewMessage {
        /// Parsed calendar date from the `DD/MM/YYYY` token.
        date: NaiveDate,
        /// Raw matched time string, e.g. `"9:00 am"`.
        time: &'a str,
        /// Captured sender name (exactly as captured, possibly empty).
        sender: &'a str,
        /// Captured message text up to end of line.
        text: &'a str,
    },
    /// A timestamped line with no structured sender/message pair, such as a
    /// membership notice. Dropped by the assembler.
    SystemEvent,
    /// A line with no timestamp: the wrapped remainder of the previous
    /// message. Carries the whole raw line.
    Continuation {
        /// The entire line, terminator already stripped.
        text: &'a str,
    },
}

/// Classifies raw export lines against the fixed line grammar.
///
/// Compiles its regexes once at construction; [`classify`](Self::classify)
/// itself allocates nothing.
///
/// # Example
///
/// ```rust
/// use chatstats::classify::{ClassifiedLine, LineClassifier};
///
/// let classifier = LineClassifier::new();
/// match classifier.classify("01/01/2020, 9:00 am - Alice: Hello") {
///     ClassifiedLine::NewMessage { sender, text, .. } => {
///         assert_eq!(sender, "Alice");
///         assert_eq!(text, "Hello");
///     }
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
pub struct LineClassifier {
    date: Regex,
    time: Regex,
    entry: Regex,
}

impl LineClassifier {
    /// Creates a classifier with the export grammar compiled.
    pub fn new() -> Self {
        Self {
            date: Regex::new(DATE_PATTERN).unwrap(),
            time: Regex::new(TIME_PATTERN).unwrap(),
            entry: Regex::new(ENTRY_PATTERN).unwrap(),
        }
    }

    /// Classifies one line, terminator already stripped.
    ///
    /// Decision order:
    /// 1. date, time, and `name: text` all present, date is a real calendar
    ///    date → [`ClassifiedLine::NewMessage`]
    /// 2. date and time present but no `name: text` pair, or the date does
    ///    not exist on the calendar → [`ClassifiedLine::SystemEvent`]
    /// 3. otherwise → [`ClassifiedLine::Continuation`]
    pub fn classify<'a>(&self, line: &'a str) -> ClassifiedLine<'a> {
        match (self.date.find(line), self.time.find(line)) {
            (Some(date), Some(time)) => {
                match (
                    self.entry.captures(line),
                    NaiveDate::parse_from_str(date.as_str(), DATE_FORMAT),
                ) {
                    (Some(caps), Ok(parsed)) => ClassifiedLine::NewMessage {
                        date: parsed,
                        time: time.as_str(),
                        sender: caps.get(1).map_or("", |m| m.as_str()),
                        text: caps.get(2).map_or("", |m| m.as_str()),
                    },
                    _ => ClassifiedLine::SystemEvent,
                }
            }
            _ => ClassifiedLine::Continuation { text: line },
        }
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(line: &str) -> ClassifiedLine<'_> {
        LineClassifier::new().classify(line)
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_message_line() {
        assert_eq!(
            classify("01/01/2020, 9:00 am - Alice: Hello"),
            ClassifiedLine::NewMessage {
                date: ymd(2020, 1, 1),
                time: "9:00 am",
                sender: "Alice",
                text: "Hello",
            }
        );
    }

    #[test]
    fn test_new_message_multiword_sender() {
        assert_eq!(
            classify("15/06/2021, 11:42 pm - Alice Smith: see you"),
            ClassifiedLine::NewMessage {
                date: ymd(2021, 6, 15),
                time: "11:42 pm",
                sender: "Alice Smith",
                text: "see you",
            }
        );
    }

    #[test]
    fn test_message_text_keeps_later_colons() {
        // The sender ends at the first colon; everything after belongs
        // to the message, further `: ` sequences included.
        assert_eq!(
            classify("01/01/2020, 9:00 am - Alice: note: buy milk"),
            ClassifiedLine::NewMessage {
                date: ymd(2020, 1, 1),
                time: "9:00 am",
                sender: "Alice",
                text: "note: buy milk",
            }
        );
    }

    #[test]
    fn test_plain_text_is_continuation() {
        assert_eq!(
            classify("just a wrapped line"),
            ClassifiedLine::Continuation {
                text: "just a wrapped line"
            }
        );
    }

    #[test]
    fn test_empty_line_is_continuation() {
        assert_eq!(classify(""), ClassifiedLine::Continuation { text: "" });
    }

    #[test]
    fn test_membership_notice_is_system_event() {
        assert_eq!(
            classify("01/01/2020, 9:05 am - Alice added Bob"),
            ClassifiedLine::SystemEvent
        );
    }

    #[test]
    fn test_encryption_notice_is_system_event() {
        assert_eq!(
            classify(
                "05/03/2020, 7:12 pm - Messages to this group are now \
                 secured with end-to-end encryption."
            ),
            ClassifiedLine::SystemEvent
        );
    }

    #[test]
    fn test_timestamp_without_message_text_is_system_event() {
        // `name:` with nothing after the colon has no message token.
        assert_eq!(
            classify("01/01/2020, 9:00 am - Alice:"),
            ClassifiedLine::SystemEvent
        );
        assert_eq!(
            classify("01/01/2020, 9:00 am - Alice: "),
            ClassifiedLine::SystemEvent
        );
    }

    #[test]
    fn test_impossible_calendar_date_is_system_event() {
        assert_eq!(
            classify("31/02/2020, 9:00 am - Alice: Hello"),
            ClassifiedLine::SystemEvent
        );
        assert_eq!(
            classify("29/02/2021, 9:00 am - Alice: Hello"),
            ClassifiedLine::SystemEvent
        );
    }

    #[test]
    fn test_leap_day_is_valid() {
        assert_eq!(
            classify("29/02/2020, 9:00 am - Alice: leap!"),
            ClassifiedLine::NewMessage {
                date: ymd(2020, 2, 29),
                time: "9:00 am",
                sender: "Alice",
                text: "leap!",
            }
        );
    }

    #[test]
    fn test_date_without_time_is_continuation() {
        assert_eq!(
            classify("01/01/2020 - Alice: hi"),
            ClassifiedLine::Continuation {
                text: "01/01/2020 - Alice: hi"
            }
        );
    }

    #[test]
    fn test_time_without_date_is_continuation() {
        assert_eq!(
            classify("at 9:00 am - Alice: hi"),
            ClassifiedLine::Continuation {
                text: "at 9:00 am - Alice: hi"
            }
        );
    }

    #[test]
    fn test_uppercase_meridiem_not_matched() {
        // The grammar only accepts a lowercase am/pm.
        assert_eq!(
            classify("01/01/2020, 9:00 AM - Alice: hi"),
            ClassifiedLine::Continuation {
                text: "01/01/2020, 9:00 AM - Alice: hi"
            }
        );
    }

    #[test]
    fn test_two_digit_year_not_matched() {
        assert_eq!(
            classify("01/01/20, 9:00 am - Alice: hi"),
            ClassifiedLine::Continuation {
                text: "01/01/20, 9:00 am - Alice: hi"
            }
        );
    }

    #[test]
    fn test_continuation_with_embedded_timestamp_misclassifies() {
        // Known limitation: a wrapped line that contains a full timestamp
        // and a `name: text` shape reads as a new message.
        assert_eq!(
            classify("we met on 01/01/2020, 9:00 am - Dr. Smith: confirmed"),
            ClassifiedLine::NewMessage {
                date: ymd(2020, 1, 1),
                time: "9:00 am",
                sender: "Dr. Smith",
                text: "confirmed",
            }
        );
    }

    #[test]
    fn test_media_placeholder_line() {
        assert_eq!(
            classify("01/01/2020, 9:01 am - Bob: <Media omitted>"),
            ClassifiedLine::NewMessage {
                date: ymd(2020, 1, 1),
                time: "9:01 am",
                sender: "Bob",
                text: "<Media omitted>",
            }
        );
    }

    #[test]
    fn test_unicode_sender_and_text() {
        assert_eq!(
            classify("03/04/2022, 2:15 pm - Мария: Привет 🌍"),
            ClassifiedLine::NewMessage {
                date: ymd(2022, 4, 3),
                time: "2:15 pm",
                sender: "Мария",
                text: "Привет 🌍",
            }
        );
    }
}
