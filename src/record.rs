//! The message record type produced by assembly.
//!
//! This module provides [`Record`], one logical chat message after
//! continuation lines have been folded back into it. The parser emits records
//! in export order; the statistics layer consumes them read-only.
//!
//! # Overview
//!
//! A record consists of four required fields:
//! - `date`: the calendar date the message was sent
//! - `time`: the send time, kept as the raw matched string (e.g. `"9:41 pm"`)
//! - `sender`: the display name from the export (may be empty, never absent)
//! - `text`: the message body, with `\n` joins where the export wrapped it
//!
//! # Examples
//!
//! ```
//! use chatstats::Record;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
//! let rec = Record::new(date, "9:00 am", "Alice Smith", "Hello\nthere");
//! assert_eq!(rec.sender(), "Alice Smith");
//! assert_eq!(rec.first_name(), "Alice");
//! assert_eq!(rec.char_count(), 11);
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatstats::Record;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
//! let rec = Record::new(date, "9:00 am", "Alice", "Hello!");
//! let json = serde_json::to_string(&rec)?;
//! let parsed: Record = serde_json::from_str(&json)?;
//!
//! assert_eq!(rec, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The exact placeholder WhatsApp substitutes for an attachment.
///
/// Media counting matches against this literal with `==`, never a pattern.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// One logical chat message from an export.
///
/// Every record in an assembled sequence carries a valid date, a time string,
/// and a sender; `text` may be empty but is never absent. While the parser is
/// still running, the last record's `text` can grow as wrapped lines are
/// folded in; once assembly returns, records are plain immutable data.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `date` | `NaiveDate` | Calendar date parsed from the `DD/MM/YYYY` token |
/// | `time` | `String` | Raw matched time, e.g. `"9:00 am"` |
/// | `sender` | `String` | Display name of the message author |
/// | `text` | `String` | Message body, `\n`-joined if it wrapped |
///
/// # Construction
///
/// ```
/// use chatstats::Record;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let rec = Record::new(date, "9:01 am", "Bob", "<Media omitted>");
/// assert!(rec.is_media());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Calendar date the message was sent.
    pub date: NaiveDate,

    /// Send time as matched in the export, e.g. `"9:00 am"`.
    ///
    /// Kept as a free-form string; the export's 12-hour clock carries no
    /// timezone and the statistics layer never needs it as a number.
    pub time: String,

    /// Display name of the message author.
    pub sender: String,

    /// Text content of the message.
    ///
    /// Multi-line messages are joined with `\n`. Attachments appear as the
    /// [`MEDIA_PLACEHOLDER`] literal.
    pub text: String,
}

impl Record {
    /// Creates a record from its four fields.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstats::Record;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    /// let rec = Record::new(date, "9:00 am", "Alice", "Hello");
    /// assert_eq!(rec.text(), "Hello");
    /// ```
    pub fn new(
        date: NaiveDate,
        time: impl Into<String>,
        sender: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            date,
            time: time.into(),
            sender: sender.into(),
            text: text.into(),
        }
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the raw time string.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Returns `true` if the text is exactly the media placeholder.
    ///
    /// ```
    /// use chatstats::Record;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    /// assert!(Record::new(date, "9:00 am", "Bob", "<Media omitted>").is_media());
    /// assert!(!Record::new(date, "9:00 am", "Bob", "<media omitted>").is_media());
    /// ```
    pub fn is_media(&self) -> bool {
        self.text == MEDIA_PLACEHOLDER
    }

    /// Returns the number of Unicode scalar values in the text.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns the number of whitespace-separated words in the text.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Returns the first whitespace-delimited token of the sender name.
    ///
    /// Empty or whitespace-only senders yield `""`; grouping treats that as
    /// its own key rather than failing.
    pub fn first_name(&self) -> &str {
        self.sender.split_whitespace().next().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
    }

    #[test]
    fn test_record_new() {
        let rec = Record::new(date(), "9:00 am", "Alice", "Hello");
        assert_eq!(rec.date(), date());
        assert_eq!(rec.time(), "9:00 am");
        assert_eq!(rec.sender(), "Alice");
        assert_eq!(rec.text(), "Hello");
    }

    #[test]
    fn test_is_media_exact_match_only() {
        assert!(Record::new(date(), "9:00 am", "Bob", MEDIA_PLACEHOLDER).is_media());
        assert!(!Record::new(date(), "9:00 am", "Bob", "<Media omitted> ").is_media());
        assert!(!Record::new(date(), "9:00 am", "Bob", "media omitted").is_media());
        assert!(!Record::new(date(), "9:00 am", "Bob", "photo.jpg <Media omitted>").is_media());
    }

    #[test]
    fn test_char_count_unicode() {
        // Four scalar values, not byte length
        let rec = Record::new(date(), "9:00 am", "Alice", "Прив");
        assert_eq!(rec.char_count(), 4);
        assert!(rec.text.len() > 4);
    }

    #[test]
    fn test_word_count() {
        let rec = Record::new(date(), "9:00 am", "Alice", "  one\ttwo\nthree  ");
        assert_eq!(rec.word_count(), 3);

        let empty = Record::new(date(), "9:00 am", "Alice", "");
        assert_eq!(empty.word_count(), 0);
    }

    #[test]
    fn test_first_name() {
        assert_eq!(
            Record::new(date(), "9:00 am", "Alice Smith", "hi").first_name(),
            "Alice"
        );
        assert_eq!(Record::new(date(), "9:00 am", "Bob", "hi").first_name(), "Bob");
        assert_eq!(Record::new(date(), "9:00 am", "", "hi").first_name(), "");
        assert_eq!(Record::new(date(), "9:00 am", "   ", "hi").first_name(), "");
    }

    #[test]
    fn test_record_serialization() {
        let rec = Record::new(date(), "9:00 am", "Alice", "Hello\nthere");
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("Alice"));
        assert!(json.contains("2020-01-01"));

        let parsed: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rec);
    }

    #[test]
    fn test_record_deserialization() {
        let json = r#"{"date":"2020-01-01","time":"9:01 am","sender":"Bob","text":"Hi"}"#;
        let rec: Record = serde_json::from_str(json).unwrap();
        assert_eq!(rec.sender(), "Bob");
        assert_eq!(rec.date(), date());
    }
}
