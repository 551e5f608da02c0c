//! Record assembly from exported chat lines.
//!
//! [`ChatParser`] walks the export once, top to bottom, classifying every
//! line and folding continuation fragments back into the record they belong
//! to. Order matters: a continuation can only attach to the immediately
//! preceding record, so assembly is strictly sequential and must never be
//! chunk-parallelized across line boundaries.
//!
//! # Example
//!
//! ```rust
//! use chatstats::ChatParser;
//!
//! let parser = ChatParser::new();
//! let records = parser.parse_str(
//!     "01/01/2020, 9:00 am - Alice: Hello\n\
//!      there\n\
//!      01/01/2020, 9:01 am - Bob: <Media omitted>",
//! );
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].text, "Hello\nthere");
//! ```

use std::fs;
use std::io::BufRead;
use std::path::Path;

use crate::classify::{ClassifiedLine, LineClassifier};
use crate::error::Result;
use crate::record::Record;

/// Parser for WhatsApp-style TXT exports.
///
/// Holds its compiled line grammar; one instance can parse any number of
/// inputs. The output is a pure function of the input lines: system-event
/// lines and orphan continuations are dropped silently, every other line
/// becomes part of exactly one [`Record`].
///
/// # Example
///
/// ```rust,no_run
/// use chatstats::ChatParser;
///
/// let parser = ChatParser::new();
/// let records = parser.parse("chat_export.txt".as_ref())?;
/// println!("{} records", records.len());
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
pub struct ChatParser {
    classifier: LineClassifier,
}

impl ChatParser {
    /// Creates a parser with the export grammar compiled.
    pub fn new() -> Self {
        Self {
            classifier: LineClassifier::new(),
        }
    }

    /// Parses a whole export file.
    ///
    /// Reads the file as UTF-8 in one go; I/O and encoding failures
    /// propagate as [`ChatstatsError::Io`](crate::ChatstatsError::Io).
    pub fn parse(&self, path: &Path) -> Result<Vec<Record>> {
        let content = fs::read_to_string(path)?;
        Ok(self.parse_str(&content))
    }

    /// Parses lines from any buffered reader.
    ///
    /// Useful when the export does not come from a file on disk. Per-line
    /// read errors propagate.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line?;
            self.step(&line, &mut records);
        }
        Ok(records)
    }

    /// Parses export content already held in memory.
    ///
    /// Classification has no failure modes, so this cannot error; malformed
    /// lines degrade to system events or continuations per the grammar.
    pub fn parse_str(&self, content: &str) -> Vec<Record> {
        let mut records = Vec::new();
        for line in content.lines() {
            self.step(line, &mut records);
        }
        records
    }

    /// Feeds one line into the growing record sequence.
    fn step(&self, line: &str, records: &mut Vec<Record>) {
        match self.classifier.classify(line) {
            ClassifiedLine::NewMessage {
                date,
                time,
                sender,
                text,
            } => {
                records.push(Record::new(date, time, sender, text));
            }
            ClassifiedLine::SystemEvent => {}
            ClassifiedLine::Continuation { text } => {
                // Reattach the wrapped line to the record it came from,
                // restoring the line break the export put between them.
                if let Some(last) = records.last_mut() {
                    last.text.push('\n');
                    last.text.push_str(text);
                }
                // If no previous record exists, drop the orphan line.
            }
        }
    }
}

impl Default for ChatParser {
    fn default() -> Self {
        Self::new()
    }
}
