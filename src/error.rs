//! Unified error types for chatstats.
//!
//! This module provides a single [`ChatstatsError`] enum that covers all error
//! cases in the library. This design follows the pattern used by popular crates
//! like `reqwest`, `serde_json`, and `csv`.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Silently tolerated conditions** (system-event lines, orphan
//!   continuations) never surface here; they are part of normal parsing

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// This type is broadly used across the library for any operation that
/// may produce an error.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::Record;
///
/// fn my_function() -> Result<Vec<Record>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
///
/// This enum represents all possible errors that can occur when using
/// chatstats. Each variant contains context about what went wrong and, where
/// applicable, the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - The file is not valid UTF-8
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The record sequence cannot support the requested aggregation.
    ///
    /// Raised instead of dividing by zero when:
    /// - The assembled sequence is empty (no first/last record, no counts)
    /// - The day span is not positive (out-of-order export)
    #[error("Insufficient data: {reason}")]
    InsufficientData {
        /// What exactly was missing
        reason: String,
    },

    /// A report format whose writer is not compiled in.
    ///
    /// Raised by the format dispatchers when the binary was built without
    /// the `csv-output` or `json-output` feature the format needs.
    #[error("Unsupported format: {reason}")]
    UnsupportedFormat {
        /// Which format, and the feature it needs
        reason: String,
    },

    /// CSV writing error.
    ///
    /// This can occur when writing records or report tables to CSV.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    ///
    /// This can occur when writing records or reports as JSON.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates an insufficient-data error.
    pub fn insufficient_data(reason: impl Into<String>) -> Self {
        ChatstatsError::InsufficientData {
            reason: reason.into(),
        }
    }

    /// Creates an unsupported-format error.
    pub fn unsupported_format(reason: impl Into<String>) -> Self {
        ChatstatsError::UnsupportedFormat {
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_))
    }

    /// Returns `true` if this is an insufficient-data error.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, ChatstatsError::InsufficientData { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Display tests for all error variants
    // =========================================================================

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatstatsError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_insufficient_data_display() {
        let err = ChatstatsError::insufficient_data("empty record sequence");
        let display = err.to_string();
        assert!(display.contains("Insufficient data"));
        assert!(display.contains("empty record sequence"));
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = ChatstatsError::unsupported_format("JSON requires the 'json-output' feature");
        let display = err.to_string();
        assert!(display.contains("Unsupported format"));
        assert!(display.contains("json-output"));
    }

    #[cfg(feature = "csv-output")]
    #[test]
    fn test_from_csv_error() {
        let io_err = std::io::Error::other("test");
        let csv_err = csv::Error::from(io_err);
        let err: ChatstatsError = csv_err.into();
        assert!(err.to_string().contains("CSV error"));
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ChatstatsError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    // =========================================================================
    // Error source chain tests
    // =========================================================================

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ChatstatsError::from(io_err);
        assert!(err.source().is_some());
    }

    // =========================================================================
    // is_* methods tests
    // =========================================================================

    #[test]
    fn test_is_methods() {
        let io_err = ChatstatsError::Io(io::Error::new(io::ErrorKind::NotFound, ""));
        assert!(io_err.is_io());
        assert!(!io_err.is_insufficient_data());

        let data_err = ChatstatsError::insufficient_data("no records");
        assert!(data_err.is_insufficient_data());
        assert!(!data_err.is_io());
    }

    // =========================================================================
    // Result type alias test
    // =========================================================================

    #[test]
    fn test_result_type_alias() {
        fn returns_error() -> Result<i32> {
            Err(ChatstatsError::insufficient_data("nothing to aggregate"))
        }

        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        assert!(returns_error().is_err());
        assert_eq!(returns_ok().unwrap(), 42);
    }

    // =========================================================================
    // Debug trait test
    // =========================================================================

    #[test]
    fn test_error_debug() {
        let err = ChatstatsError::insufficient_data("no records");
        let debug = format!("{:?}", err);
        assert!(debug.contains("InsufficientData"));
    }
}
