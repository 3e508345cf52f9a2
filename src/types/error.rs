//! Error types for the ACH codec
//!
//! This module defines all error types produced while encoding, decoding and
//! validating ACH files.
//!
//! # Error Categories
//!
//! - **Structural errors**: missing or mis-tagged records in an expected
//!   position; always fatal to validation, reported with position context.
//! - **Domain errors**: a code outside its closed set or an identifier of
//!   the wrong length; fatal to validation, typed per field so callers can
//!   distinguish routing, SEC and transaction-code failures.
//! - **Encoder invariant violations**: a rendered line that is not exactly
//!   94 characters; fatal and internal - it signals a formatter defect, not
//!   bad input.
//! - **I/O and format errors**: file, JSON and CSV failures on the CLI
//!   paths.
//!
//! Per-line decode problems are deliberately *not* errors: the decoder skips
//! the offending line with a warning and keeps going.

use thiserror::Error;

/// Main error type for the ACH codec
///
/// Validation variants carry a machine error code, the offending field name
/// and a 1-based record position, exposed through [`AchError::error_code`],
/// [`AchError::field_name`] and [`AchError::position`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AchError {
    /// A required record is missing or carries the wrong record-type tag
    #[error("{message} ({field} at record {position})")]
    Structural {
        /// Human-readable description of the violation
        message: String,
        /// Field that failed, e.g. "recordTypeCode"
        field: String,
        /// 1-based record position for diagnostics
        position: usize,
    },

    /// SEC code outside the closed set of accepted batch classes
    #[error("Invalid SEC code '{code}' at record {position}")]
    InvalidSecCode {
        /// The rejected SEC code
        code: String,
        /// 1-based record position
        position: usize,
    },

    /// Routing identifier that is not exactly 8 characters
    #[error("Invalid routing identifier '{value}' at record {position}")]
    InvalidRoutingNumber {
        /// The rejected identifier
        value: String,
        /// 1-based record position
        position: usize,
    },

    /// Transaction code outside the closed set of accepted entry codes
    #[error("Invalid transaction code '{code}' at record {position}")]
    InvalidTransactionCode {
        /// The rejected two-digit code
        code: String,
        /// 1-based record position
        position: usize,
    },

    /// A rendered line is not exactly 94 characters
    ///
    /// Internal invariant violation: the formatters guarantee field widths,
    /// so this indicates a codec defect rather than bad input. The malformed
    /// line is never emitted.
    #[error("{record} length must be 94 but was {length}")]
    LineLength {
        /// Record kind being rendered, e.g. "File Header"
        record: String,
        /// Actual rendered length
        length: usize,
    },

    /// A fixed-column field could not be sliced out of a line
    ///
    /// Raised for lines that cannot be split at the expected byte offsets
    /// (for example multi-byte characters straddling a column boundary).
    #[error("Cannot extract field at columns {start}..{end}")]
    FieldOutOfBounds {
        /// Inclusive start column
        start: usize,
        /// Exclusive end column
        end: usize,
    },

    /// I/O failure while reading or writing files
    #[error("I/O error: {message}")]
    Io {
        /// Description of the underlying I/O error
        message: String,
    },

    /// Malformed JSON file request
    #[error("Request parse error: {message}")]
    Json {
        /// Description of the JSON error
        message: String,
    },

    /// CSV export failure
    #[error("CSV error: {message}")]
    Csv {
        /// Description of the CSV error
        message: String,
    },
}

impl From<std::io::Error> for AchError {
    fn from(error: std::io::Error) -> Self {
        AchError::Io {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for AchError {
    fn from(error: serde_json::Error) -> Self {
        AchError::Json {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for AchError {
    fn from(error: csv::Error) -> Self {
        AchError::Csv {
            message: error.to_string(),
        }
    }
}

impl AchError {
    /// Create a structural validation error
    pub fn structural(message: &str, field: &str, position: usize) -> Self {
        AchError::Structural {
            message: message.to_string(),
            field: field.to_string(),
            position,
        }
    }

    /// Create an InvalidSecCode error
    pub fn invalid_sec_code(code: &str, position: usize) -> Self {
        AchError::InvalidSecCode {
            code: code.to_string(),
            position,
        }
    }

    /// Create an InvalidRoutingNumber error
    pub fn invalid_routing_number(value: &str, position: usize) -> Self {
        AchError::InvalidRoutingNumber {
            value: value.to_string(),
            position,
        }
    }

    /// Create an InvalidTransactionCode error
    pub fn invalid_transaction_code(code: &str, position: usize) -> Self {
        AchError::InvalidTransactionCode {
            code: code.to_string(),
            position,
        }
    }

    /// Create a LineLength invariant violation
    pub fn line_length(record: &str, length: usize) -> Self {
        AchError::LineLength {
            record: record.to_string(),
            length,
        }
    }

    /// Machine-readable error code for validation failures
    pub fn error_code(&self) -> &'static str {
        match self {
            AchError::Structural { .. } => "STRUCTURAL",
            AchError::InvalidSecCode { .. } => "SEC_CODE_INVALID",
            AchError::InvalidRoutingNumber { .. } => "ROUTING_INVALID",
            AchError::InvalidTransactionCode { .. } => "TXN_CODE_INVALID",
            AchError::LineLength { .. } => "LINE_LENGTH",
            AchError::FieldOutOfBounds { .. } => "FIELD_BOUNDS",
            AchError::Io { .. } => "IO",
            AchError::Json { .. } => "REQUEST_PARSE",
            AchError::Csv { .. } => "CSV",
        }
    }

    /// Name of the offending field, when the failure is field-specific
    pub fn field_name(&self) -> Option<&str> {
        match self {
            AchError::Structural { field, .. } => Some(field),
            AchError::InvalidSecCode { .. } => Some("SEC Code"),
            AchError::InvalidRoutingNumber { .. } => Some("Routing Number"),
            AchError::InvalidTransactionCode { .. } => Some("Transaction Code"),
            _ => None,
        }
    }

    /// 1-based record position, when the failure is positional
    pub fn position(&self) -> Option<usize> {
        match self {
            AchError::Structural { position, .. }
            | AchError::InvalidSecCode { position, .. }
            | AchError::InvalidRoutingNumber { position, .. }
            | AchError::InvalidTransactionCode { position, .. } => Some(*position),
            _ => None,
        }
    }
}
