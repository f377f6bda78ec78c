//! Error taxonomy for clarity operations.
//!
//! Every fallible operation in the library returns [`ClarityError`]. The
//! variants split into the calculation errors callers are expected to map to
//! transport-level status codes (validation, not-found, internal) and the
//! ambient I/O errors raised while loading benchmark tables or configuration.
//!
//! # Error Codes
//!
//! - E001-E009: I/O and filesystem errors
//! - E010-E019: Benchmark table (CSV) errors
//! - E020-E029: Configuration errors
//! - E050-E059: Input validation errors
//! - E060-E069: Lookup errors
//! - E070-E079: Internal arithmetic errors
//!
//! # Example
//!
//! ```rust
//! use clarity::errors::{ClarityError, ErrorCode};
//!
//! let err = ClarityError::validation("total_employees", "must be greater than 0");
//! assert_eq!(err.code(), ErrorCode::VALIDATION_RANGE);
//! assert!(err.is_user_fixable());
//! ```

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, ClarityError>;

/// Structured error code for documentation and programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// I/O error - file not found
    pub const IO_FILE_NOT_FOUND: ErrorCode = ErrorCode("E001");
    /// I/O error - permission denied
    pub const IO_PERMISSION_DENIED: ErrorCode = ErrorCode("E002");
    /// I/O error - generic
    pub const IO_GENERIC: ErrorCode = ErrorCode("E009");

    /// Benchmark table could not be parsed or written
    pub const CSV_GENERIC: ErrorCode = ErrorCode("E010");

    /// Config error - generic
    pub const CONFIG_GENERIC: ErrorCode = ErrorCode("E029");

    /// Validation error - field out of range or missing
    pub const VALIDATION_RANGE: ErrorCode = ErrorCode("E050");
    /// Validation error - payload could not be decoded
    pub const VALIDATION_PAYLOAD: ErrorCode = ErrorCode("E051");

    /// Industry not present in the benchmark table
    pub const NOT_FOUND_INDUSTRY: ErrorCode = ErrorCode("E060");

    /// Non-finite arithmetic or uncoercible benchmark value
    pub const INTERNAL_ARITHMETIC: ErrorCode = ErrorCode("E070");

    /// Get the error code string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unified error type for clarity operations.
#[derive(Debug, Clone, Error)]
pub enum ClarityError {
    /// An input field is missing, malformed, or outside its documented range.
    #[error("[{code}] invalid {field}: {message}")]
    Validation {
        code: ErrorCode,
        field: String,
        message: String,
    },

    /// The requested industry has no row in the benchmark table.
    #[error("[{}] Industry '{industry}' not found in benchmarks", ErrorCode::NOT_FOUND_INDUSTRY)]
    NotFound { industry: String },

    /// Arithmetic produced a non-finite value, or a table value could not be coerced.
    #[error("[{}] {message}", ErrorCode::INTERNAL_ARITHMETIC)]
    Internal { message: String },

    /// Filesystem errors while reading or writing tables and reports.
    #[error("[{code}] {message}{}", path_suffix(.path))]
    Io {
        code: ErrorCode,
        message: String,
        path: Option<PathBuf>,
    },

    /// Benchmark table parse/write errors.
    #[error("[{}] {message}", ErrorCode::CSV_GENERIC)]
    Csv { message: String },

    /// Configuration file errors.
    #[error("[{code}] {message}")]
    Config {
        code: ErrorCode,
        message: String,
        path: Option<PathBuf>,
    },
}

impl ClarityError {
    /// Create a validation error for a named field.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            code: ErrorCode::VALIDATION_RANGE,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a validation error for a payload that failed to decode.
    #[must_use]
    pub fn payload(message: impl Into<String>) -> Self {
        Self::Validation {
            code: ErrorCode::VALIDATION_PAYLOAD,
            field: "payload".to_string(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found(industry: impl Into<String>) -> Self {
        Self::NotFound {
            industry: industry.into(),
        }
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create an I/O error from a std::io::Error.
    #[must_use]
    pub fn from_io_error(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::IO_FILE_NOT_FOUND,
            std::io::ErrorKind::PermissionDenied => ErrorCode::IO_PERMISSION_DENIED,
            _ => ErrorCode::IO_GENERIC,
        };
        Self::Io {
            code,
            message: err.to_string(),
            path,
        }
    }

    #[must_use]
    pub fn config(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_GENERIC,
            message: message.into(),
            path,
        }
    }

    /// Get the error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation { code, .. } => *code,
            Self::NotFound { .. } => ErrorCode::NOT_FOUND_INDUSTRY,
            Self::Internal { .. } => ErrorCode::INTERNAL_ARITHMETIC,
            Self::Io { code, .. } => *code,
            Self::Csv { .. } => ErrorCode::CSV_GENERIC,
            Self::Config { code, .. } => *code,
        }
    }

    /// Get the error category name.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "Validation",
            Self::NotFound { .. } => "NotFound",
            Self::Internal { .. } => "Internal",
            Self::Io { .. } => "I/O",
            Self::Csv { .. } => "Benchmark table",
            Self::Config { .. } => "Config",
        }
    }

    /// Whether the caller can fix this by changing their input or setup.
    #[must_use]
    pub fn is_user_fixable(&self) -> bool {
        match self {
            Self::Validation { .. } | Self::NotFound { .. } | Self::Config { .. } => true,
            Self::Io { code, .. } => *code == ErrorCode::IO_FILE_NOT_FOUND,
            Self::Csv { .. } => true,
            Self::Internal { .. } => false,
        }
    }
}

impl From<csv::Error> for ClarityError {
    fn from(err: csv::Error) -> Self {
        Self::Csv {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for ClarityError {
    fn from(err: std::io::Error) -> Self {
        Self::from_io_error(err, None)
    }
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" ({})", p.display()))
        .unwrap_or_default()
}

/// Reject non-finite figures before they reach a result.
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ClarityError::internal(format!(
            "{} evaluated to a non-finite value ({})",
            name, value
        )))
    }
}
