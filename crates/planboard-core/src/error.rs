//! Core error types for planboard-core.
//!
//! Layered the usual way: a top-level [`CoreError`] with `#[from]`
//! conversions, plus focused enums for storage, configuration and
//! input validation.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for planboard-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}

/// Persistence errors for both the local and the remote store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Local plan file exists but does not parse
    #[error("Corrupt plan data at {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Remote endpoint answered with a non-success status
    #[error("Remote store returned {status}: {body}")]
    Remote { status: u16, body: String },

    /// Remote store is selected but not configured
    #[error("Remote store is not configured: {0}")]
    NotConfigured(String),

    /// Transport failure talking to the remote store
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid remote base URL
    #[error("Invalid remote URL: {0}")]
    Url(#[from] url::ParseError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors on write
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown dot-path key
    #[error("Unknown config key: {0}")]
    UnknownKey(String),

    /// Data directory could not be prepared
    #[error("Data directory unavailable: {0}")]
    DataDir(#[source] std::io::Error),
}

/// Validation errors raised at the data-entry boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Interval with start after end
    #[error("Invalid range: start ({start}) must not be after end ({end})")]
    InvertedRange { start: u32, end: u32 },

    /// Month outside 1..=12
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    /// Day outside the month
    #[error("Invalid day {day} for {year}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },

    /// Date string that is not YYYY-MM-DD
    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// Date range with start after end
    #[error("Invalid date range: {start} is after {end}")]
    InvertedDates { start: String, end: String },

    /// Blank title
    #[error("Title must not be empty")]
    EmptyTitle,

    /// Tag outside the closed set
    #[error("Unknown tag '{0}' (expected one of Launch, Sales, Plan, Focus, Work)")]
    UnknownTag(String),

    /// Color outside the closed set
    #[error("Unknown color '{0}' (expected one of red, blue, green, purple, amber)")]
    UnknownColor(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
