//! Core error types for focusdeck-core.
//!
//! Every failure in the dashboard degrades to a notification or a silent
//! default; these types carry the reason up to whoever reports it.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for focusdeck-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Local state store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Authentication collaborator errors
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors from the persistent key/value store.
///
/// Reads never produce these -- a missing or corrupt entry falls back to
/// the caller's default. Only writes can fail.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to serialize a value before writing
    #[error("Failed to encode value for key '{key}': {message}")]
    EncodeFailed { key: String, message: String },

    /// Failed to flush the store to disk
    #[error("Failed to write store at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Authentication collaborator errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The collaborator answered with an explicit failure payload.
    #[error("{0}")]
    Rejected(String),

    /// Network error, non-2xx status, or malformed response body.
    /// Reported to the user as a generic retry message.
    #[error("Auth request failed: {0}")]
    Transport(String),
}

/// Validation errors -- caught before any side effect.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Signup password and confirmation differ
    #[error("Passwords do not match!")]
    PasswordMismatch,

    /// A required form field was left empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Referenced record does not exist
    #[error("No such {kind}: {id}")]
    UnknownId { kind: &'static str, id: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
