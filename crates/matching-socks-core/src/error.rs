//! Core error types for matching-socks-core.
//!
//! This module defines the error hierarchy using thiserror. Storage
//! failures, configuration failures, and input validation each get their
//! own enum, all collected under [`CoreError`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for matching-socks-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Local store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

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

/// Local store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to resolve the on-disk data directory
    #[error("Failed to resolve data directory: {0}")]
    DataDir(String),

    /// Failed to write the store file
    #[error("Failed to write store at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize a value before storing it
    #[error("Failed to serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
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
}

/// Validation errors. Raised before any state mutation.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Friend name was empty after trimming
    #[error("Friend name must not be empty")]
    EmptyFriendName,

    /// Color name was empty after trimming
    #[error("Color name must not be empty")]
    EmptyColorName,

    /// Hex code did not match 3 or 6 hex digits with optional '#'
    #[error("Invalid hex color '{0}': expected 3 or 6 hex digits with optional leading '#'")]
    InvalidHexColor(String),

    /// The color palette has no entries to pick from
    #[error("Color palette is empty")]
    EmptyPalette,

    /// No friend with the given id
    #[error("No friend with id '{0}'")]
    UnknownFriend(String),

    /// No color with the given id
    #[error("No color with id '{0}'")]
    UnknownColor(String),

    /// Built-in palette entries are immutable seed data
    #[error("Built-in color '{0}' cannot be removed")]
    BuiltinColor(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
