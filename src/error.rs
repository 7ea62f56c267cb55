// src/error.rs
//! Application error types with structured error handling.
//!
//! Error variants name the failure the user actually hits: a page without
//! subscriptions, an empty selection, a clipboard that refused the payload.
//! Per-entry problems (a node without a usable link) are not errors at all;
//! the collector skips them.

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No subscribed items found. Make sure you are on the subscriptions page.")]
    NoSubscriptions,

    #[error("No items selected to {action}")]
    NothingSelected { action: &'static str },

    #[error("Failed to read input {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error interacting with clipboard: {0}")]
    Clipboard(String),

    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Subscription list has not been collected yet")]
    NotCollected,

    #[error("Failed to encode listing: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl From<arboard::Error> for AppError {
    fn from(err: arboard::Error) -> Self {
        AppError::Clipboard(format!("Clipboard error: {}", err))
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
