//! Error types for report generation.
//!
//! This module defines [`ReportError`], the error type used when loading
//! lint results, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Formatting itself is total and never returns an error
//! - Use `ReportError` for failures while reading or decoding results
//! - Use `anyhow::Error` (via `ReportError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for loading and reporting lint results.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Results file not found at the given location.
    #[error("Results file not found: {path}")]
    ResultsNotFound { path: PathBuf },

    /// Results could not be decoded as stylelint JSON.
    #[error("Failed to parse results from {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
