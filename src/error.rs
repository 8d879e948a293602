//! Error types for the Rushmore extractor
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Transport- and pagination-level failures abort an extraction outright;
//! `SchemaValidation` is the one variant recovered locally (counted and
//! dropped by the batch processor).

use thiserror::Error;

/// The main error type for the Rushmore extractor
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Report name '{name}' is not supported (expected APR, DPR or CPR)")]
    UnsupportedReport { name: String },

    #[error("Invalid page size: {size} (must be a positive integer)")]
    InvalidPageSize { size: u32 },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to parse response JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Vendor Soft Errors
    // ============================================================================
    #[error("Response too large. Reduce page size.")]
    PageTooLarge,

    #[error("Upstream error: {message}")]
    Upstream { message: String },

    // ============================================================================
    // Validation Errors
    // ============================================================================
    #[error("Validation failed for field '{field}': {message}")]
    SchemaValidation { field: String, message: String },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unsupported-report error
    pub fn unsupported_report(name: impl Into<String>) -> Self {
        Self::UnsupportedReport { name: name.into() }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create an upstream error from a vendor-embedded message
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Create a validation error for a field path
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this error is a row-level validation failure
    ///
    /// These are the only errors the batch processor recovers from; every
    /// other variant aborts the extraction.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::SchemaValidation { .. })
    }
}

/// Result type alias for the Rushmore extractor
pub type Result<T> = std::result::Result<T, Error>;
