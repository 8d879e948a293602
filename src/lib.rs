//! # Rushmore Extractor
//!
//! Client library for the Rushmore well-data performance reviews API
//! (Abandonment/APR, Drilling/DPR, Completion/CPR).
//!
//! ## Features
//!
//! - **Paginated extraction**: walks the vendor's page counter and returns
//!   rows in strict page order
//! - **Soft-error detection**: vendor failures embedded in HTTP 200 bodies
//!   surface as typed errors instead of corrupting results
//! - **Schema validation**: each row is checked against a declarative,
//!   report-specific schema; field aliases and vendor typos are normalized
//!   to canonical names
//! - **Partial-failure batches**: invalid rows are counted and dropped,
//!   never aborting a whole extraction
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rushmore_extractor::{Result, RushmoreClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = RushmoreClient::new(std::env::var("RUSHMORE_API_KEY").unwrap())?;
//!
//!     // Raw rows, exactly as the vendor returned them
//!     let raw = client.drilling().get_raw_data(None).await?;
//!
//!     // Validated records, with rejected-row count
//!     let batch = client
//!         .abandonment()
//!         .get_processed_data(Some("Location.Country eq 'Norway'"))
//!         .await?;
//!     println!("{} wells, {} rejected", batch.len(), batch.rejected());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      RushmoreClient                         │
//! │   abandonment() / drilling() / completion() / report(name)  │
//! └──────────────────────────────┬──────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴──────────┬───────────────────┐
//! │     HTTP     │        Pagination        │      Schema       │
//! ├──────────────┼──────────────────────────┼───────────────────┤
//! │ Page fetch   │ Page loop                │ Record validator  │
//! │ X-API-key    │ Soft-error check         │ Alias tables      │
//! │ Envelope     │ Page cap                 │ Batch processor   │
//! └──────────────┴──────────────────────────┴───────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the extractor
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// HTTP transport to the vendor API
pub mod http;

/// Pagination driver and soft-error detection
pub mod pagination;

/// Declarative schemas and the record validator
pub mod schema;

/// Fixed schema tables for the three reports
pub mod reports;

/// Client facades
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{ReportClient, RushmoreClient};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use pagination::ExtractOptions;
pub use schema::{FieldValue, RecordBatch, ValidatedRecord};
pub use types::{RawRecord, Report};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
