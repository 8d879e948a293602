//! Page iteration over the Rushmore API
//!
//! # Overview
//!
//! The pagination module owns the extraction loop: walk the page counter
//! from 1, check each 200 body for vendor-embedded soft errors, and append
//! rows in page order until the reported total-page count (or an optional
//! page cap) is reached. Any failure aborts the whole extraction; no
//! partial results are returned on error.

mod driver;
mod types;

pub use driver::{check_soft_error, fetch_all, OVERFLOW_FAULT};
pub use types::ExtractOptions;
