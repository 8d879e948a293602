//! HTTP transport to the Rushmore API
//!
//! # Overview
//!
//! One component lives here: the page fetcher. [`ApiClient`] issues a single
//! GET per page against the wells endpoint and deserializes the JSON body
//! into a [`PageEnvelope`]. There is no retry machinery: a non-success
//! status or a transport failure surfaces immediately, and retries are the
//! caller's responsibility (this crate performs none).

mod client;
mod types;

pub use client::{ApiClient, API_KEY_HEADER};
pub use types::{Fault, PageEnvelope};

#[cfg(test)]
mod tests;
