//! Wire shapes of the Rushmore API
//!
//! The vendor overloads one response shape for both data and errors: a page
//! carries `TotalWells`/`TotalPages`/`PageInfo`/`Data`, while failures may
//! arrive inside a 200 body as an Apigee-style `fault` object or as an
//! `error`/`error_description` pair. Every field is optional so that one
//! envelope type deserializes all three shapes; the soft-error check in the
//! pagination module decides which one actually arrived.

use crate::types::{JsonObject, RawRecord};
use serde::Deserialize;

/// One page of API data, including pagination metadata
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageEnvelope {
    /// Total number of wells matching the query
    #[serde(rename = "TotalWells")]
    pub total_wells: Option<u64>,

    /// Total number of pages for the query; the same value is reported on
    /// every page of one query
    #[serde(rename = "TotalPages")]
    pub total_pages: Option<u32>,

    /// Vendor page metadata, passed through untyped
    #[serde(rename = "PageInfo")]
    pub page_info: Option<JsonObject>,

    /// The row payload; at most `pageSize` rows
    #[serde(rename = "Data")]
    pub data: Option<Vec<RawRecord>>,

    /// Gateway fault marker embedded in a 200 body
    pub fault: Option<Fault>,

    /// Vendor error code, the second error shape
    pub error: Option<String>,

    /// Human-readable description accompanying `error`
    pub error_description: Option<String>,
}

impl PageEnvelope {
    /// Consume the envelope, yielding its rows (empty when `Data` is absent)
    pub fn into_rows(self) -> Vec<RawRecord> {
        self.data.unwrap_or_default()
    }

    /// Number of rows on this page
    pub fn row_count(&self) -> usize {
        self.data.as_ref().map_or(0, Vec::len)
    }
}

/// Fault object the vendor's gateway embeds in 200 responses
#[derive(Debug, Clone, Deserialize)]
pub struct Fault {
    /// The fault message; `"Body buffer overflow"` signals that the
    /// requested page size produced a response over the size limit
    pub faultstring: String,

    /// Structured fault detail, passed through untyped
    pub detail: Option<JsonObject>,
}
