//! Client facades for the Rushmore performance reviews
//!
//! [`RushmoreClient`] owns the transport; each [`ReportClient`] binds one
//! report constant to it and exposes the raw and processed extraction
//! surfaces.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::ApiClient;
use crate::pagination::{check_soft_error, fetch_all, ExtractOptions};
use crate::reports;
use crate::schema::{process_batch, RecordBatch, Schema};
use crate::types::{RawRecord, Report};
use std::sync::Arc;

/// Entry point for extracting data from the Rushmore API
///
/// Typical usage:
///
/// ```rust,ignore
/// use rushmore_extractor::RushmoreClient;
///
/// let client = RushmoreClient::new(api_key)?;
/// let wells = client.drilling().get_processed_data(None).await?;
/// ```
#[derive(Debug, Clone)]
pub struct RushmoreClient {
    api: Arc<ApiClient>,
}

impl RushmoreClient {
    /// Create a client with default configuration
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a client from a custom configuration
    ///
    /// Configuration is validated here, before any network call.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            api: Arc::new(ApiClient::new(config)?),
        })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        self.api.config()
    }

    /// Client for the Abandonment Performance Review
    pub fn abandonment(&self) -> ReportClient {
        self.for_report(Report::Abandonment)
    }

    /// Client for the Drilling Performance Review
    pub fn drilling(&self) -> ReportClient {
        self.for_report(Report::Drilling)
    }

    /// Client for the Completion Performance Review
    pub fn completion(&self) -> ReportClient {
        self.for_report(Report::Completion)
    }

    /// Client for a report named at runtime (case-insensitive)
    ///
    /// Fails with [`crate::Error::UnsupportedReport`] before any network
    /// access when the name is not one of APR, DPR or CPR.
    pub fn report(&self, name: &str) -> Result<ReportClient> {
        Ok(self.for_report(name.parse()?))
    }

    fn for_report(&self, report: Report) -> ReportClient {
        ReportClient {
            api: Arc::clone(&self.api),
            report,
        }
    }
}

/// Facade over one performance review
#[derive(Debug, Clone)]
pub struct ReportClient {
    api: Arc<ApiClient>,
    report: Report,
}

impl ReportClient {
    /// The report this client is bound to
    pub fn report(&self) -> Report {
        self.report
    }

    /// The record schema for this report
    pub fn schema(&self) -> &'static Schema {
        reports::schema_for(self.report)
    }

    /// Retrieve all raw rows for this review
    ///
    /// Rows arrive exactly as the vendor returned them, in page order. The
    /// optional filter is a vendor filter expression passed through
    /// verbatim, e.g. `Location.Country eq 'Norway'`.
    pub async fn get_raw_data(&self, filter: Option<&str>) -> Result<Vec<RawRecord>> {
        self.get_raw_data_with(&self.options_for(filter)).await
    }

    /// Retrieve all raw rows with full extraction options
    pub async fn get_raw_data_with(&self, options: &ExtractOptions) -> Result<Vec<RawRecord>> {
        fetch_all(&self.api, self.report, options).await
    }

    /// Retrieve validated records for this review
    ///
    /// Extracts every page, then validates each row against the report
    /// schema. Rows that fail validation are counted and dropped (partial
    /// success is the expected operating mode against vendor data), while
    /// transport and pagination failures abort the whole call.
    pub async fn get_processed_data(&self, filter: Option<&str>) -> Result<RecordBatch> {
        self.get_processed_data_with(&self.options_for(filter)).await
    }

    /// Retrieve validated records with full extraction options
    pub async fn get_processed_data_with(&self, options: &ExtractOptions) -> Result<RecordBatch> {
        let rows = self.get_raw_data_with(options).await?;
        Ok(process_batch(&rows, self.schema()))
    }

    /// Number of wells in this review, per the vendor's own count
    ///
    /// Fetches a single one-row page and reads `TotalWells` (0 when the
    /// vendor omits it).
    pub async fn well_count(&self) -> Result<u64> {
        let envelope = self.api.fetch_page(self.report, 1, 1, None).await?;
        check_soft_error(&envelope)?;
        Ok(envelope.total_wells.unwrap_or(0))
    }

    fn options_for(&self, filter: Option<&str>) -> ExtractOptions {
        match filter {
            Some(filter) => ExtractOptions::new().filter(filter),
            None => ExtractOptions::new(),
        }
    }
}
