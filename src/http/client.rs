//! Page fetcher
//!
//! A thin wrapper over `reqwest` that knows the Rushmore URL layout and
//! authentication header. One call, one page; pagination policy lives in
//! the pagination module.

use super::types::PageEnvelope;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::Report;
use tracing::debug;
use url::Url;

/// Header carrying the participant credential
pub const API_KEY_HEADER: &str = "X-API-key";

/// HTTP client bound to one Rushmore API host and credential
#[derive(Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Create a client from a validated config
    ///
    /// Fails with a configuration error before any network activity when the
    /// config is unusable (e.g. a zero page size).
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, config })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch one page of data from the given performance review
    ///
    /// Issues `GET {base}/v{version}/wells/{report}?page=..&pageSize=..` with
    /// the `X-API-key` header. The optional filter expression is passed
    /// through verbatim (URL-encoded only, never validated). A non-success
    /// status maps to [`Error::HttpStatus`] with the response body text.
    pub async fn fetch_page(
        &self,
        report: Report,
        page: u32,
        page_size: u32,
        filter: Option<&str>,
    ) -> Result<PageEnvelope> {
        let url = self.page_url(report, page, page_size, filter)?;
        debug!(%url, "requesting page");

        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body = response.text().await?;
        let envelope: PageEnvelope = serde_json::from_str(&body)?;
        Ok(envelope)
    }

    /// Build the wells-endpoint URL for one page request
    pub(crate) fn page_url(
        &self,
        report: Report,
        page: u32,
        page_size: u32,
        filter: Option<&str>,
    ) -> Result<Url> {
        let base = self.config.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!(
            "{base}/v{version}/wells/{report}",
            version = self.config.api_version,
            report = report.code(),
        ))?;

        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("pageSize", &page_size.to_string());
        if let Some(filter) = filter {
            url.query_pairs_mut().append_pair("filter", filter);
        }

        Ok(url)
    }
}
