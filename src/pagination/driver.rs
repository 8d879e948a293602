//! Soft-error detection and the pagination driver

use super::types::ExtractOptions;
use crate::error::{Error, Result};
use crate::http::{ApiClient, PageEnvelope};
use crate::types::{RawRecord, Report};
use tracing::{debug, info};

/// Fault message the gateway emits when a page exceeds the response size limit
pub const OVERFLOW_FAULT: &str = "Body buffer overflow";

/// Inspect a successfully-transported envelope for vendor-embedded errors
///
/// The vendor signals some failures inside HTTP 200 bodies rather than via
/// status code; without this check a malformed page would silently corrupt
/// the accumulated result.
///
/// - the overflow fault maps to [`Error::PageTooLarge`]
/// - any other fault maps to [`Error::Upstream`] with the fault string
/// - the `error`/`error_description` shape maps to [`Error::Upstream`] with
///   the description (falling back to the error code)
pub fn check_soft_error(envelope: &PageEnvelope) -> Result<()> {
    debug!("checking response for embedded error markers");

    if let Some(fault) = &envelope.fault {
        if fault.faultstring == OVERFLOW_FAULT {
            return Err(Error::PageTooLarge);
        }
        return Err(Error::upstream(fault.faultstring.as_str()));
    }

    if let Some(error) = &envelope.error {
        let message = envelope.error_description.as_deref().unwrap_or(error.as_str());
        return Err(Error::upstream(message));
    }

    Ok(())
}

/// Fetch every page of one performance review, in page order
///
/// The page counter starts at 1. Each iteration fetches a page, runs the
/// soft-error check, and appends the page's rows to the accumulator exactly
/// once, so rows from page `k` always precede rows from page `k + 1`.
///
/// Continuation: with `max_pages` set the loop runs while
/// `min(max_pages, TotalPages) > page`, otherwise while `TotalPages > page`.
/// An absent or zero `TotalPages` terminates after the first page. Any fetch
/// or soft-error failure propagates immediately, discarding the partial
/// accumulation for this call.
pub async fn fetch_all(
    client: &ApiClient,
    report: Report,
    options: &ExtractOptions,
) -> Result<Vec<RawRecord>> {
    let page_size = options.page_size.unwrap_or(client.config().page_size);
    let filter = options.filter.as_deref();

    let mut rows: Vec<RawRecord> = Vec::new();
    let mut page: u32 = 1;

    loop {
        info!("fetching page {page} from {report}");
        let envelope = client
            .fetch_page(report, page, page_size, filter)
            .await?;
        check_soft_error(&envelope)?;

        let total_pages = envelope.total_pages.unwrap_or(0);
        let page_rows = envelope.into_rows();
        debug!("fetched {} rows", page_rows.len());
        rows.extend(page_rows);

        let limit = match options.max_pages {
            Some(max_pages) => max_pages.min(total_pages),
            None => total_pages,
        };
        if limit > page {
            page += 1;
        } else {
            info!("extraction complete, {} rows fetched from {report}", rows.len());
            return Ok(rows);
        }
    }
}
