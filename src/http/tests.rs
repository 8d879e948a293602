//! Tests for the HTTP module

use super::*;
use crate::config::ClientConfig;
use crate::types::Report;
use serde_json::json;

fn client_for(base_url: &str, version: &str) -> ApiClient {
    ApiClient::new(
        ClientConfig::builder("ABC")
            .base_url(base_url)
            .api_version(version)
            .build(),
    )
    .unwrap()
}

// ============================================================================
// URL Construction Tests
// ============================================================================

#[test]
fn test_page_url_layout() {
    let client = client_for("https://data-api.rushmorereviews.com", "0.1");
    let url = client
        .page_url(Report::Drilling, 1, 1000, None)
        .unwrap();

    assert_eq!(
        url.as_str(),
        "https://data-api.rushmorereviews.com/v0.1/wells/DPR?page=1&pageSize=1000"
    );
}

#[test]
fn test_page_url_includes_filter_verbatim() {
    let client = client_for("https://data-api.rushmorereviews.com", "0.1");
    let url = client
        .page_url(Report::Abandonment, 2, 500, Some("Location.Country eq 'Norway'"))
        .unwrap();

    assert!(url.as_str().starts_with(
        "https://data-api.rushmorereviews.com/v0.1/wells/APR?page=2&pageSize=500&filter="
    ));
    // Percent-encoding is transport concern only; the decoded value is untouched.
    let filter = url
        .query_pairs()
        .find(|(k, _)| k == "filter")
        .map(|(_, v)| v.into_owned())
        .unwrap();
    assert_eq!(filter, "Location.Country eq 'Norway'");
}

#[test]
fn test_page_url_trims_trailing_slash_and_uses_version() {
    let client = client_for("http://localhost:9999/", "0.2");
    let url = client.page_url(Report::Completion, 1, 10, None).unwrap();
    assert_eq!(
        url.as_str(),
        "http://localhost:9999/v0.2/wells/CPR?page=1&pageSize=10"
    );
}

#[test]
fn test_client_rejects_invalid_config_before_any_io() {
    let config = ClientConfig::builder("ABC").page_size(0).build();
    assert!(ApiClient::new(config).is_err());
}

// ============================================================================
// Envelope Deserialization Tests
// ============================================================================

#[test]
fn test_envelope_data_shape() {
    let envelope: PageEnvelope = serde_json::from_value(json!({
        "TotalWells": 12,
        "TotalPages": 3,
        "PageInfo": {"Page": 1, "PageSize": 5},
        "Data": [{"WellId": 1}, {"WellId": 2}]
    }))
    .unwrap();

    assert_eq!(envelope.total_wells, Some(12));
    assert_eq!(envelope.total_pages, Some(3));
    assert_eq!(envelope.row_count(), 2);
    assert!(envelope.fault.is_none());
    assert!(envelope.error.is_none());

    let rows = envelope.into_rows();
    assert_eq!(rows[0].get("WellId"), Some(&json!(1)));
}

#[test]
fn test_envelope_fault_shape() {
    let envelope: PageEnvelope = serde_json::from_value(json!({
        "fault": {"faultstring": "Body buffer overflow", "detail": {"errorcode": "protocol.http.TooBigBody"}}
    }))
    .unwrap();

    assert_eq!(envelope.fault.as_ref().unwrap().faultstring, "Body buffer overflow");
    assert_eq!(envelope.total_pages, None);
    assert_eq!(envelope.row_count(), 0);
}

#[test]
fn test_envelope_error_shape() {
    let envelope: PageEnvelope = serde_json::from_value(json!({
        "error": "invalid_request",
        "error_description": "API key is missing"
    }))
    .unwrap();

    assert_eq!(envelope.error.as_deref(), Some("invalid_request"));
    assert_eq!(envelope.error_description.as_deref(), Some("API key is missing"));
}

#[test]
fn test_envelope_tolerates_missing_keys() {
    let envelope: PageEnvelope = serde_json::from_value(json!({})).unwrap();
    assert_eq!(envelope.total_pages, None);
    assert!(envelope.into_rows().is_empty());
}
