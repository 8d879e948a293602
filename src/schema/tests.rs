//! Tests for the schema module

use super::*;
use crate::error::Error;
use crate::types::RawRecord;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

/// A small schema exercising every field kind, shaped like a cut-down well row
fn well_schema() -> Schema {
    let location = Schema::new(
        "Location",
        vec![
            FieldSpec::required("Region", FieldKind::String),
            FieldSpec::required("Country", FieldKind::String),
        ],
    );

    Schema::new(
        "Well",
        vec![
            FieldSpec::required("WellId", FieldKind::Integer),
            FieldSpec::required("WellName", FieldKind::String),
            FieldSpec::required("Location", FieldKind::Object(location)),
            FieldSpec::optional("WOW", FieldKind::Float).with_aliases(&["WoW", "Wow"]),
            FieldSpec::optional("PT", FieldKind::Float).with_aliases(&["ProductiveTime"]),
            FieldSpec::optional("IsMultilateral", FieldKind::Boolean),
            FieldSpec::optional("Published", FieldKind::Timestamp),
            FieldSpec::optional("CasingSizes", FieldKind::List(Box::new(FieldKind::String))),
        ],
    )
}

fn row(value: serde_json::Value) -> RawRecord {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

// ============================================================================
// Validator Tests
// ============================================================================

#[test]
fn test_validate_full_row() {
    let raw = row(json!({
        "WellId": 42,
        "WellName": "A-12",
        "Location": {"Region": "North Sea", "Country": "Norway"},
        "WoW": 1.5,
        "ProductiveTime": 10.25,
        "IsMultilateral": false,
        "Published": "2021-03-01T08:30:00Z",
        "CasingSizes": ["13 3/8", null, "9 5/8"]
    }));

    let record = validate(&raw, &well_schema()).unwrap();

    assert_eq!(record.schema_name(), "Well");
    assert_eq!(record.get("WellId").unwrap().as_i64(), Some(42));
    assert_eq!(record.get("WellName").unwrap().as_str(), Some("A-12"));
    assert_eq!(record.get("WOW").unwrap().as_f64(), Some(1.5));
    assert_eq!(record.get("PT").unwrap().as_f64(), Some(10.25));
    assert_eq!(record.get("IsMultilateral").unwrap().as_bool(), Some(false));
    assert_eq!(
        record.get("Published").unwrap().as_timestamp(),
        Some(Utc.with_ymd_and_hms(2021, 3, 1, 8, 30, 0).unwrap())
    );

    let location = record.get("Location").unwrap().as_record().unwrap();
    assert_eq!(location.get("Country").unwrap().as_str(), Some("Norway"));

    let sizes = record.get("CasingSizes").unwrap().as_list().unwrap();
    assert_eq!(sizes.len(), 3);
    assert!(sizes[1].is_missing());
}

#[test]
fn test_required_only_row_validates_with_missing_optionals() {
    let raw = row(json!({
        "WellId": 1,
        "WellName": "B-1",
        "Location": {"Region": "GoM", "Country": "USA"}
    }));

    let record = validate(&raw, &well_schema()).unwrap();

    for optional in ["WOW", "PT", "IsMultilateral", "Published", "CasingSizes"] {
        assert!(
            record.get(optional).unwrap().is_missing(),
            "{optional} should be the missing sentinel"
        );
    }
}

#[test]
fn test_missing_required_field_rejects_record() {
    let raw = row(json!({
        "WellName": "B-1",
        "Location": {"Region": "GoM", "Country": "USA"}
    }));

    let err = validate(&raw, &well_schema()).unwrap_err();
    assert!(matches!(&err, Error::SchemaValidation { field, .. } if field == "WellId"));
}

#[test]
fn test_null_required_field_rejects_record() {
    let raw = row(json!({
        "WellId": null,
        "WellName": "B-1",
        "Location": {"Region": "GoM", "Country": "USA"}
    }));

    assert!(validate(&raw, &well_schema()).is_err());
}

#[test]
fn test_nested_failure_rejects_parent() {
    let raw = row(json!({
        "WellId": 1,
        "WellName": "B-1",
        "Location": {"Region": "GoM"}
    }));

    let err = validate(&raw, &well_schema()).unwrap_err();
    assert!(matches!(&err, Error::SchemaValidation { field, .. } if field == "Location.Country"));
}

#[test]
fn test_canonical_name_wins_over_alias() {
    let raw = row(json!({
        "WellId": 1,
        "WellName": "B-1",
        "Location": {"Region": "GoM", "Country": "USA"},
        "WOW": 3.0,
        "WoW": 99.0
    }));

    let record = validate(&raw, &well_schema()).unwrap();
    assert_eq!(record.get("WOW").unwrap().as_f64(), Some(3.0));
}

#[test]
fn test_aliases_tried_in_declaration_order() {
    let raw = row(json!({
        "WellId": 1,
        "WellName": "B-1",
        "Location": {"Region": "GoM", "Country": "USA"},
        "Wow": 2.0
    }));

    let record = validate(&raw, &well_schema()).unwrap();
    assert_eq!(record.get("WOW").unwrap().as_f64(), Some(2.0));
}

#[test]
fn test_unknown_fields_ignored() {
    let raw = row(json!({
        "WellId": 1,
        "WellName": "B-1",
        "Location": {"Region": "GoM", "Country": "USA", "Extra": "dropped"},
        "NotDeclaredAnywhere": {"deep": [1, 2, 3]}
    }));

    let record = validate(&raw, &well_schema()).unwrap();
    assert!(record.get("NotDeclaredAnywhere").is_none());
    let location = record.get("Location").unwrap().as_record().unwrap();
    assert!(location.get("Extra").is_none());
}

#[test]
fn test_validation_is_idempotent() {
    let raw = row(json!({
        "WellId": 7,
        "WellName": "C-3",
        "Location": {"Region": "North Sea", "Country": "UK"},
        "WoW": 0.5
    }));

    let schema = well_schema();
    let first = validate(&raw, &schema).unwrap();
    let second = validate(&raw, &schema).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Coercion Tests
// ============================================================================

#[test]
fn test_coercions_accepted() {
    let schema = Schema::new(
        "Coercions",
        vec![
            FieldSpec::required("Name", FieldKind::String),
            FieldSpec::required("Count", FieldKind::Integer),
            FieldSpec::required("Ratio", FieldKind::Float),
            FieldSpec::required("Flag", FieldKind::Boolean),
        ],
    );

    // Numbers stringify, numeric strings parse, 1 is true.
    let raw = row(json!({
        "Name": 42,
        "Count": "17",
        "Ratio": "2.5",
        "Flag": 1
    }));

    let record = validate(&raw, &schema).unwrap();
    assert_eq!(record.get("Name").unwrap().as_str(), Some("42"));
    assert_eq!(record.get("Count").unwrap().as_i64(), Some(17));
    assert_eq!(record.get("Ratio").unwrap().as_f64(), Some(2.5));
    assert_eq!(record.get("Flag").unwrap().as_bool(), Some(true));
}

#[test]
fn test_integral_float_coerces_to_integer() {
    let schema = Schema::new(
        "Coercions",
        vec![FieldSpec::required("Count", FieldKind::Integer)],
    );
    let record = validate(&row(json!({"Count": 3.0})), &schema).unwrap();
    assert_eq!(record.get("Count").unwrap().as_i64(), Some(3));

    assert!(validate(&row(json!({"Count": 3.5})), &schema).is_err());
}

#[test]
fn test_type_mismatches_rejected() {
    let schema = Schema::new(
        "Coercions",
        vec![
            FieldSpec::required("Count", FieldKind::Integer),
            FieldSpec::optional("When", FieldKind::Timestamp),
        ],
    );

    assert!(validate(&row(json!({"Count": "not a number"})), &schema).is_err());
    assert!(validate(&row(json!({"Count": [1]})), &schema).is_err());
    assert!(validate(&row(json!({"Count": 1, "When": "yesterday"})), &schema).is_err());
}

#[test]
fn test_timestamp_formats() {
    let schema = Schema::new(
        "Dates",
        vec![FieldSpec::required("When", FieldKind::Timestamp)],
    );

    let expected = Utc.with_ymd_and_hms(2020, 6, 15, 12, 0, 0).unwrap();
    for input in [
        "2020-06-15T12:00:00Z",
        "2020-06-15T12:00:00+00:00",
        "2020-06-15T12:00:00",
        "2020-06-15 12:00:00",
    ] {
        let record = validate(&row(json!({"When": input})), &schema).unwrap();
        assert_eq!(
            record.get("When").unwrap().as_timestamp(),
            Some(expected),
            "failed for {input}"
        );
    }

    let record = validate(&row(json!({"When": "2020-06-15"})), &schema).unwrap();
    assert_eq!(
        record.get("When").unwrap().as_timestamp(),
        Some(Utc.with_ymd_and_hms(2020, 6, 15, 0, 0, 0).unwrap())
    );
}

// ============================================================================
// Normalizer Tests
// ============================================================================

#[test]
fn test_normalizer_runs_after_population() {
    let schema = Schema::new(
        "Rig",
        vec![
            FieldSpec::required("WellId", FieldKind::Integer),
            FieldSpec::optional("RigType", FieldKind::String),
        ],
    )
    .with_normalizer("RigType", expand_rig_type);

    let record = validate(&row(json!({"WellId": 1, "RigType": "S"})), &schema).unwrap();
    assert_eq!(
        record.get("RigType").unwrap().as_str(),
        Some("Semi-Submersible")
    );

    // Absent optional gets the N/A default instead of the missing sentinel.
    let record = validate(&row(json!({"WellId": 1})), &schema).unwrap();
    assert_eq!(record.get("RigType").unwrap().as_str(), Some("N/A"));
}

// ============================================================================
// Batch Processor Tests
// ============================================================================

#[test]
fn test_batch_counts_and_drops_invalid_rows() {
    let valid = row(json!({
        "WellId": 1,
        "WellName": "B-1",
        "Location": {"Region": "GoM", "Country": "USA"}
    }));
    let invalid = row(json!({"WellName": "broken"}));

    let schema = well_schema();
    let batch = process_batch(&[valid.clone(), invalid], &schema);

    assert_eq!(batch.len(), 1);
    assert_eq!(batch.rejected(), 1);
    assert_eq!(batch.records()[0], validate(&valid, &schema).unwrap());
}

#[test]
fn test_batch_preserves_input_order() {
    let rows: Vec<RawRecord> = (1..=5)
        .map(|id| {
            row(json!({
                "WellId": id,
                "WellName": format!("W-{id}"),
                "Location": {"Region": "GoM", "Country": "USA"}
            }))
        })
        .collect();

    let batch = process_batch(&rows, &well_schema());
    assert_eq!(batch.rejected(), 0);
    let ids: Vec<i64> = batch
        .records()
        .iter()
        .map(|r| r.get("WellId").unwrap().as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_batch_of_nothing() {
    let batch = process_batch(&[], &well_schema());
    assert!(batch.is_empty());
    assert_eq!(batch.rejected(), 0);
    assert!(batch.into_records().is_empty());
}
