//! Tests for the report schema tables

use super::*;
use crate::schema::{FieldKind, FieldValue, validate};
use crate::types::Report;
use serde_json::json;

#[test]
fn test_schema_for_maps_reports() {
    assert_eq!(schema_for(Report::Abandonment).name, "Abandonment");
    assert_eq!(schema_for(Report::Drilling).name, "Drilling");
    assert_eq!(schema_for(Report::Completion).name, "Completion");
}

#[test]
fn test_abandonment_alias_data() {
    let schema = &*ABANDONMENT;

    let days = schema.field("Days").unwrap();
    assert_eq!(days.aliases, ["Time"]);
    assert!(days.required);

    let wow = schema.field("WOW").unwrap();
    assert_eq!(wow.aliases, ["WoW"]);

    let pt = schema.field("PT").unwrap();
    assert_eq!(pt.aliases, ["ProductiveTime"]);

    // NonDES spells waiting-on-weather differently from every other block.
    let phase1 = match &schema.field("Phase1").unwrap().kind {
        FieldKind::Object(sub) => sub,
        other => panic!("Phase1 should be an object, got {other:?}"),
    };
    let non_des = match &phase1.field("NonDES").unwrap().kind {
        FieldKind::Object(sub) => sub,
        other => panic!("NonDES should be an object, got {other:?}"),
    };
    assert_eq!(non_des.field("WOW").unwrap().aliases, ["Wow"]);
    assert_eq!(
        non_des.field("Equipment").unwrap().aliases,
        ["HeavyRotatingEquipmentUsed"]
    );
}

#[test]
fn test_drilling_records_casing_sizes_typo() {
    let casings = match &DRILLING.field("Casings").unwrap().kind {
        FieldKind::Object(sub) => sub,
        other => panic!("Casings should be an object, got {other:?}"),
    };
    let sizes = casings.field("PreExistingCasingSizes").unwrap();
    assert_eq!(sizes.aliases, ["PreExisitingCasingSizes"]);
    assert!(sizes.required);
}

#[test]
fn test_drilling_rig_type_is_normalized() {
    assert!(DRILLING
        .normalizers
        .iter()
        .any(|n| n.field == "RigType"));
}

#[test]
fn test_completion_wow_alias_drift() {
    let final_casing = match &COMPLETION.field("FinalCasing").unwrap().kind {
        FieldKind::Object(sub) => sub,
        other => panic!("FinalCasing should be an object, got {other:?}"),
    };
    assert_eq!(final_casing.field("WOW").unwrap().aliases, ["WoW"]);

    let perforation = match &COMPLETION.field("Perforation").unwrap().kind {
        FieldKind::Object(sub) => sub,
        other => panic!("Perforation should be an object, got {other:?}"),
    };
    assert_eq!(perforation.field("WOW").unwrap().aliases, ["WoWDays"]);
}

#[test]
fn test_abandonment_sub_schema_round_trip() {
    // The preparatory-work block stands alone well enough to validate.
    let schema = match &ABANDONMENT.field("PreparatoryWork").unwrap().kind {
        FieldKind::Object(sub) => sub.clone(),
        other => panic!("PreparatoryWork should be an object, got {other:?}"),
    };

    let raw = match json!({
        "PreWorkscopeOperations": "Tubing punch",
        "RigType": "J",
        "Days": 4.5,
        "WoW": 0.5,
        "ProductiveTime": 4.0
    }) {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    };

    let record = validate(&raw, &schema).unwrap();
    assert_eq!(record.get("WOW").unwrap().as_f64(), Some(0.5));
    assert_eq!(record.get("PT").unwrap().as_f64(), Some(4.0));
    // Rig-type hook expands the code.
    assert_eq!(record.get("RigType").unwrap().as_str(), Some("Jack-up"));
    assert_eq!(record.get("NPT"), Some(&FieldValue::Missing));
    assert_eq!(record.get("Cost"), Some(&FieldValue::Missing));
}
