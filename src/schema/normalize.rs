//! Field normalization hooks
//!
//! Rushmore reports rig classes as short codes; downstream consumers want
//! the descriptive names. The expansion runs as a post-validation hook so
//! the generic validator stays free of report-specific logic.

use super::types::FieldValue;

/// Expand a rig-type code to its descriptive name
///
/// Unrecognized codes pass through verbatim (the vendor occasionally ships
/// full names already), and an absent optional field becomes `"N/A"`.
pub fn expand_rig_type(value: FieldValue) -> FieldValue {
    match value {
        FieldValue::String(code) => match rig_type_name(&code) {
            Some(name) => FieldValue::String(name.to_string()),
            None => FieldValue::String(code),
        },
        FieldValue::Missing => FieldValue::String("N/A".to_string()),
        other => other,
    }
}

fn rig_type_name(code: &str) -> Option<&'static str> {
    match code {
        "L" => Some("Land Rig"),
        "J" => Some("Jack-up"),
        "S" => Some("Semi-Submersible"),
        "D" => Some("Drillship"),
        "P" => Some("Fixed Platform"),
        "T" => Some("Tender Assisted"),
        "B" => Some("Inland Barge"),
        _ => None,
    }
}
