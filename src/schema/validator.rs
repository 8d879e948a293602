//! The generic record validator
//!
//! One validator serves every report schema; report-specific rules live
//! entirely in the schema tables. Lookup tries the canonical name first,
//! then the declared aliases in order. Nested sub-schemas validate
//! recursively, and a failure anywhere fails the whole record.

use super::types::{FieldKind, FieldSpec, FieldValue, Schema, ValidatedRecord};
use crate::error::{Error, Result};
use crate::types::{JsonValue, RawRecord};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Validate one raw vendor row against a schema
///
/// Fields present in the raw record but not declared in the schema are
/// ignored. A required field that is absent or null fails the record with
/// [`Error::SchemaValidation`]; an optional one becomes
/// [`FieldValue::Missing`]. Normalization hooks run after all fields are
/// populated.
pub fn validate(raw: &RawRecord, schema: &Schema) -> Result<ValidatedRecord> {
    validate_at(raw, schema, "")
}

fn validate_at(raw: &RawRecord, schema: &Schema, path: &str) -> Result<ValidatedRecord> {
    let mut record = ValidatedRecord::new(schema.name);

    for spec in &schema.fields {
        let field_path = join_path(path, spec.canonical);
        match lookup(raw, spec) {
            None | Some(JsonValue::Null) => {
                if spec.required {
                    return Err(Error::validation(
                        field_path,
                        "required field is missing or null",
                    ));
                }
                record.insert(spec.canonical, FieldValue::Missing);
            }
            Some(value) => {
                record.insert(spec.canonical, coerce(value, &spec.kind, &field_path)?);
            }
        }
    }

    for normalizer in &schema.normalizers {
        record.normalize(normalizer);
    }

    Ok(record)
}

/// Find the raw value for a declaration: canonical name first, then aliases
/// in declaration order
fn lookup<'a>(raw: &'a RawRecord, spec: &FieldSpec) -> Option<&'a JsonValue> {
    if let Some(value) = raw.get(spec.canonical) {
        return Some(value);
    }
    spec.aliases.iter().find_map(|alias| raw.get(*alias))
}

fn coerce(value: &JsonValue, kind: &FieldKind, path: &str) -> Result<FieldValue> {
    match kind {
        FieldKind::String => match value {
            JsonValue::String(s) => Ok(FieldValue::String(s.clone())),
            JsonValue::Number(n) => Ok(FieldValue::String(n.to_string())),
            JsonValue::Bool(b) => Ok(FieldValue::String(b.to_string())),
            other => Err(type_error(path, kind, other)),
        },
        FieldKind::Integer => match value {
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(FieldValue::Integer(i))
                } else {
                    coerce_integral_float(n, path)
                }
            }
            JsonValue::String(s) => s.trim().parse::<i64>().map(FieldValue::Integer).map_err(|_| {
                Error::validation(path, format!("cannot parse '{s}' as an integer"))
            }),
            other => Err(type_error(path, kind, other)),
        },
        FieldKind::Float => match value {
            JsonValue::Number(n) => n
                .as_f64()
                .map(FieldValue::Float)
                .ok_or_else(|| type_error(path, kind, value)),
            JsonValue::String(s) => s.trim().parse::<f64>().map(FieldValue::Float).map_err(|_| {
                Error::validation(path, format!("cannot parse '{s}' as a float"))
            }),
            other => Err(type_error(path, kind, other)),
        },
        FieldKind::Boolean => match value {
            JsonValue::Bool(b) => Ok(FieldValue::Boolean(*b)),
            JsonValue::Number(n) => match n.as_i64() {
                Some(0) => Ok(FieldValue::Boolean(false)),
                Some(1) => Ok(FieldValue::Boolean(true)),
                _ => Err(type_error(path, kind, value)),
            },
            JsonValue::String(s) if s.eq_ignore_ascii_case("true") => {
                Ok(FieldValue::Boolean(true))
            }
            JsonValue::String(s) if s.eq_ignore_ascii_case("false") => {
                Ok(FieldValue::Boolean(false))
            }
            other => Err(type_error(path, kind, other)),
        },
        FieldKind::Timestamp => match value {
            JsonValue::String(s) => parse_timestamp(s, path),
            other => Err(type_error(path, kind, other)),
        },
        FieldKind::Object(sub_schema) => match value {
            JsonValue::Object(map) => {
                Ok(FieldValue::Record(validate_at(map, sub_schema, path)?))
            }
            other => Err(type_error(path, kind, other)),
        },
        FieldKind::List(element_kind) => match value {
            JsonValue::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    if item.is_null() {
                        out.push(FieldValue::Missing);
                    } else {
                        out.push(coerce(item, element_kind, &format!("{path}[{index}]"))?);
                    }
                }
                Ok(FieldValue::List(out))
            }
            other => Err(type_error(path, kind, other)),
        },
    }
}

fn coerce_integral_float(n: &serde_json::Number, path: &str) -> Result<FieldValue> {
    match n.as_f64() {
        #[allow(clippy::cast_possible_truncation)]
        Some(f) if f.fract() == 0.0 && f.abs() < 9.007_199_254_740_992e15 => {
            Ok(FieldValue::Integer(f as i64))
        }
        _ => Err(Error::validation(
            path,
            format!("cannot represent {n} as an integer"),
        )),
    }
}

/// Parse a vendor timestamp: RFC 3339 first, then the bare forms the API
/// uses for older rows
fn parse_timestamp(s: &str, path: &str) -> Result<FieldValue> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Ok(FieldValue::Timestamp(ts.with_timezone(&Utc)));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(FieldValue::Timestamp(Utc.from_utc_datetime(&naive)));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(FieldValue::Timestamp(Utc.from_utc_datetime(&naive)));
        }
    }
    Err(Error::validation(
        path,
        format!("cannot parse '{s}' as a timestamp"),
    ))
}

fn type_error(path: &str, kind: &FieldKind, value: &JsonValue) -> Error {
    Error::validation(
        path,
        format!("expected {}, got {}", kind.name(), json_type_name(value)),
    )
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

fn join_path(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{parent}.{field}")
    }
}
