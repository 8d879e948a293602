//! Schema description types and validated values

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

// ============================================================================
// Schema Description
// ============================================================================

/// Declared type of a schema field
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// UTF-8 string; numbers and booleans are stringified on coercion
    String,
    /// 64-bit integer; integral floats and numeric strings are accepted
    Integer,
    /// 64-bit float
    Float,
    /// Boolean; 0/1 and "true"/"false" are accepted
    Boolean,
    /// UTC timestamp; RFC 3339 or the vendor's bare datetime form
    Timestamp,
    /// Nested sub-structure validated against its own schema
    Object(Schema),
    /// Sequence of one element kind; null elements become `Missing`
    List(Box<FieldKind>),
}

impl FieldKind {
    /// Short name used in validation error messages
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
            FieldKind::Boolean => "boolean",
            FieldKind::Timestamp => "timestamp",
            FieldKind::Object(_) => "object",
            FieldKind::List(_) => "list",
        }
    }
}

/// One field declaration: canonical name, vendor aliases, type, required flag
///
/// Aliases exist because the vendor's field-naming is inconsistent across
/// report variants ("WoW" vs "Wow", "ProductiveTime" vs "ProductiveDays",
/// plus outright typos). Declaring them as data keeps the inconsistency out
/// of the validation code.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// The schema's preferred name, to which any alias is normalized
    pub canonical: &'static str,
    /// Vendor names tried after the canonical one, in declaration order
    pub aliases: &'static [&'static str],
    /// Declared type
    pub kind: FieldKind,
    /// Whether an absent or null value rejects the whole record
    pub required: bool,
}

impl FieldSpec {
    /// Declare a required field
    pub fn required(canonical: &'static str, kind: FieldKind) -> Self {
        Self {
            canonical,
            aliases: &[],
            kind,
            required: true,
        }
    }

    /// Declare an optional field
    pub fn optional(canonical: &'static str, kind: FieldKind) -> Self {
        Self {
            canonical,
            aliases: &[],
            kind,
            required: false,
        }
    }

    /// Attach vendor aliases, tried in the given order
    #[must_use]
    pub fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }
}

/// Post-validation transform applied to a single field
///
/// Hooks run after required-field checks pass and before the record is
/// returned; they receive the populated value (possibly `Missing` for
/// optional fields) and must not reintroduce required-field violations.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    /// Canonical name of the field to transform
    pub field: &'static str,
    /// The transform itself
    pub apply: fn(FieldValue) -> FieldValue,
}

/// A record schema: an ordered table of field declarations
#[derive(Debug, Clone)]
pub struct Schema {
    /// Schema name, used in logs and validation errors
    pub name: &'static str,
    /// Field declarations, validated in order
    pub fields: Vec<FieldSpec>,
    /// Normalization hooks keyed by canonical field name
    pub normalizers: Vec<Normalizer>,
}

impl Schema {
    /// Create a schema from its field table
    pub fn new(name: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self {
            name,
            fields,
            normalizers: Vec::new(),
        }
    }

    /// Attach a normalization hook for one field
    #[must_use]
    pub fn with_normalizer(mut self, field: &'static str, apply: fn(FieldValue) -> FieldValue) -> Self {
        self.normalizers.push(Normalizer { field, apply });
        self
    }

    /// Look up a field declaration by canonical name
    pub fn field(&self, canonical: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.canonical == canonical)
    }
}

// ============================================================================
// Validated Values
// ============================================================================

/// A validated field value
///
/// `Missing` is the explicit sentinel for absent or null optional fields;
/// nothing is ever silently defaulted to zero or the empty string.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Optional field that was absent or null in the raw record
    Missing,
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Timestamp(DateTime<Utc>),
    /// Validated nested sub-structure
    Record(ValidatedRecord),
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Check for the missing sentinel
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }

    /// Borrow as a string, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as an integer, if this is an integer value
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as a float; integers widen
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Float(f) => Some(*f),
            #[allow(clippy::cast_precision_loss)]
            FieldValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get as a boolean, if this is a boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as a timestamp, if this is a timestamp value
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Borrow the nested record, if this is a record value
    pub fn as_record(&self) -> Option<&ValidatedRecord> {
        match self {
            FieldValue::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Borrow the list elements, if this is a list value
    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }
}

/// A record that passed schema validation: canonical names to typed values
///
/// Immutable after construction; the only mutation is the normalization
/// hooks run by the validator before the record is handed out.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRecord {
    schema: &'static str,
    fields: BTreeMap<&'static str, FieldValue>,
}

impl ValidatedRecord {
    pub(crate) fn new(schema: &'static str) -> Self {
        Self {
            schema,
            fields: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, canonical: &'static str, value: FieldValue) {
        self.fields.insert(canonical, value);
    }

    /// Run one normalization hook; a no-op when the field is not populated
    pub(crate) fn normalize(&mut self, normalizer: &Normalizer) {
        if let Some(value) = self.fields.remove(normalizer.field) {
            self.fields.insert(normalizer.field, (normalizer.apply)(value));
        }
    }

    /// Name of the schema this record was validated against
    pub fn schema_name(&self) -> &'static str {
        self.schema
    }

    /// Look up a field by canonical name
    pub fn get(&self, canonical: &str) -> Option<&FieldValue> {
        self.fields.get(canonical)
    }

    /// Number of fields (every declared field is present, `Missing` included)
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in canonical-name order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (*name, value))
    }
}
