//! Declarative record schemas and the generic validator
//!
//! # Overview
//!
//! A [`Schema`] is a plain table of field declarations (canonical name,
//! vendor aliases, declared type, required flag) plus optional
//! post-validation normalization hooks. One generic [`validate`] walks any
//! such table, so the three report variants differ only in data, never in
//! validation code. [`process_batch`] runs the validator over a whole
//! extraction, counting and dropping invalid rows instead of aborting.

mod batch;
mod normalize;
mod types;
mod validator;

pub use batch::{process_batch, RecordBatch};
pub use normalize::expand_rig_type;
pub use types::{FieldKind, FieldSpec, FieldValue, Normalizer, Schema, ValidatedRecord};
pub use validator::validate;

#[cfg(test)]
mod tests;
