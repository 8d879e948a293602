//! Fixed schema tables for the three Rushmore performance reviews
//!
//! # Overview
//!
//! Each review gets one declarative table: canonical field names, the
//! vendor aliases actually observed on the wire (typos included), declared
//! types and required flags. The tables are data; the validation algorithm
//! lives in [`crate::schema`] and never branches on the report type.

mod abandonment;
mod completion;
mod drilling;

pub use abandonment::ABANDONMENT;
pub use completion::COMPLETION;
pub use drilling::DRILLING;

use crate::schema::{FieldKind, FieldSpec, Schema};
use crate::types::Report;

/// The record schema for one report type
pub fn schema_for(report: Report) -> &'static Schema {
    match report {
        Report::Abandonment => &ABANDONMENT,
        Report::Drilling => &DRILLING,
        Report::Completion => &COMPLETION,
    }
}

/// Shorthand for a required field declaration
fn req(canonical: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec::required(canonical, kind)
}

/// Shorthand for an optional field declaration
fn opt(canonical: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec::optional(canonical, kind)
}

#[cfg(test)]
mod tests;
