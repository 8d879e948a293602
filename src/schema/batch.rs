//! Batch validation with partial-failure tolerance
//!
//! One bad row must not abort a 1000-row page: against real-world vendor
//! data, garbage rows are a steady-state condition, and the job here is to
//! maximize the number of usable records. The batch is a fold accumulating
//! successes and a rejection count, not exception-driven control flow.

use super::types::{Schema, ValidatedRecord};
use super::validator::validate;
use crate::types::RawRecord;
use tracing::{debug, warn};

/// The outcome of validating one extraction: the valid records in their
/// original order plus the count of rejected rows
///
/// The rejection count exists for observability; it is never raised as an
/// error by itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordBatch {
    records: Vec<ValidatedRecord>,
    rejected: usize,
}

impl RecordBatch {
    /// The validated records, in the order the vendor returned them
    pub fn records(&self) -> &[ValidatedRecord] {
        &self.records
    }

    /// Number of rows dropped for failing validation
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Number of valid records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no rows validated
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the batch, yielding the validated records
    pub fn into_records(self) -> Vec<ValidatedRecord> {
        self.records
    }
}

/// Validate every row independently, dropping and counting failures
pub fn process_batch(rows: &[RawRecord], schema: &Schema) -> RecordBatch {
    let mut records = Vec::with_capacity(rows.len());
    let mut rejected = 0;

    for row in rows {
        match validate(row, schema) {
            Ok(record) => records.push(record),
            Err(err) => {
                rejected += 1;
                warn!("dropping row that failed {} validation: {err}", schema.name);
            }
        }
    }

    debug!(
        "validated {} rows against {}, rejected {rejected}",
        records.len(),
        schema.name
    );
    RecordBatch { records, rejected }
}
