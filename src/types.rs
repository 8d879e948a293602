//! Common types used throughout the Rushmore extractor
//!
//! This module contains shared type definitions and type aliases
//! used across multiple modules.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// One well row exactly as returned by the vendor, in the vendor's own
/// field-naming scheme (aliases and typos included)
pub type RawRecord = JsonObject;

// ============================================================================
// Report
// ============================================================================

/// The Rushmore performance reviews served by the wells endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Report {
    /// Abandonment Performance Review
    #[serde(rename = "APR")]
    Abandonment,
    /// Drilling Performance Review
    #[serde(rename = "DPR")]
    Drilling,
    /// Completion Performance Review
    #[serde(rename = "CPR")]
    Completion,
}

impl Report {
    /// All supported reports
    pub const ALL: [Report; 3] = [Report::Abandonment, Report::Drilling, Report::Completion];

    /// The report identifier as it appears in the URL path (case-sensitive)
    pub fn code(self) -> &'static str {
        match self {
            Report::Abandonment => "APR",
            Report::Drilling => "DPR",
            Report::Completion => "CPR",
        }
    }
}

impl FromStr for Report {
    type Err = Error;

    /// Parse a report name case-insensitively; the URL keeps the canonical
    /// upper-case code regardless of the input casing
    fn from_str(name: &str) -> Result<Self> {
        match name.to_ascii_uppercase().as_str() {
            "APR" => Ok(Report::Abandonment),
            "DPR" => Ok(Report::Drilling),
            "CPR" => Ok(Report::Completion),
            _ => Err(Error::unsupported_report(name)),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("APR", Report::Abandonment; "upper apr")]
    #[test_case("apr", Report::Abandonment; "lower apr")]
    #[test_case("Dpr", Report::Drilling; "mixed dpr")]
    #[test_case("cpr", Report::Completion; "lower cpr")]
    fn test_report_parse(name: &str, expected: Report) {
        assert_eq!(name.parse::<Report>().unwrap(), expected);
    }

    #[test]
    fn test_report_parse_rejects_unknown() {
        let err = "XYZ".parse::<Report>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedReport { name } if name == "XYZ"));
    }

    #[test]
    fn test_report_code_is_case_sensitive_in_url() {
        assert_eq!(Report::Abandonment.code(), "APR");
        assert_eq!(Report::Drilling.code(), "DPR");
        assert_eq!(Report::Completion.code(), "CPR");
        assert_eq!(Report::Drilling.to_string(), "DPR");
    }

    #[test]
    fn test_report_serde() {
        let report: Report = serde_json::from_str("\"DPR\"").unwrap();
        assert_eq!(report, Report::Drilling);
        assert_eq!(serde_json::to_string(&Report::Abandonment).unwrap(), "\"APR\"");
    }
}
