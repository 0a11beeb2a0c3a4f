//! Fleet-roster records reconstructed from tabular dumps.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A year cell as found in the roster: an integer when coercion succeeds,
/// otherwise the raw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearCell {
    Number(i64),
    Text(String),
}

impl Default for YearCell {
    fn default() -> Self {
        YearCell::Text(String::new())
    }
}

impl fmt::Display for YearCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearCell::Number(n) => write!(f, "{n}"),
            YearCell::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One airframe reconstructed from a roster span.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct FleetRecord {
    /// Registration.
    pub tail: String,

    /// Aircraft type designation.
    #[serde(rename = "TYPE")]
    pub aircraft_type: String,

    /// Construction number; numeric-coercible text.
    pub cn: String,

    /// Free-text description lines aggregated from the span.
    pub notes: String,

    /// Engine fit.
    pub engine: String,

    /// Airframe note cell.
    pub airframe_note: String,

    /// Operator.
    pub operator: String,

    /// Build year, integer where coercible.
    pub year: YearCell,

    /// Status phrase from the closed set; "current" when none found.
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_cell_serialization() {
        assert_eq!(
            serde_json::to_string(&YearCell::Number(2008)).unwrap(),
            "2008"
        );
        assert_eq!(
            serde_json::to_string(&YearCell::Text("n/a".to_string())).unwrap(),
            "\"n/a\""
        );
    }

    #[test]
    fn test_fleet_record_field_names() {
        let json = serde_json::to_string(&FleetRecord::default()).unwrap();
        for key in [
            "TAIL", "TYPE", "CN", "NOTES", "ENGINE", "AIRFRAME_NOTE",
            "OPERATOR", "YEAR", "STATUS",
        ] {
            assert!(json.contains(&format!("\"{key}\"")), "missing {key}");
        }
    }
}
