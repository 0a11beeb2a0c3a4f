//! Fleet-roster reconstruction from tabular dumps.
//!
//! Roster spreadsheets arrive as a headerless grid of cells: one anchor row
//! per airframe, followed by free-text continuation rows. The builder
//! infers which structural columns carry the registration and the
//! construction number, cuts the grid into spans at the anchors, and folds
//! each span into one [`FleetRecord`].

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, info};

use crate::models::fleet::{FleetRecord, YearCell};
use crate::models::document::squash_ws;

lazy_static! {
    static ref TAIL_SHAPE: Regex = Regex::new(
        r"^(?:[A-Z0-9]{1,2}-?[A-Z0-9]{2,6}|N[0-9]{1,5}[A-Z]{0,2})$"
    ).unwrap();

    static ref CN_SHAPE: Regex = Regex::new(
        r"^\d{4,6}$"
    ).unwrap();
}

/// Status phrases in priority order. The first phrase found anywhere in a
/// span wins, regardless of where in the span it sits.
pub const STATUS_PHRASES: &[&str] = &[
    "on order",
    "broken up",
    "stored",
    "withdrawn from use",
    "written off",
    "status n/a",
    "current",
];

/// Columns scanned when inferring the TAIL and CN columns.
const COLUMN_SCAN_WIDTH: usize = 6;

/// Leading non-empty values tested per column.
const COLUMN_SCAN_DEPTH: usize = 50;

/// Fallback columns when inference finds no candidate.
const DEFAULT_TAIL_COLUMN: usize = 0;
const DEFAULT_CN_COLUMN: usize = 2;

/// Fixed structural cells read off an anchor row.
const TYPE_COLUMN: usize = 1;
const ENGINE_COLUMN: usize = 4;
const AIRFRAME_NOTE_COLUMN: usize = 5;
const OPERATOR_COLUMN: usize = 6;
const YEAR_COLUMN: usize = 7;

/// True when a cell looks like an aircraft registration.
pub fn is_tail(value: &str) -> bool {
    let candidate = value.trim().to_uppercase();
    !candidate.is_empty() && TAIL_SHAPE.is_match(&candidate)
}

/// True when a cell looks like a construction number.
pub fn is_cn(value: &str) -> bool {
    CN_SHAPE.is_match(value.trim())
}

/// Reconstructs fleet records from a raw cell grid.
pub struct FleetTableBuilder;

impl FleetTableBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the fleet table. No anchor rows means an empty (but
    /// schema-complete) result, not a failure.
    pub fn build(&self, grid: &[Vec<String>]) -> Vec<FleetRecord> {
        let (tail_col, cn_col) = infer_columns(grid);
        debug!("fleet columns: tail={}, cn={}", tail_col, cn_col);

        let anchors: Vec<usize> = grid
            .iter()
            .enumerate()
            .filter(|(_, row)| is_tail(cell(row, tail_col)) && is_cn(cell(row, cn_col)))
            .map(|(i, _)| i)
            .collect();

        if anchors.is_empty() {
            info!("no tail/cn anchor rows found in {} grid rows", grid.len());
            return Vec::new();
        }

        let mut records: Vec<FleetRecord> = anchors
            .iter()
            .enumerate()
            .map(|(j, &start)| {
                let end = anchors
                    .get(j + 1)
                    .map(|&next| next - 1)
                    .unwrap_or(grid.len() - 1);
                build_span(grid, start, end, tail_col, cn_col)
            })
            .collect();

        records.sort_by_key(|record| cn_sort_key(&record.cn));
        info!("fleet table: {} records from {} rows", records.len(), grid.len());
        records
    }
}

impl Default for FleetTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn cell<'a>(row: &'a [String], col: usize) -> &'a str {
    row.get(col).map(String::as_str).unwrap_or("")
}

/// Infer the TAIL and CN columns from leading values, falling back to the
/// usual layout when nothing qualifies. Tolerates column drift between
/// roster exports.
fn infer_columns(grid: &[Vec<String>]) -> (usize, usize) {
    let mut tail_col = None;
    let mut cn_col = None;

    for col in 0..COLUMN_SCAN_WIDTH {
        let values = grid
            .iter()
            .map(|row| cell(row, col).trim())
            .filter(|v| !v.is_empty())
            .take(COLUMN_SCAN_DEPTH);

        for value in values {
            if tail_col.is_none() && is_tail(value) {
                tail_col = Some(col);
            }
            if cn_col.is_none() && is_cn(value) {
                cn_col = Some(col);
            }
        }
    }

    (
        tail_col.unwrap_or(DEFAULT_TAIL_COLUMN),
        cn_col.unwrap_or(DEFAULT_CN_COLUMN),
    )
}

fn build_span(
    grid: &[Vec<String>],
    start: usize,
    end: usize,
    tail_col: usize,
    cn_col: usize,
) -> FleetRecord {
    let anchor = &grid[start];

    let notes: Vec<String> = grid[start + 1..=end]
        .iter()
        .map(|row| cell(row, tail_col))
        .filter(|value| !value.trim().is_empty() && !is_tail(value))
        .map(squash_ws)
        .collect();

    FleetRecord {
        tail: cell(anchor, tail_col).trim().to_string(),
        aircraft_type: cell(anchor, TYPE_COLUMN).trim().to_string(),
        cn: cell(anchor, cn_col).trim().to_string(),
        notes: notes.join(" | "),
        engine: cell(anchor, ENGINE_COLUMN).trim().to_string(),
        airframe_note: cell(anchor, AIRFRAME_NOTE_COLUMN).trim().to_string(),
        operator: cell(anchor, OPERATOR_COLUMN).trim().to_string(),
        year: coerce_year(cell(anchor, YEAR_COLUMN)),
        status: span_status(&grid[start..=end]),
    }
}

/// First status phrase, in priority order, found anywhere in the span.
fn span_status(span: &[Vec<String>]) -> String {
    let text = span
        .iter()
        .flat_map(|row| row.iter())
        .map(|cell| cell.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    STATUS_PHRASES
        .iter()
        .find(|phrase| text.contains(*phrase))
        .unwrap_or(&"current")
        .to_string()
}

/// Coerce a year cell to an integer, tolerating a float rendering;
/// keep the raw text when coercion fails.
fn coerce_year(raw: &str) -> YearCell {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return YearCell::Text(String::new());
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return YearCell::Number(n);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        return YearCell::Number(f as i64);
    }
    YearCell::Text(trimmed.to_string())
}

/// Sort key: CN as integer, non-numeric CN as 0 (sorts first).
fn cn_sort_key(cn: &str) -> i64 {
    cn.trim().parse::<i64>().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_tail_and_cn_shapes() {
        assert!(is_tail("N123AB"));
        assert!(is_tail("ph-glf"));
        assert!(is_tail("VP-BKZ"));
        assert!(!is_tail("withdrawn from use"));
        assert!(!is_tail(""));

        assert!(is_cn("10234"));
        assert!(!is_cn("123"));
        assert!(!is_cn("10234X"));
    }

    #[test]
    fn test_two_anchor_spans_sorted_by_cn() {
        let grid = vec![
            row(&["N456CD", "G500", "10567", "", "BR710", "", "Acme Air", "2011"]),
            row(&["first operated in Europe"]),
            row(&["N123AB", "G550", "10234", "", "BR710", "", "Beta Jets", "2008"]),
        ];
        let records = FleetTableBuilder::new().build(&grid);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].cn, "10234");
        assert_eq!(records[0].tail, "N123AB");
        assert_eq!(records[1].cn, "10567");
        assert_eq!(records[1].notes, "first operated in Europe");
    }

    #[test]
    fn test_status_priority_is_list_order_not_position() {
        let grid = vec![
            row(&["N123AB", "G550", "10234"]),
            row(&["currently operated, then stored at LGG"]),
        ];
        let records = FleetTableBuilder::new().build(&grid);

        // "current" appears first in the text, "stored" first in the list.
        assert_eq!(records[0].status, "stored");
    }

    #[test]
    fn test_status_defaults_to_current() {
        let grid = vec![row(&["N123AB", "G550", "10234"])];
        let records = FleetTableBuilder::new().build(&grid);

        assert_eq!(records[0].status, "current");
    }

    #[test]
    fn test_year_coercion() {
        assert_eq!(coerce_year("2008"), YearCell::Number(2008));
        assert_eq!(coerce_year("2008.0"), YearCell::Number(2008));
        assert_eq!(coerce_year("unknown"), YearCell::Text("unknown".to_string()));
        assert_eq!(coerce_year("  "), YearCell::Text(String::new()));
    }

    #[test]
    fn test_non_numeric_cn_sorts_first() {
        let grid = vec![
            row(&["N456CD", "G500", "10567"]),
            // CN column falls back to its default when nothing matches the
            // shape on this row; make it an anchor with a numeric-invalid CN
            // via the inferred column instead.
        ];
        let mut records = vec![
            FleetRecord {
                cn: "10567".to_string(),
                ..FleetRecord::default()
            },
            FleetRecord {
                cn: "n/a".to_string(),
                ..FleetRecord::default()
            },
        ];
        records.sort_by_key(|r| cn_sort_key(&r.cn));
        assert_eq!(records[0].cn, "n/a");
        assert_eq!(records[1].cn, "10567");
        assert_eq!(FleetTableBuilder::new().build(&grid).len(), 1);
    }

    #[test]
    fn test_empty_grid_is_not_an_error() {
        assert!(FleetTableBuilder::new().build(&[]).is_empty());
        let noise = vec![row(&["some", "header", "text"])];
        assert!(FleetTableBuilder::new().build(&noise).is_empty());
    }
}
