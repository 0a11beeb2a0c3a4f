//! Calendar date extraction and normalization.
//!
//! Dates in status reports come as day + month token + year with a mix of
//! separators. Normalization runs an ordered chain of fallible parse
//! attempts; only the end of the chain may yield nothing.

use chrono::NaiveDate;

use super::patterns::DATE;
use super::FieldExtractor;

/// Parse attempts, tried in order against the separator-normalized text.
const DATE_FORMATS: &[&str] = &[
    "%d-%b-%Y", "%d-%b-%y", "%d-%B-%Y", "%d-%B-%y", "%d-%m-%Y", "%d-%m-%y",
];

/// Date field extractor.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = NaiveDate;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        DATE.find_iter(text).find_map(|m| parse_date(m.as_str()))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        DATE.find_iter(text)
            .filter_map(|m| parse_date(m.as_str()))
            .collect()
    }
}

/// Parse a raw date token through the format chain.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let dashed = raw.replace(['/', '.'], "-");
    let joined = dashed.split_whitespace().collect::<Vec<_>>().join("-");
    let candidate = titlecase(&joined);

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&candidate, fmt).ok())
}

/// Canonical rendering: `DD-Mon-YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d-%b-%Y").to_string()
}

/// Normalize a matched date token, keeping the raw text when the chain
/// cannot make sense of it.
pub fn normalize_date_or_raw(raw: &str) -> String {
    parse_date(raw).map(format_date).unwrap_or_else(|| raw.to_string())
}

/// Uppercase the first letter of each alphabetic run, lowercase the rest,
/// so month tokens match the chrono format names.
fn titlecase(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut boundary = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if boundary {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            boundary = false;
        } else {
            out.push(c);
            boundary = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 12).unwrap();
        for raw in ["12-Jan-2024", "12/Jan/2024", "12 Jan 2024", "12-JAN-24", "12.jan.2024"] {
            assert_eq!(parse_date(raw), Some(expected), "{raw}");
        }
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date("Jan-2024"), None);
        assert_eq!(parse_date("12Jan2024"), None);
    }

    #[test]
    fn test_extract_first_in_text_order() {
        let extractor = DateExtractor::new();
        let text = "C/W 3-Mar-2023, next 12-Jan-2024";
        assert_eq!(
            extractor.extract(text),
            NaiveDate::from_ymd_opt(2023, 3, 3)
        );
        assert_eq!(extractor.extract_all(text).len(), 2);
    }

    #[test]
    fn test_normalize_keeps_unparseable_raw() {
        assert_eq!(normalize_date_or_raw("12-Jan-2024"), "12-Jan-2024");
        assert_eq!(normalize_date_or_raw("12 JAN 24"), "12-Jan-2024");
        assert_eq!(normalize_date_or_raw("12Jan2024"), "12Jan2024");
    }
}
