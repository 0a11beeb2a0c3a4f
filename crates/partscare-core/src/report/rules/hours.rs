//! Hours-in-service extraction.
//!
//! Usage counters appear either as decimal hours or as `HH:MM`. A comma in
//! an hour value is a decimal point in these layouts, never a thousands
//! separator.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::{CLOCK_HOURS, HOURS};
use super::FieldExtractor;

/// Labeled hours extractor (`HRS`, `ENG. HRS`).
pub struct HoursExtractor;

impl HoursExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HoursExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for HoursExtractor {
    type Output = Decimal;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        HOURS
            .captures_iter(text)
            .find_map(|caps| parse_hours(&caps[1]))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        HOURS
            .captures_iter(text)
            .filter_map(|caps| parse_hours(&caps[1]))
            .collect()
    }
}

/// Parse an hour value: `HH:MM` or decimal, comma normalized to a point.
pub fn parse_hours(raw: &str) -> Option<Decimal> {
    let s = raw.trim().replace(',', ".");

    if let Some(caps) = CLOCK_HOURS.captures(&s) {
        let hours: i64 = caps[1].parse().ok()?;
        let minutes: i64 = caps[2].parse().ok()?;
        let value = Decimal::from(hours) + Decimal::from(minutes) / Decimal::from(60);
        return Some(value.round_dp(2).normalize());
    }

    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    Decimal::from_str(&cleaned).ok().map(|d| d.normalize())
}

/// Render an hour value for the canonical record.
pub fn render_hours(value: Decimal) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_is_decimal_point() {
        assert_eq!(parse_hours("1200,5"), Decimal::from_str("1200.5").ok());
        assert_eq!(parse_hours("1200.50"), Decimal::from_str("1200.5").ok());
    }

    #[test]
    fn test_clock_format() {
        assert_eq!(parse_hours("340:30"), Decimal::from_str("340.5").ok());
        assert_eq!(parse_hours("1:20"), Decimal::from_str("1.33").ok());
    }

    #[test]
    fn test_unparseable_yields_none() {
        assert_eq!(parse_hours("1.234.5"), None);
        assert_eq!(parse_hours("--"), None);
    }

    #[test]
    fn test_labeled_extraction_first_wins() {
        let extractor = HoursExtractor::new();
        let value = extractor.extract("HRS: 1200,5 then later HRS: 9999");
        assert_eq!(value, Decimal::from_str("1200.5").ok());
    }
}
