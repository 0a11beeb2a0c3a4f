//! Rule-based field extractors for status-report blocks.

pub mod dates;
pub mod hours;
pub mod idents;
pub mod intervals;
pub mod patterns;

pub use dates::{parse_date, format_date, normalize_date_or_raw, DateExtractor};
pub use hours::{parse_hours, render_hours, HoursExtractor};
pub use idents::{part_number, serial_number, ata_label, scrub_labels, recover_description};
pub use intervals::extract_interval;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
