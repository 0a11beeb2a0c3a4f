//! Canonical component records and per-block extraction output.

use serde::{Deserialize, Serialize};

/// A canonical component record in the standard schema.
///
/// Every field is always present; a value the extractor could not find is an
/// empty string, never absent. Downstream consumers rely on this totality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct Record {
    /// Part number.
    pub pn: String,

    /// Serial number.
    pub sn: String,

    /// Component description.
    pub desc: String,

    /// ATA chapter (2-digit classification code).
    pub ata: String,

    /// Maintenance interval ("O/C" or a bare count).
    pub interval: String,

    /// Time since new, decimal hours rendered as text.
    pub tsn: String,

    /// Total time since new, decimal hours rendered as text.
    pub ttsn: String,

    /// Next-due date or reference.
    pub next_due: String,

    /// Life limit.
    pub limit: String,

    /// Remaining life.
    pub remaining: String,

    /// Vendor tag of the source layout, or "UNKNOWN".
    pub source: String,

    /// Name of the document the record was extracted from.
    pub file: String,
}

/// Raw extraction output for a single block, before normalization.
///
/// Carries the canonical fields plus extraction-only values: the full
/// structured anchor reference and the landings counter, which participate
/// in filtering and acceptance but are not part of the standard schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialRecord {
    pub pn: String,
    pub sn: String,
    pub desc: String,
    pub ata: String,
    pub ata_ref: String,
    pub interval: String,
    pub tsn: String,
    pub ttsn: String,
    pub afl: String,
    pub next_due: String,
    pub limit: String,
    pub remaining: String,
}

impl PartialRecord {
    /// True if the block yielded at least one identity field.
    pub fn has_identity(&self) -> bool {
        !self.pn.is_empty() || !self.sn.is_empty() || !self.desc.is_empty()
    }

    /// True if the block yielded at least one usage counter
    /// (hours in service or a landings count).
    pub fn has_usage(&self) -> bool {
        !self.tsn.is_empty() || !self.afl.is_empty()
    }
}
