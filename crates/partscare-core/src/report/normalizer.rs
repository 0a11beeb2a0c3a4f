//! Normalization of partial records into the canonical schema.

use crate::models::record::{PartialRecord, Record};
use crate::vendor::Vendor;

/// Map a vendor-specific partial record onto the canonical schema.
///
/// Every canonical field is present in the output; whatever the extractor
/// left blank stays an empty string. `SOURCE` carries the vendor tag,
/// `FILE` the document identifier. Extraction-only fields (the structured
/// anchor reference, the landings counter) do not survive normalization.
pub fn normalize(partial: PartialRecord, vendor: Vendor, file: &str) -> Record {
    Record {
        pn: partial.pn,
        sn: partial.sn,
        desc: partial.desc,
        ata: partial.ata,
        interval: partial.interval,
        tsn: partial.tsn,
        ttsn: partial.ttsn,
        next_due: partial.next_due,
        limit: partial.limit,
        remaining: partial.remaining,
        source: vendor.tag().to_string(),
        file: file.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_partial_yields_schema_complete_record() {
        let record = normalize(PartialRecord::default(), Vendor::Gulfstream, "g550.pdf");

        assert_eq!(record.source, "Gulfstream");
        assert_eq!(record.file, "g550.pdf");
        assert_eq!(record.pn, "");
        assert_eq!(record.tsn, "");
        assert_eq!(record.remaining, "");
    }

    #[test]
    fn test_fields_carry_over() {
        let partial = PartialRecord {
            pn: "123-ABC".to_string(),
            tsn: "1200.5".to_string(),
            afl: "1450".to_string(),
            ..PartialRecord::default()
        };
        let record = normalize(partial, Vendor::Unknown, "r.txt");

        assert_eq!(record.pn, "123-ABC");
        assert_eq!(record.tsn, "1200.5");
        assert_eq!(record.source, "UNKNOWN");
    }
}
