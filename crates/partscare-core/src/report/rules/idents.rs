//! Identity fields: part numbers, serial numbers, ATA chapter labels.

use super::patterns::{
    ATA_LABEL, DATE, HOURS, LABEL_LINE_START, NOISE, PART_NUMBER, SERIAL_NUMBER,
};
use crate::models::document::squash_ws;

/// First part number in the text, across the known label spellings.
pub fn part_number(text: &str) -> String {
    PART_NUMBER
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default()
}

/// First serial number in the text.
pub fn serial_number(text: &str) -> String {
    SERIAL_NUMBER
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default()
}

/// First labeled ATA chapter (`ATA 24` or `ATA 24.11`).
pub fn ata_label(text: &str) -> String {
    ATA_LABEL
        .captures(text)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}

/// Strip part-number, hours and date tokens out of a header so the residue
/// can serve as a description.
pub fn scrub_labels(text: &str) -> String {
    let scrubbed = PART_NUMBER.replace_all(text, "");
    let scrubbed = HOURS.replace_all(&scrubbed, "");
    let scrubbed = DATE.replace_all(&scrubbed, "");
    squash_ws(&scrubbed)
}

/// Second-chance description: the first body line that looks like prose,
/// carries no noise keywords, and does not open with an identity label.
pub fn recover_description(lines: &[String], min_len: usize) -> String {
    for line in lines {
        if NOISE.is_match(line) {
            continue;
        }
        if line.len() > min_len && !LABEL_LINE_START.is_match(line) {
            return line.clone();
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_and_serial() {
        let text = "REMOVAL P/N: 3214-77-1 S/N 0452 MOS/MSC";
        assert_eq!(part_number(text), "3214-77-1");
        assert_eq!(serial_number(text), "0452");
    }

    #[test]
    fn test_ata_label_with_suffix() {
        assert_eq!(ata_label("ATA: 24.11 GENERATOR"), "24.11");
        assert_eq!(ata_label("ATA 24"), "24");
        assert_eq!(ata_label("no chapter here"), "");
    }

    #[test]
    fn test_scrub_labels() {
        let text = "FIRE BOTTLE P/N: 123-ABC HRS: 1200,5 12-Jan-2024";
        assert_eq!(scrub_labels(text), "FIRE BOTTLE");
    }

    #[test]
    fn test_recover_description_skips_noise_and_labels() {
        let lines = vec![
            "TSN 1200 HRS".to_string(),
            "PN 555-1".to_string(),
            "short".to_string(),
            "STANDBY ATTITUDE INDICATOR".to_string(),
        ];
        assert_eq!(recover_description(&lines, 10), "STANDBY ATTITUDE INDICATOR");
        assert_eq!(recover_description(&lines[..3], 10), "");
    }
}
