//! Common regex patterns for status-report extraction.

use lazy_static::lazy_static;
use regex::Regex;

/// Calendar date body: day, English month token, 2-4 digit year, with
/// `-`, `/`, `.` or space separators.
const DATE_BODY: &str =
    r"\d{1,2}[-/\. ]?(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[A-Za-z]*[-/\. ]?\d{2,4}";

lazy_static! {
    // Anchor patterns (one per grammar)
    pub static ref GENERIC_ANCHOR: Regex = Regex::new(
        r"^\s*(\d{5,6})\b"
    ).unwrap();

    pub static ref JETWORKS_ANCHOR: Regex = Regex::new(
        r"\b(\d{2}-\d{2}-\d{2}-900-\d{3}-\d{2})\b"
    ).unwrap();

    pub static ref DASSAULT_ANCHOR: Regex = Regex::new(
        r"^\s*(\d{5,})\b"
    ).unwrap();

    // Identity labels
    pub static ref PART_NUMBER: Regex = Regex::new(
        r"(?i)\b(?:P/N|PN|PART\s*NO\.?|PART\s*NUMBER)[:=\s\-]*([A-Z0-9][A-Z0-9\-/\.]+)"
    ).unwrap();

    pub static ref SERIAL_NUMBER: Regex = Regex::new(
        r"(?i)\b(?:S/N|SN)[:=\s\-]*([A-Z0-9][A-Z0-9\-/\.]+)"
    ).unwrap();

    // Dassault layouts allow spaces inside the value
    pub static ref DASSAULT_PART: Regex = Regex::new(
        r"(?i)\bPN[:\s]\s*([A-Z0-9][A-Z0-9\-/ ]*)"
    ).unwrap();

    pub static ref DASSAULT_SERIAL: Regex = Regex::new(
        r"(?i)\bSN[:\s]\s*([A-Z0-9][A-Z0-9\-/ ]*)"
    ).unwrap();

    pub static ref ATA_LABEL: Regex = Regex::new(
        r"(?i)\bATA[:\s]?\s*(\d{2}(?:\.\d{2})?)"
    ).unwrap();

    // Dates
    pub static ref DATE: Regex = Regex::new(
        &format!(r"(?i)\b{DATE_BODY}\b")
    ).unwrap();

    pub static ref CERT_DATE: Regex = Regex::new(
        &format!(r"(?i)CERTIFICATION\s*DATE[:\s\-]*{DATE_BODY}")
    ).unwrap();

    pub static ref AIRCRAFT_CERT_DATE: Regex = Regex::new(
        &format!(r"(?is)AIRCRAFT.*?CERTIFICATION\s*DATE[:\s\-]*{DATE_BODY}")
    ).unwrap();

    // Usage counters
    pub static ref HOURS: Regex = Regex::new(
        r"(?i)\b(?:ENG\.\s*)?HRS\b[:=\s\-]*([0-9][0-9.,:]*)\b"
    ).unwrap();

    pub static ref TOTAL_HOURS: Regex = Regex::new(
        r"(?i)\bTTSN\b[:=\s\-]*([0-9][0-9.,:]*)\b"
    ).unwrap();

    pub static ref LANDINGS: Regex = Regex::new(
        r"(?i)\bAFL\b[:=\s\-]*([0-9][0-9,]*)\b"
    ).unwrap();

    pub static ref CLOCK_HOURS: Regex = Regex::new(
        r"^(\d+):(\d{2})$"
    ).unwrap();

    // Due status
    pub static ref NEXT_DUE_LABEL: Regex = Regex::new(
        r"(?i)\bNEXT\s*DUE\b[.:\s]*([0-9A-Z/:\-\. ]+)"
    ).unwrap();

    // Intervals
    pub static ref ON_CONDITION: Regex = Regex::new(
        r"(?i)\bO/C\b"
    ).unwrap();

    pub static ref BARE_INTEGER: Regex = Regex::new(
        r"\b(\d{1,6})\b"
    ).unwrap();

    // Line classification
    pub static ref NOISE: Regex = Regex::new(
        r"(?i)\b(?:MOS/MSC|HRS|AFL|TSN|TSR|TSX|PROC\.?\s*REF|MANUFACTURER|MODEL|UNIT|C/W)\b"
    ).unwrap();

    pub static ref IDENTITY_KEYWORD: Regex = Regex::new(
        r"(?i)\b(?:P/N|PN|PART\s*NO\.?|PART\s*NUMBER|S/N|SN|PROC\.?\s*REF)\b"
    ).unwrap();

    pub static ref LABEL_LINE_START: Regex = Regex::new(
        r"(?i)^(?:P/N|PN|PART\s*NO\.?|PART\s*NUMBER|S/N|SN)\b"
    ).unwrap();

    pub static ref HEADER_KEYWORD: Regex = Regex::new(
        r"(?i)^(?:REMOVAL|INSTALLATION|REPLACEMENT|INSPECTION|OVERHAUL)\b"
    ).unwrap();
}
