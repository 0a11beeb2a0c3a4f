//! Maintenance interval extraction.

use super::patterns::{BARE_INTEGER, IDENTITY_KEYWORD, NOISE, ON_CONDITION};

/// Extract the interval for a block: the on-condition token when present,
/// otherwise the first bare integer on a line free of noise keywords and
/// identity labels.
pub fn extract_interval(lines: &[String]) -> String {
    if lines.iter().any(|line| ON_CONDITION.is_match(line)) {
        return "O/C".to_string();
    }

    for line in lines {
        if NOISE.is_match(line) || IDENTITY_KEYWORD.is_match(line) {
            continue;
        }
        if let Some(caps) = BARE_INTEGER.captures(line) {
            return caps[1].to_string();
        }
    }

    String::new()
}
