//! In-memory document representation.
//!
//! A document is ephemeral: it is built from collaborator-supplied page text
//! at the start of a parse call and discarded when the records are out.

use crate::vendor::Vendor;

/// Collapse runs of whitespace to single spaces and trim.
pub fn squash_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A status-report document: identity, vendor tag, and the ordered line
/// sequence the segmenter consumes.
#[derive(Debug, Clone)]
pub struct Document {
    /// File name used for the FILE stamp and diagnostics.
    pub name: String,

    /// Vendor tag assigned by the classifier (or forced by the caller).
    pub vendor: Vendor,

    /// Raw page text in reading order, as supplied by the collaborator.
    pub pages: Vec<String>,

    /// Whitespace-normalized, non-empty lines across all pages, in order.
    pub lines: Vec<String>,
}

impl Document {
    pub fn new(name: &str, vendor: Vendor, pages: &[String]) -> Self {
        let lines = pages
            .iter()
            .flat_map(|page| page.lines())
            .map(squash_ws)
            .filter(|line| !line.is_empty())
            .collect();

        Self {
            name: name.to_string(),
            vendor,
            pages: pages.to_vec(),
            lines,
        }
    }

    /// Raw text of the first `n` pages, used for classification and for
    /// document-level context such as the certification date.
    pub fn head(&self, n: usize) -> String {
        self.pages
            .iter()
            .take(n.max(1))
            .cloned()
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_normalized_and_ordered() {
        let pages = vec![
            "  FIRST   LINE \n\n second line ".to_string(),
            "third\tline".to_string(),
        ];
        let doc = Document::new("report.txt", Vendor::Unknown, &pages);

        assert_eq!(doc.lines, vec!["FIRST LINE", "second line", "third line"]);
    }

    #[test]
    fn test_head_window() {
        let pages = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        let doc = Document::new("r", Vendor::Unknown, &pages);

        assert_eq!(doc.head(2), "one\ntwo");
        assert_eq!(doc.head(0), "one");
    }
}
