//! Status-report parsing pipeline: classify, segment, extract, normalize.

use tracing::{debug, info};

use super::normalizer::normalize;
use super::segmenter::BlockSegmenter;
use crate::models::config::PartscareConfig;
use crate::models::document::Document;
use crate::models::record::Record;
use crate::vendor::{classify, grammar_for, Vendor};

/// Parser for status-report documents supplied as page-ordered text.
pub struct StatusReportParser {
    config: PartscareConfig,
}

impl StatusReportParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self {
            config: PartscareConfig::default(),
        }
    }

    /// Create a parser with explicit configuration.
    pub fn with_config(config: PartscareConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PartscareConfig {
        &self.config
    }

    /// Classify a document from its leading pages.
    pub fn classify(&self, pages: &[String]) -> Vendor {
        let window = pages
            .iter()
            .take(self.config.classify.pages.max(1))
            .cloned()
            .collect::<Vec<_>>()
            .join("\n");
        classify(&window)
    }

    /// Classify and parse a document into canonical records.
    pub fn parse(&self, name: &str, pages: &[String]) -> Vec<Record> {
        let vendor = self.classify(pages);
        self.parse_as(name, pages, vendor)
    }

    /// Parse a document under a forced vendor tag.
    pub fn parse_as(&self, name: &str, pages: &[String], vendor: Vendor) -> Vec<Record> {
        let doc = Document::new(name, vendor, pages);

        let Some(grammar) = grammar_for(vendor) else {
            debug!("{}: no grammar for {}, emitting no records", doc.name, vendor);
            return Vec::new();
        };

        let ctx = grammar.context(&doc, &self.config);
        let blocks = BlockSegmenter::segment(
            grammar.anchor(),
            grammar.lookahead(&self.config),
            &doc.lines,
        );
        let total = blocks.len();

        let records: Vec<Record> = blocks
            .iter()
            .filter_map(|block| grammar.extract(block, &ctx, &self.config))
            .map(|partial| normalize(partial, vendor, &doc.name))
            .collect();

        info!(
            "{}: {} of {} blocks kept as {} records",
            doc.name,
            records.len(),
            total,
            vendor
        );
        records
    }
}

impl Default for StatusReportParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pages(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_generic_block_yields_one_record() {
        let input = pages(&["723511\nP/N: 123-ABC\nHRS: 1200,5\n12-Jan-2024"]);
        let parser = StatusReportParser::new();
        let records = parser.parse("report.txt", &input);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pn, "123-ABC");
        assert_eq!(records[0].tsn, "1200.5");
        assert_eq!(records[0].next_due, "12-Jan-2024");
        assert_eq!(records[0].source, "UNKNOWN");
        assert_eq!(records[0].file, "report.txt");
    }

    #[test]
    fn test_identity_without_usage_is_dropped() {
        let input = pages(&["723511\nP/N: 123-ABC\nINSPECT BEFORE FLIGHT"]);
        let parser = StatusReportParser::new();

        assert!(parser.parse("report.txt", &input).is_empty());
    }

    #[test]
    fn test_jetworks_document_end_to_end() {
        let input = pages(&[
            "JetWorks Aviation Component Status",
            "21-31-05-900-001-01 REMOVAL OF CABIN PRESSURE CONTROLLER\n\
             P/N: 2588-05-1 S/N 0452\n\
             15-Mar-2023\n\
             HRS: 4410,5\n\
             24-10-00-900-014-02\n\
             REPLACEMENT OF STARTER GENERATOR\n\
             PN 7034-1\n\
             AFL: 1,450",
        ]);
        let parser = StatusReportParser::new();
        let records = parser.parse("status.pdf", &input);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].source, "JetWorks");
        assert_eq!(records[0].ata, "21");
        assert_eq!(records[0].desc, "REMOVAL OF CABIN PRESSURE CONTROLLER");
        assert_eq!(records[1].desc, "REPLACEMENT OF STARTER GENERATOR");
        assert_eq!(records[1].tsn, "");
    }

    #[test]
    fn test_vendor_without_rules_yields_no_records() {
        let input = pages(&["Gulfstream G550 Status Summary", "723511\nHRS: 10"]);
        let parser = StatusReportParser::new();

        assert!(parser.parse("g550.pdf", &input).is_empty());
    }

    #[test]
    fn test_vendor_override_skips_classification() {
        let input = pages(&["723511\nP/N: 123-ABC\nHRS: 10"]);
        let parser = StatusReportParser::new();
        let records = parser.parse_as("r.txt", &input, Vendor::Unknown);

        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_repeated_parse_is_identical() {
        let input = pages(&["723511\nP/N: 123-ABC\nHRS: 1200,5"]);
        let parser = StatusReportParser::new();

        assert_eq!(parser.parse("r.txt", &input), parser.parse("r.txt", &input));
    }
}
