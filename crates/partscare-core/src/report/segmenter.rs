//! Anchor-driven block segmentation.
//!
//! A two-state machine: `Scanning` (no open block) and `InBlock`. A line
//! matching the vendor's anchor pattern closes any open block and opens a
//! new one; the open block is flushed only on that transition or at end of
//! input, never mutated from outside the segmenter.

use regex::Regex;

use super::rules::patterns::HEADER_KEYWORD;
use crate::models::document::squash_ws;

/// One segmented block: the anchor key, the raw anchor line as read, the
/// header text, and the body lines in document order.
///
/// A header recovered from the lookahead window stays in the body, so the
/// raw anchor lines plus the bodies of all blocks, in order, reconstruct
/// the segmented portion of the document exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Component reference captured by the anchor pattern.
    pub anchor: String,

    /// The full anchor line.
    pub line: String,

    /// Header text: residual after the anchor, or a recovered keyword line.
    pub header: String,

    /// Lines between this anchor and the next.
    pub body: Vec<String>,
}

impl Block {
    /// Header and body joined into a single search buffer.
    pub fn buffer(&self) -> String {
        let mut parts = Vec::with_capacity(self.body.len() + 1);
        if !self.header.is_empty() {
            parts.push(self.header.clone());
        }
        parts.extend(self.body.iter().cloned());
        parts.join(" ")
    }

    /// Body lines joined, header excluded.
    pub fn body_text(&self) -> String {
        self.body.join(" ")
    }
}

enum State {
    Scanning,
    InBlock { block: Block, lookahead: usize },
}

/// The segmentation state machine for one vendor anchor grammar.
pub struct BlockSegmenter<'a> {
    anchor: &'a Regex,
    lookahead: usize,
    state: State,
}

impl<'a> BlockSegmenter<'a> {
    /// `lookahead` is the number of body lines inspected for a header
    /// keyword when the anchor line carries no residual text.
    pub fn new(anchor: &'a Regex, lookahead: usize) -> Self {
        Self {
            anchor,
            lookahead,
            state: State::Scanning,
        }
    }

    /// Feed one line. Returns the previously open block when this line is
    /// an anchor and closes it.
    pub fn feed(&mut self, line: &str) -> Option<Block> {
        if let Some(caps) = self.anchor.captures(line) {
            let matched = caps.get(0).unwrap();
            let header = squash_ws(&line[matched.end()..]);
            let lookahead = if header.is_empty() { self.lookahead } else { 0 };

            let opened = Block {
                anchor: caps[1].to_string(),
                line: line.to_string(),
                header,
                body: Vec::new(),
            };
            let closed = std::mem::replace(
                &mut self.state,
                State::InBlock { block: opened, lookahead },
            );
            return match closed {
                State::InBlock { block, .. } => Some(block),
                State::Scanning => None,
            };
        }

        if let State::InBlock { block, lookahead } = &mut self.state {
            if *lookahead > 0 {
                if block.header.is_empty() && HEADER_KEYWORD.is_match(line) {
                    block.header = line.to_string();
                    *lookahead = 0;
                } else {
                    *lookahead -= 1;
                }
            }
            block.body.push(line.to_string());
        }
        None
    }

    /// Force-close the open block at end of input.
    pub fn finish(&mut self) -> Option<Block> {
        match std::mem::replace(&mut self.state, State::Scanning) {
            State::InBlock { block, .. } => Some(block),
            State::Scanning => None,
        }
    }

    /// Segment a full line sequence in one call.
    pub fn segment(anchor: &Regex, lookahead: usize, lines: &[String]) -> Vec<Block> {
        let mut segmenter = BlockSegmenter::new(anchor, lookahead);
        let mut blocks: Vec<Block> = lines
            .iter()
            .filter_map(|line| segmenter.feed(line))
            .collect();
        blocks.extend(segmenter.finish());
        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::rules::patterns::{GENERIC_ANCHOR, JETWORKS_ANCHOR};

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_blocks_cover_input() {
        let input = lines(&[
            "723511 FIRE BOTTLE",
            "P/N: 123-ABC",
            "HRS: 1200,5",
            "245130 BATTERY",
            "S/N 0452",
        ]);
        let blocks = BlockSegmenter::segment(&GENERIC_ANCHOR, 0, &input);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].anchor, "723511");
        assert_eq!(blocks[0].header, "FIRE BOTTLE");
        assert_eq!(blocks[1].anchor, "245130");

        let mut reconstructed = Vec::new();
        for block in &blocks {
            reconstructed.push(block.line.clone());
            reconstructed.extend(block.body.iter().cloned());
        }
        assert_eq!(reconstructed, input);
    }

    #[test]
    fn test_header_recovered_from_lookahead() {
        let input = lines(&[
            "21-31-05-900-001-01",
            "REMOVAL OF CABIN PRESSURE CONTROLLER",
            "P/N: 2588-05-1",
        ]);
        let blocks = BlockSegmenter::segment(&JETWORKS_ANCHOR, 3, &input);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].header, "REMOVAL OF CABIN PRESSURE CONTROLLER");
        // The recovered line stays in the body so coverage holds.
        assert_eq!(blocks[0].body.len(), 2);
    }

    #[test]
    fn test_lookahead_window_expires() {
        let input = lines(&[
            "21-31-05-900-001-01",
            "MANUFACTURER HONEYWELL",
            "UNIT 2",
            "TSN 4410",
            "REMOVAL OF CONTROLLER",
        ]);
        let blocks = BlockSegmenter::segment(&JETWORKS_ANCHOR, 3, &input);

        assert_eq!(blocks[0].header, "");
        assert_eq!(blocks[0].body.len(), 4);
    }

    #[test]
    fn test_lines_before_first_anchor_are_ignored() {
        let input = lines(&["PAGE 1 OF 12", "723511 FIRE BOTTLE", "HRS 10"]);
        let blocks = BlockSegmenter::segment(&GENERIC_ANCHOR, 0, &input);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body, vec!["HRS 10"]);
    }

    #[test]
    fn test_anchor_order_is_document_order() {
        let input = lines(&["300001 A", "100001 B", "200001 C"]);
        let blocks = BlockSegmenter::segment(&GENERIC_ANCHOR, 0, &input);
        let anchors: Vec<&str> = blocks.iter().map(|b| b.anchor.as_str()).collect();

        assert_eq!(anchors, vec!["300001", "100001", "200001"]);
    }
}
