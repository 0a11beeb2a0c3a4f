//! Per-vendor block grammars.
//!
//! A grammar binds an anchor pattern to a field-rule set and an acceptance
//! policy. Within a block, the first successful match for a field wins and
//! is never overwritten by a later one; restated values further down a
//! block are noise.

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use tracing::debug;

use super::rules::dates::{format_date, normalize_date_or_raw, parse_date, DateExtractor};
use super::rules::hours::{parse_hours, render_hours, HoursExtractor};
use super::rules::idents::{ata_label, part_number, recover_description, scrub_labels, serial_number};
use super::rules::intervals::extract_interval;
use super::rules::patterns::{
    AIRCRAFT_CERT_DATE, CERT_DATE, DASSAULT_ANCHOR, DASSAULT_PART, DASSAULT_SERIAL, DATE,
    GENERIC_ANCHOR, JETWORKS_ANCHOR, LANDINGS, NEXT_DUE_LABEL, TOTAL_HOURS,
};
use super::rules::FieldExtractor;
use super::segmenter::Block;
use crate::models::config::PartscareConfig;
use crate::models::document::Document;
use crate::models::record::PartialRecord;

/// Document-level context computed once per parse call.
#[derive(Debug, Clone, Default)]
pub struct GrammarContext {
    /// Aircraft certification date; component dates equal to it are
    /// factory-fit noise.
    pub certification_date: Option<NaiveDate>,
}

/// One vendor's segmentation and extraction rules.
pub trait BlockGrammar: Sync {
    /// Anchor pattern opening a new block; capture group 1 is the key.
    fn anchor(&self) -> &Regex;

    /// Body lines inspected for a header keyword after a bare anchor line.
    fn lookahead(&self, _config: &PartscareConfig) -> usize {
        0
    }

    /// Document-level context for this grammar.
    fn context(&self, _doc: &Document, _config: &PartscareConfig) -> GrammarContext {
        GrammarContext::default()
    }

    /// Derive a partial record from a block, or drop it.
    fn extract(
        &self,
        block: &Block,
        ctx: &GrammarContext,
        config: &PartscareConfig,
    ) -> Option<PartialRecord>;
}

/// Grammar for unclassified layouts: bare 5-6 digit ATA reference anchors.
pub struct GenericGrammar;

impl BlockGrammar for GenericGrammar {
    fn anchor(&self) -> &Regex {
        &GENERIC_ANCHOR
    }

    fn context(&self, doc: &Document, config: &PartscareConfig) -> GrammarContext {
        let head = doc.head(config.classify.certification_pages);
        GrammarContext {
            certification_date: detect_certification_date(&head),
        }
    }

    fn extract(
        &self,
        block: &Block,
        ctx: &GrammarContext,
        config: &PartscareConfig,
    ) -> Option<PartialRecord> {
        let chapter: u32 = block.anchor.get(..2)?.parse().ok()?;
        if !(config.extraction.ata_min..=config.extraction.ata_max).contains(&chapter) {
            debug!("dropping block {}: chapter {} out of window", block.anchor, chapter);
            return None;
        }

        let buffer = block.buffer();
        let mut partial = PartialRecord {
            ata: block.anchor[..2].to_string(),
            ata_ref: block.anchor.clone(),
            ..PartialRecord::default()
        };

        partial.pn = part_number(&buffer);
        partial.sn = serial_number(&buffer);
        partial.desc = scrub_labels(&block.header);

        if let Some(hours) = HoursExtractor::new().extract(&buffer) {
            if hours > Decimal::ZERO {
                partial.tsn = render_hours(hours);
            }
        }
        if let Some(caps) = TOTAL_HOURS.captures(&buffer) {
            if let Some(total) = parse_hours(&caps[1]) {
                partial.ttsn = render_hours(total);
            }
        }
        if let Some(caps) = LANDINGS.captures(&buffer) {
            partial.afl = caps[1].replace(',', "");
        }
        partial.interval = extract_interval(&block.body);

        if let Some(date) = DateExtractor::new().extract(&buffer) {
            if ctx.certification_date == Some(date) {
                debug!("dropping block {}: certification-date fit", block.anchor);
                return None;
            }
            partial.next_due = format_date(date);
        }

        accept(partial, config)
    }
}

/// Grammar for JetWorks task references (`xx-xx-xx-900-xxx-xx`).
pub struct JetWorksGrammar;

impl BlockGrammar for JetWorksGrammar {
    fn anchor(&self) -> &Regex {
        &JETWORKS_ANCHOR
    }

    fn lookahead(&self, config: &PartscareConfig) -> usize {
        config.extraction.header_lookahead
    }

    fn extract(
        &self,
        block: &Block,
        _ctx: &GrammarContext,
        config: &PartscareConfig,
    ) -> Option<PartialRecord> {
        let body = block.body_text();
        let mut partial = PartialRecord {
            ata: block.anchor.split('-').next().unwrap_or("").to_string(),
            ata_ref: block.anchor.clone(),
            ..PartialRecord::default()
        };

        partial.pn = part_number(&body);
        partial.sn = serial_number(&body);

        partial.desc = if block.header.is_empty() {
            recover_description(&block.body, config.extraction.min_header_len)
        } else {
            block.header.clone()
        };

        // The component date tends to sit near the top of the block; only
        // fall back to the full body when the window has none.
        let window = block
            .body
            .iter()
            .take(config.extraction.date_window)
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");
        let raw_date = DATE
            .find(&window)
            .or_else(|| DATE.find(&body))
            .map(|m| m.as_str().to_string());
        if let Some(raw) = raw_date {
            partial.next_due = normalize_date_or_raw(&raw);
        }

        if let Some(hours) = HoursExtractor::new().extract(&body) {
            partial.tsn = render_hours(hours);
        }
        if let Some(caps) = TOTAL_HOURS.captures(&body) {
            if let Some(total) = parse_hours(&caps[1]) {
                partial.ttsn = render_hours(total);
            }
        }
        if let Some(caps) = LANDINGS.captures(&body) {
            partial.afl = caps[1].replace(',', "");
        }
        partial.interval = extract_interval(&block.body);

        accept(partial, config)
    }
}

/// Grammar for Dassault status reports: item-number anchors with the
/// description on the anchor line. Field coverage is partial; identity-only
/// records with blank data fields are expected output.
pub struct DassaultGrammar;

impl BlockGrammar for DassaultGrammar {
    fn anchor(&self) -> &Regex {
        &DASSAULT_ANCHOR
    }

    fn extract(
        &self,
        block: &Block,
        _ctx: &GrammarContext,
        _config: &PartscareConfig,
    ) -> Option<PartialRecord> {
        let buffer = block.buffer();
        let mut partial = PartialRecord {
            desc: block.header.clone(),
            ..PartialRecord::default()
        };

        if let Some(caps) = DASSAULT_PART.captures(&buffer) {
            partial.pn = caps[1].trim().to_string();
        }
        if let Some(caps) = DASSAULT_SERIAL.captures(&buffer) {
            partial.sn = caps[1].trim().to_string();
        }
        partial.ata = ata_label(&buffer);
        if let Some(hours) = HoursExtractor::new().extract(&buffer) {
            partial.tsn = render_hours(hours);
        }
        if let Some(caps) = NEXT_DUE_LABEL.captures(&buffer) {
            partial.next_due = caps[1].trim().to_string();
        }

        if partial.has_identity() { Some(partial) } else { None }
    }
}

/// Generic acceptance policy: at least one identity field, and at least one
/// usage counter unless the policy knob relaxes it.
fn accept(partial: PartialRecord, config: &PartscareConfig) -> Option<PartialRecord> {
    if !partial.has_identity() {
        return None;
    }
    if config.extraction.require_usage && !partial.has_usage() {
        return None;
    }
    Some(partial)
}

/// Locate the aircraft certification date in the leading pages: prefer a
/// labeled date inside the AIRCRAFT section, then any labeled date, then
/// the oldest date in the window.
pub fn detect_certification_date(text: &str) -> Option<NaiveDate> {
    for labeled in [&*AIRCRAFT_CERT_DATE, &*CERT_DATE] {
        if let Some(section) = labeled.find(text) {
            let parsed = DATE
                .find(section.as_str())
                .and_then(|m| parse_date(m.as_str()));
            if parsed.is_some() {
                return parsed;
            }
        }
    }
    DateExtractor::new().extract_all(text).into_iter().min()
}
