//! Core library for aircraft maintenance status-report extraction.
//!
//! This crate provides:
//! - Vendor classification from keyword evidence
//! - Anchor-driven block segmentation per vendor grammar
//! - Rule-based field extraction into canonical component records
//! - Fleet-roster reconstruction from tabular dumps
//! - Batch orchestration with per-file failure isolation

pub mod batch;
pub mod error;
pub mod fleet;
pub mod models;
pub mod report;
pub mod vendor;

pub use batch::{
    BatchOrchestrator, BatchReport, BatchStats, DocumentSource, FileOutcome, RecordSink,
};
pub use error::{BatchError, FleetError, PartscareError, Result, SinkError, SourceError};
pub use fleet::FleetTableBuilder;
pub use models::{Document, FleetRecord, PartialRecord, PartscareConfig, Record, YearCell};
pub use report::{Block, BlockSegmenter, StatusReportParser};
pub use vendor::{classify, Vendor};
