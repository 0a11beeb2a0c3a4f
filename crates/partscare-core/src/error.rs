//! Error types for the partscare-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the partscare library.
#[derive(Error, Debug)]
pub enum PartscareError {
    /// Batch precondition failure.
    #[error("batch error: {0}")]
    Batch(#[from] BatchError),

    /// Document ingestion error.
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// Record export error.
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),

    /// Fleet grid error.
    #[error("fleet error: {0}")]
    Fleet(#[from] FleetError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Batch preconditions. Any of these fails the whole batch before the
/// first file is touched.
#[derive(Error, Debug)]
pub enum BatchError {
    /// The input directory does not exist.
    #[error("input directory does not exist: {0}")]
    MissingInputDir(PathBuf),

    /// The output directory does not exist.
    #[error("output directory does not exist: {0}")]
    MissingOutputDir(PathBuf),

    /// The input directory holds no eligible files.
    #[error("no eligible input files in {0}")]
    NoEligibleFiles(PathBuf),

    /// Failed to enumerate the input directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by a document source. Inside a running batch these are
/// contained per file; the batch continues.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The collaborator could not produce text for the document.
    #[error("failed to read document: {0}")]
    Read(String),

    /// The document format is not supported by this source.
    #[error("unsupported document format: {0}")]
    Unsupported(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by a record sink. Contained per file, like source errors.
#[derive(Error, Debug)]
pub enum SinkError {
    /// The sink rejected the record batch.
    #[error("failed to write records: {0}")]
    Write(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to fleet-grid ingestion. An empty grid is not an error.
#[derive(Error, Debug)]
pub enum FleetError {
    /// The grid could not be read or decoded.
    #[error("failed to read grid: {0}")]
    Grid(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the partscare library.
pub type Result<T> = std::result::Result<T, PartscareError>;
