//! Batch orchestration over a document directory.
//!
//! Directory-level preconditions fail the whole batch before any file is
//! touched. Per-file failures are contained: logged with the file name,
//! counted as processed-but-not-exported, and the batch moves on.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{BatchError, SinkError, SourceError};
use crate::models::record::Record;
use crate::report::parser::StatusReportParser;
use crate::vendor::Vendor;

/// Collaborator supplying page-ordered text per document.
pub trait DocumentSource {
    /// Whether a directory entry is eligible for this source.
    fn eligible(&self, path: &Path) -> bool;

    /// Page-ordered UTF-8 text for the document.
    fn pages(&self, path: &Path) -> Result<Vec<String>, SourceError>;
}

/// External sink receiving one document's records at a time.
pub trait RecordSink {
    fn export(&mut self, stem: &str, records: &[Record]) -> Result<(), SinkError>;
}

/// Aggregate batch counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    /// Files visited, including failed ones.
    pub processed: usize,

    /// Files whose records reached the sink.
    pub exported: usize,
}

/// Outcome for a single file.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub file: String,
    pub vendor: Option<Vendor>,
    pub records: usize,
    pub error: Option<String>,
}

/// Counters plus per-file outcomes.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub stats: BatchStats,
    pub files: Vec<FileOutcome>,
}

/// Drives classify → segment → extract → normalize over a file set.
pub struct BatchOrchestrator {
    parser: StatusReportParser,
}

impl BatchOrchestrator {
    pub fn new(parser: StatusReportParser) -> Self {
        Self { parser }
    }

    /// Run the batch. Files are visited in sorted name order, so repeated
    /// runs over an unchanged input set produce identical output.
    pub fn run(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        source: &dyn DocumentSource,
        sink: &mut dyn RecordSink,
        log: &mut dyn FnMut(&str),
    ) -> Result<BatchReport, BatchError> {
        if !input_dir.is_dir() {
            return Err(BatchError::MissingInputDir(input_dir.to_path_buf()));
        }
        if !output_dir.is_dir() {
            return Err(BatchError::MissingOutputDir(output_dir.to_path_buf()));
        }

        let mut files: Vec<PathBuf> = fs::read_dir(input_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && source.eligible(path))
            .collect();
        files.sort();

        if files.is_empty() {
            return Err(BatchError::NoEligibleFiles(input_dir.to_path_buf()));
        }

        let total = files.len();
        let mut stats = BatchStats::default();
        let mut outcomes = Vec::with_capacity(total);

        for (index, path) in files.iter().enumerate() {
            let name = path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("document")
                .to_string();
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("document")
                .replace(' ', "_");

            log(&format!("[{}/{}] {}", index + 1, total, name));
            stats.processed += 1;

            let pages = match source.pages(path) {
                Ok(pages) => pages,
                Err(e) => {
                    warn!("{}: {}", name, e);
                    log(&format!("  error: {name}: {e}"));
                    outcomes.push(FileOutcome {
                        file: name,
                        vendor: None,
                        records: 0,
                        error: Some(e.to_string()),
                    });
                    continue;
                }
            };

            let vendor = self.parser.classify(&pages);
            let records = self.parser.parse_as(&name, &pages, vendor);

            if records.is_empty() {
                log(&format!("  no components found in {name}"));
                outcomes.push(FileOutcome {
                    file: name,
                    vendor: Some(vendor),
                    records: 0,
                    error: None,
                });
                continue;
            }

            match sink.export(&stem, &records) {
                Ok(()) => {
                    stats.exported += 1;
                    log(&format!("  exported {} records ({})", records.len(), vendor));
                    outcomes.push(FileOutcome {
                        file: name,
                        vendor: Some(vendor),
                        records: records.len(),
                        error: None,
                    });
                }
                Err(e) => {
                    warn!("{}: {}", name, e);
                    log(&format!("  error: {name}: {e}"));
                    outcomes.push(FileOutcome {
                        file: name,
                        vendor: Some(vendor),
                        records: records.len(),
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        info!(
            "batch done: {} processed, {} exported",
            stats.processed, stats.exported
        );
        Ok(BatchReport {
            stats,
            files: outcomes,
        })
    }
}
