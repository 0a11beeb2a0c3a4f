//! Batch processing command for status-report directories.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};

use partscare_core::{
    BatchOrchestrator, BatchReport, DocumentSource, Record, RecordSink, SinkError,
    StatusReportParser,
};

use super::load_config;
use super::process::{records_to_csv, records_to_json, records_to_text, OutputFormat};
use crate::ingest::FileSource;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input directory with status-report documents
    input_dir: PathBuf,

    /// Output directory for per-file record exports
    output_dir: PathBuf,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,
}

/// Per-file sink writing one export next to the batch summary.
struct FileSink {
    output_dir: PathBuf,
    format: OutputFormat,
}

impl RecordSink for FileSink {
    fn export(&mut self, stem: &str, records: &[Record]) -> Result<(), SinkError> {
        let (content, extension) = match self.format {
            OutputFormat::Json => (
                records_to_json(records).map_err(|e| SinkError::Write(e.to_string()))?,
                "json",
            ),
            OutputFormat::Csv => (
                records_to_csv(records).map_err(|e| SinkError::Write(e.to_string()))?,
                "csv",
            ),
            OutputFormat::Text => (records_to_text(records), "txt"),
        };

        let path = self.output_dir.join(format!("{stem}.{extension}"));
        fs::write(&path, content)?;
        Ok(())
    }
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;
    let source = FileSource::new(&config.batch.extensions);

    // Pre-count eligible files so the progress bar has a length; the
    // orchestrator re-lists authoritatively.
    let pattern = format!("{}/*", args.input_dir.display());
    let total = glob(&pattern)?
        .filter_map(|entry| entry.ok())
        .filter(|path| source.eligible(path))
        .count() as u64;

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let orchestrator = BatchOrchestrator::new(StatusReportParser::with_config(config));
    let mut sink = FileSink {
        output_dir: args.output_dir.clone(),
        format: args.format,
    };

    let report = orchestrator.run(
        &args.input_dir,
        &args.output_dir,
        &source,
        &mut sink,
        &mut |msg| {
            if msg.starts_with('[') {
                pb.inc(1);
            }
            pb.println(msg);
        },
    )?;

    pb.finish_with_message("Complete");

    if args.summary {
        let summary_path = args.output_dir.join("summary.csv");
        write_summary(&summary_path, &report)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed: Vec<_> = report.files.iter().filter(|f| f.error.is_some()).collect();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        report.stats.processed,
        start.elapsed()
    );
    println!(
        "   {} exported, {} failed",
        style(report.stats.exported).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for outcome in &failed {
            println!(
                "  - {}: {}",
                outcome.file,
                outcome.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn write_summary(path: &Path, report: &BatchReport) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["filename", "vendor", "records", "status", "error"])?;

    for outcome in &report.files {
        let records = outcome.records.to_string();
        let status = if outcome.error.is_some() {
            "error"
        } else if outcome.records > 0 {
            "exported"
        } else {
            "empty"
        };

        wtr.write_record([
            outcome.file.as_str(),
            outcome.vendor.map(|v| v.tag()).unwrap_or(""),
            records.as_str(),
            status,
            outcome.error.as_deref().unwrap_or(""),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
