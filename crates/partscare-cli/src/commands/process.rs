//! Process command - extract records from a single status report.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;

use partscare_core::{DocumentSource, Record, StatusReportParser, Vendor};

use super::load_config;
use crate::ingest::FileSource;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Force a vendor tag instead of classifying
    #[arg(long)]
    vendor: Option<String>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("input file not found: {}", args.input.display());
    }

    let source = FileSource::new(&config.batch.extensions);
    let pages = source.pages(&args.input)?;
    let name = args
        .input
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("document")
        .to_string();

    let parser = StatusReportParser::with_config(config);
    let records = match &args.vendor {
        Some(tag) => {
            let vendor: Vendor = tag.parse().map_err(anyhow::Error::msg)?;
            parser.parse_as(&name, &pages, vendor)
        }
        None => parser.parse(&name, &pages),
    };

    let output = match args.format {
        OutputFormat::Json => records_to_json(&records)?,
        OutputFormat::Csv => records_to_csv(&records)?,
        OutputFormat::Text => records_to_text(&records),
    };

    match &args.output {
        Some(path) => {
            fs::write(path, output)?;
            println!(
                "{} {} records written to {}",
                style("✓").green(),
                records.len(),
                path.display()
            );
        }
        None => println!("{output}"),
    }

    Ok(())
}

pub(crate) fn records_to_json(records: &[Record]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

pub(crate) fn records_to_csv(records: &[Record]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for record in records {
        wtr.serialize(record)?;
    }
    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

pub(crate) fn records_to_text(records: &[Record]) -> String {
    let mut output = String::new();

    for record in records {
        output.push_str(&format!("[{}] {}\n", record.ata, record.desc));
        if !record.pn.is_empty() {
            output.push_str(&format!("  P/N:      {}\n", record.pn));
        }
        if !record.sn.is_empty() {
            output.push_str(&format!("  S/N:      {}\n", record.sn));
        }
        if !record.tsn.is_empty() {
            output.push_str(&format!("  TSN:      {} hrs\n", record.tsn));
        }
        if !record.next_due.is_empty() {
            output.push_str(&format!("  Next due: {}\n", record.next_due));
        }
        if !record.interval.is_empty() {
            output.push_str(&format!("  Interval: {}\n", record.interval));
        }
        output.push('\n');
    }

    output.push_str(&format!("{} records ({})\n", records.len(),
        records.first().map(|r| r.source.as_str()).unwrap_or("no source")));
    output
}
