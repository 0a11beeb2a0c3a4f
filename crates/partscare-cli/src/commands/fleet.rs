//! Fleet command - rebuild a fleet table from a roster grid dump.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;

use partscare_core::{FleetError, FleetRecord, FleetTableBuilder};

/// Arguments for the fleet command.
#[derive(Args)]
pub struct FleetArgs {
    /// Roster grid as headerless CSV
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: FleetFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum FleetFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

pub async fn run(args: FleetArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("input file not found: {}", args.input.display());
    }

    let grid = read_grid(&args.input)?;
    let records = FleetTableBuilder::new().build(&grid);

    let output = match args.format {
        FleetFormat::Json => serde_json::to_string_pretty(&records)?,
        FleetFormat::Csv => fleet_to_csv(&records)?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, output)?;
            println!(
                "{} {} aircraft written to {}",
                style("✓").green(),
                records.len(),
                path.display()
            );
        }
        None => println!("{output}"),
    }

    Ok(())
}

/// Read a headerless, possibly ragged CSV dump into a cell grid.
fn read_grid(path: &Path) -> anyhow::Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| FleetError::Grid(e.to_string()))?;

    let mut grid = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| FleetError::Grid(e.to_string()))?;
        grid.push(row.iter().map(|cell| cell.to_string()).collect());
    }
    Ok(grid)
}

fn fleet_to_csv(records: &[FleetRecord]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for record in records {
        wtr.serialize(record)?;
    }
    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}
