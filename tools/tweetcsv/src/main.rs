use anyhow::{Context, Result};
use clap::Parser;
use extractor::{Table, DEFAULT_ENTRY_SUFFIX};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tweetcsv",
    about = "Convert a Twitter/X data export archive into a processed CSV"
)]
struct Cli {
    /// Path to the export zip (e.g. twitter-2024-01-01.zip).
    archive: PathBuf,

    /// Where to write the processed CSV.
    #[arg(short, long, default_value = "processed_data.csv")]
    output: PathBuf,

    /// Entry suffix to locate inside the archive.
    #[arg(long, default_value = DEFAULT_ENTRY_SUFFIX)]
    entry: String,

    /// Print the first N rows before writing the CSV.
    #[arg(long)]
    preview: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    let bytes = fs::read(&cli.archive)
        .with_context(|| format!("read archive {}", cli.archive.display()))?;

    let table = extractor::process_archive(&bytes, &cli.entry)
        .with_context(|| format!("process archive {}", cli.archive.display()))?;

    if let Some(limit) = cli.preview {
        print_preview(&table, limit);
    }

    let csv_text = table.to_csv()?;
    fs::write(&cli.output, csv_text)
        .with_context(|| format!("write {}", cli.output.display()))?;

    println!(
        "Processed {} tweets into {}",
        table.rows.len(),
        cli.output.display()
    );
    Ok(())
}

/// Print the first `limit` rows as a tab-separated preview, with long cells
/// truncated so one row stays on one line.
fn print_preview(table: &Table, limit: usize) {
    const MAX_CELL: usize = 40;

    println!("{}", table.columns.join("\t"));
    for row in table.rows.iter().take(limit) {
        let cells: Vec<String> = row.iter().map(|cell| truncate_cell(cell, MAX_CELL)).collect();
        println!("{}", cells.join("\t"));
    }
    if table.rows.len() > limit {
        println!("... {} more rows", table.rows.len() - limit);
    }
}

fn truncate_cell(cell: &str, max_chars: usize) -> String {
    let flat = cell.replace(['\n', '\t'], " ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let kept: String = flat.chars().take(max_chars).collect();
    format!("{kept}…")
}
