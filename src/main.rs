//! ACH Codec CLI
//!
//! Command-line interface for encoding, decoding and validating fixed-width
//! ACH batch-payment files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- encode request.json -o payroll.ach
//! cargo run -- decode payroll.ach
//! cargo run -- decode payroll.ach --export-entries entries.csv
//! cargo run -- validate payroll.ach
//! ```
//!
//! `encode` reads a JSON file request and emits the 94-character flat file;
//! `decode` parses and validates an ACH file and prints its control totals;
//! `validate` reports the first structural or domain violation.
//!
//! Diagnostics go to stderr via `tracing` (set `RUST_LOG` to raise or lower
//! the level); file output goes to the requested path or stdout.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (bad request, unreadable file, validation failure, etc.)

use ach_codec::cli::{self, Command};
use ach_codec::types::{AchError, AchFile, AchFileRequest};
use ach_codec::{decode, encode, read_ach_lines, validate, write_entries_csv};
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics on stderr so encoded output can go to stdout untouched
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();
    if let Err(e) = run(args.command) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(command: Command) -> Result<(), AchError> {
    match command {
        Command::Encode { request, output } => run_encode(&request, output.as_deref()),
        Command::Decode {
            input,
            export_entries,
        } => run_decode(&input, export_entries.as_deref()),
        Command::Validate { input } => run_validate(&input),
    }
}

fn run_encode(request_path: &Path, output: Option<&Path>) -> Result<(), AchError> {
    let json = fs::read_to_string(request_path).map_err(|e| AchError::Io {
        message: format!("Failed to read request '{}': {}", request_path.display(), e),
    })?;
    let request: AchFileRequest = serde_json::from_str(&json)?;
    let text = encode(&request)?;

    match output {
        Some(path) => fs::write(path, &text)?,
        None => print!("{}", text),
    }
    Ok(())
}

fn run_decode(input: &Path, export_entries: Option<&Path>) -> Result<(), AchError> {
    let lines = read_ach_lines(input)?;
    let file = decode(&lines);
    validate(&file)?;
    print_summary(&file);

    if let Some(path) = export_entries {
        let mut output = fs::File::create(path)?;
        write_entries_csv(&file, &mut output)?;
        println!("Exported {} entries to {}", file.entry_count(), path.display());
    }
    Ok(())
}

fn run_validate(input: &Path) -> Result<(), AchError> {
    let lines = read_ach_lines(input)?;
    let file = decode(&lines);
    validate(&file)?;
    println!("{}: valid ({} batches, {} entries)", input.display(), file.batches.len(), file.entry_count());
    Ok(())
}

/// Print decoded control totals, amounts rendered in dollars
fn print_summary(file: &AchFile) {
    if let Some(header) = &file.header {
        println!(
            "File {} -> {} created {} {}",
            header.immediate_origin.trim(),
            header.immediate_destination.trim(),
            header.file_creation_date,
            header.file_creation_time
        );
    }
    for batch in &file.batches {
        println!(
            "  Batch {} [{}] entries={} hash={} debit={} credit={}",
            batch.header.batch_number.trim_start_matches('0'),
            batch.header.standard_entry_class_code,
            batch.control.entry_addenda_count,
            batch.control.entry_hash,
            dollars(batch.control.total_debit),
            dollars(batch.control.total_credit),
        );
    }
    if let Some(control) = &file.control {
        println!(
            "  Totals: batches={} blocks={} entries={} hash={} debit={} credit={}",
            control.batch_count,
            control.block_count,
            control.entry_addenda_count,
            control.entry_hash,
            dollars(control.total_debit),
            dollars(control.total_credit),
        );
    }
}

/// Render cents as a dollar amount, e.g. 2500 -> "$25.00"
fn dollars(cents: u64) -> String {
    format!("${}", Decimal::new(cents as i64, 2))
}
