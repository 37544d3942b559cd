use std::fs::{self, File};
use std::io::{self, Write, stderr};
use std::path::Path;
use std::process::exit;

use anyhow::Result;
use regex::Regex;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use transibase_convert::Converter;
use transibase_convert::output;

fn main() -> Result<()> {
    //NOTE: Three positional arguments do not warrant pulling in the clap
    //      crate; the usage text below is the whole interface.
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: transibase-convert [input].json [output].csv [year:optional]");
        eprintln!("  year: keep only transactions from that calendar year (format: YYYY)");
        exit(1);
    }

    let input_path = &args[1];
    let output_path = &args[2];
    let filter_year = args.get(3).cloned();

    setup_logging();

    if !Path::new(input_path).exists() {
        eprintln!("Error: input file {input_path} does not exist.");
        exit(1);
    }

    if let Some(year) = &filter_year {
        let four_digit_year = Regex::new(r"^\d{4}$")?;

        if !four_digit_year.is_match(year) {
            eprintln!("Error: the year must use the YYYY format (e.g. 2023).");
            exit(1);
        }
    }

    if Path::new(output_path).exists() && !confirm_overwrite(output_path)? {
        println!("Operation cancelled.");
        return Ok(());
    }

    let raw = fs::read_to_string(input_path)?;
    let converter = Converter::new(filter_year.clone());
    let records = converter.extract_records(&raw)?;

    if records.is_empty() {
        match &filter_year {
            Some(year) => println!("No transactions found for year {year}."),
            None => println!("No transactions found.")
        }
        return Ok(());
    }

    output::write_csv(&records, File::create(output_path)?)?;

    info!("Wrote {} record(s) to {output_path}", records.len());

    println!("Extraction complete! CSV file created: {output_path}");
    println!("Entries written: {}", records.len());

    if let Some(year) = &filter_year {
        println!("Filter applied: year {year}");
    }

    Ok(())
}

fn setup_logging() {
    //NOTE: Status messages and the overwrite prompt own stdout, so logging
    //      goes to stderr. Verbosity is controlled through RUST_LOG.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn confirm_overwrite(path: &str) -> Result<bool> {
    print!("The file {path} already exists. Overwrite it? (y/n) ");
    io::stdout().flush()?;

    let mut response = String::new();
    io::stdin().read_line(&mut response)?;

    Ok(response.trim().eq_ignore_ascii_case("y"))
}
