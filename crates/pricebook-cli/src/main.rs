//! Pricebook CLI - batch pricing reports from text files

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pricebook::prelude::*;
use std::fs;
use std::path::PathBuf;

/// The input template, shown by `pricebook template`
const TEMPLATE: &str = "\
--- product 1 ---
Date: 24.11.2025
Address: Market St
Category: Oil
Sub-Category: Soybean
Brand: Health Pro
Packaging: Bottle
Size: 1000ml
Packs: 12
Buy-in: 22.50$                 # required
Scheme(base): 4
FOC: 0
Direct Disc.(%): 0.0%          # optional
Mark - up: 0.50$               # required
Price Unit: 9000              # required

--- product 2 ---
Date: 24.11.2025
Category: Milk
Sub-Category: Condensed
Brand: Phka Chhouk
Packaging: Can
Size: 390g
Packs: 48
Buy-in: 28.60$
Mark - up: 1.00$
Price Unit: 3000
";

#[derive(Parser)]
#[command(name = "pricebook")]
#[command(author, version, about = "Parse product batches and emit pricing reports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the grouped pricing report for a batch file
    Report {
        /// Input batch text file
        input: PathBuf,

        /// Render derived cells as spreadsheet formulas
        #[arg(short, long)]
        formulas: bool,

        /// Local currency suffix for literals
        #[arg(long, default_value = "KHR")]
        currency: String,

        /// Default exchange rate for blocks without one
        #[arg(long, default_value = "4100")]
        rate: f64,

        /// Skip blocks that fail normalization instead of aborting
        #[arg(long)]
        lenient: bool,
    },

    /// List products with their sheet and ordinal
    List {
        /// Input batch text file
        input: PathBuf,
    },

    /// Print the input template
    Template,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            input,
            formulas,
            currency,
            rate,
            lenient,
        } => report(&input, formulas, currency, rate, lenient),
        Commands::List { input } => list(&input),
        Commands::Template => {
            print!("{TEMPLATE}");
            Ok(())
        }
    }
}

fn load_book(input: &PathBuf, rate: f64, lenient: bool) -> Result<ProductBook> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read '{}'", input.display()))?;

    let mut book = ProductBook::with_options(CalcOptions {
        default_exchange_rate: rate,
    });
    let mode = if lenient {
        BatchMode::Lenient
    } else {
        BatchMode::Atomic
    };
    let summary = book.ingest(&text, mode).context("Failed to ingest batch")?;

    for failure in &summary.skipped {
        eprintln!("Warning: skipped block {}: {}", failure.index, failure.error);
    }
    eprintln!("Ingested {} product(s)", summary.added);
    Ok(book)
}

fn report(input: &PathBuf, formulas: bool, currency: String, rate: f64, lenient: bool) -> Result<()> {
    let book = load_book(input, rate, lenient)?;

    let options = ReportOptions {
        mode: if formulas {
            RenderMode::Formula
        } else {
            RenderMode::Literal
        },
        local_currency: currency,
    };
    let report = book.report(&options);

    let headers: Vec<&str> = Column::ALL.iter().map(Column::header).collect();
    for sheet in &report.sheets {
        println!("=== {} ===", sheet.sheet);
        println!("{}", headers.join(" | "));
        for row in &sheet.rows {
            let cells: Vec<String> = row.cells().iter().map(|cell| cell.render()).collect();
            println!("{}", cells.join(" | "));
        }
        println!();
    }
    Ok(())
}

fn list(input: &PathBuf) -> Result<()> {
    let book = load_book(input, 4100.0, false)?;

    if book.registry().is_empty() {
        println!("No products.");
        return Ok(());
    }
    for entry in book.list() {
        let date = entry
            .date
            .map_or_else(|| "?".to_string(), |d| d.format("%d.%m.%Y").to_string());
        println!(
            "[{}] {} - {} | {} | {}",
            entry.sheet,
            entry.ordinal,
            date,
            entry.category.as_deref().unwrap_or("?"),
            entry.brand.as_deref().unwrap_or("?"),
        );
    }
    Ok(())
}
