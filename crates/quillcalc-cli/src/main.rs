//! Quillcalc CLI - evaluate table formulas against CSV snapshots

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quillcalc::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "quill")]
#[command(author, version, about = "Table formula engine debug tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a formula at a cell against a CSV grid snapshot
    Eval {
        /// Input CSV file (the table's raw text, no headers)
        input: PathBuf,

        /// Formula to evaluate, e.g. "=SUM(ABOVE)"
        formula: String,

        /// Current cell the formula sits in, e.g. B3
        #[arg(short, long, default_value = "A1")]
        cell: String,

        /// Print the evaluation trace as well
        #[arg(short, long)]
        trace: bool,
    },

    /// Show how each cell of a CSV grid scans (reference, kind, number)
    Scan {
        /// Input CSV file
        input: PathBuf,
    },

    /// Evaluate every formula cell (text starting with '=') in place
    Preview {
        /// Input CSV file
        input: PathBuf,
    },

    /// Shift the cell references in a formula (fill/drag-copy preview)
    Shift {
        /// Formula text, e.g. "SUM(A1:B2)"
        formula: String,

        /// Rows to shift by (may be negative)
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        rows: i64,

        /// Columns to shift by (may be negative)
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        cols: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Eval {
            input,
            formula,
            cell,
            trace,
        } => eval(&input, &formula, &cell, trace),
        Commands::Scan { input } => scan(&input),
        Commands::Preview { input } => preview(&input),
        Commands::Shift {
            formula,
            rows,
            cols,
        } => {
            println!("{}", shift_references(&formula, rows, cols));
            Ok(())
        }
    }
}

/// Read a CSV file into the raw row/column text the scanner consumes
fn read_grid(path: &Path) -> Result<Grid> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open '{}'", path.display()))?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("Failed to read '{}'", path.display()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Grid::scan(&rows))
}

fn eval(input: &Path, formula: &str, cell: &str, trace: bool) -> Result<()> {
    let grid = read_grid(input)?;
    let current = CellAddress::parse(cell)
        .with_context(|| format!("'{}' is not a cell reference", cell))?;

    match evaluate(formula, current, &grid) {
        Ok(result) => {
            println!("{}", result.value);
            if trace {
                println!("{}", result.trace);
            }
            Ok(())
        }
        Err(err) => anyhow::bail!("{}", err),
    }
}

fn scan(input: &Path) -> Result<()> {
    let grid = read_grid(input)?;
    println!(
        "{} rows x {} cols",
        grid.row_count(),
        grid.col_count()
    );

    for cell in grid.iter() {
        let kind = match cell.kind {
            CellKind::Empty => "empty",
            CellKind::Number => "number",
            CellKind::Text => "text",
        };
        match cell.number {
            Some(n) => println!("{:>6}  {:<6} {:<12} ({})", cell.reference, kind, cell.raw, n),
            None => println!("{:>6}  {:<6} {}", cell.reference, kind, cell.raw),
        }
    }
    Ok(())
}

fn preview(input: &Path) -> Result<()> {
    let grid = read_grid(input)?;
    let preview = preview_grid(&grid);

    for cell in &preview.cells {
        match &cell.outcome {
            Ok(result) => println!("{:>6}  {}  ->  {}", cell.address, cell.formula, result.value),
            Err(err) => println!("{:>6}  {}  ->  error: {}", cell.address, cell.formula, err),
        }
    }
    println!(
        "{} formulas, {} evaluated, {} errors",
        preview.stats.formula_count, preview.stats.evaluated, preview.stats.errors
    );
    Ok(())
}
