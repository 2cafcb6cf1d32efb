//! # quantmd-config
//!
//! **Tier 4 (Configuration)**
//!
//! This crate defines the CLI argument structures.
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * Default values and enums
//!
//! ## What does NOT belong here
//! * Business logic
//! * I/O operations

#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use quantmd_rational::{DECIMAL_PRECISION, PERCENT_PRECISION};
pub use quantmd_types::TableFormat;

/// `quantmd` — fraction conversion tables and column statistics receipts.
#[derive(Parser, Debug)]
#[command(name = "quantmd", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = TableFormat::Md, global = true)]
    pub format: TableFormat,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Reduce one fraction and render its decimal and percent forms.
    Convert(ConvertArgs),

    /// Render the proper-fraction conversion table for a set of denominators.
    Table(TableArgs),

    /// Summary statistics (count, range, mean, median) for a CSV column.
    Stats(StatsArgs),

    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Fraction literal, e.g. `3/8` or `-5/4`.
    pub fraction: String,

    /// Decimal places for the decimal form.
    #[arg(long, default_value_t = DECIMAL_PRECISION)]
    pub precision: u32,

    /// Decimal places for the percent form.
    #[arg(long, default_value_t = PERCENT_PRECISION)]
    pub percent_precision: u32,
}

#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    /// Denominators to tabulate, e.g. `--denominators 2,3,4`.
    #[arg(long, value_delimiter = ',', required = true)]
    pub denominators: Vec<i64>,

    /// Decimal places for the decimal column.
    #[arg(long, default_value_t = DECIMAL_PRECISION)]
    pub precision: u32,

    /// Decimal places for the percent column.
    #[arg(long, default_value_t = PERCENT_PRECISION)]
    pub percent_precision: u32,
}

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// CSV file with a header row.
    pub path: PathBuf,

    /// Name of the numeric column to summarize.
    #[arg(long)]
    pub column: String,

    /// Restrict rows to those whose category column matches, e.g.
    /// `--where state=Texas`.
    #[arg(long = "where", value_name = "COL=VALUE")]
    pub filter: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Powershell,
    Zsh,
}
