//! # quantmd-types
//!
//! **Tier 1 (Core Types)**
//!
//! This crate defines the core data structures and contracts for `quantmd`.
//! It contains only data types, Serde definitions, and `SCHEMA_VERSION`.
//!
//! ## What belongs here
//! * Pure data structs (rows, reports, receipts)
//! * Serialization/Deserialization definitions
//! * The structured error taxonomy
//!
//! ## What does NOT belong here
//! * Arithmetic or statistics logic
//! * File I/O
//! * CLI argument parsing

#![forbid(unsafe_code)]

pub mod error;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use error::{ErrorCode, QuantmdError};

/// The current schema version for all receipt types.
pub const SCHEMA_VERSION: u32 = 1;

/// Identity of the tool that produced a receipt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    /// Tool info for the current build.
    #[must_use]
    pub fn current() -> Self {
        Self {
            name: "quantmd".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Table output format shared by the rendering tier and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum TableFormat {
    Md,
    Tsv,
    Json,
}

/// A fraction in lowest terms.
///
/// Invariants: `gcd(|numerator|, denominator) == 1` and the denominator is
/// strictly positive; the numerator carries the sign.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReducedFraction {
    pub numerator: i64,
    pub denominator: i64,
}

impl fmt::Display for ReducedFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// A decimal or percent rendering of a fraction.
///
/// `exact` is true iff the underlying decimal expansion terminates. The text
/// of a non-terminating value is rounded to the requested precision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormattedValue {
    pub text: String,
    pub exact: bool,
}

/// Min, max, and spread of a nonempty numeric column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RangeSummary {
    pub min: f64,
    pub max: f64,
    pub diff: f64,
}

/// Outcome of comparing two means by positional inspection.
///
/// `Indeterminate` means the pairing was not monotone and the caller must
/// fall back to computing both means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeanComparison {
    Greater,
    Less,
    Indeterminate,
}

/// One fraction with its rendered decimal and percent forms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversionRow {
    pub numerator: i64,
    pub denominator: i64,
    pub reduced: ReducedFraction,
    pub decimal: FormattedValue,
    pub percent: FormattedValue,
}

/// A batch of conversions plus the precisions they were rendered at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversionReport {
    pub rows: Vec<ConversionRow>,
    pub decimal_precision: u32,
    pub percent_precision: u32,
}

/// Summary statistics for one numeric column, optionally filtered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnStats {
    pub column: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    pub count: usize,
    pub range: RangeSummary,
    pub mean: f64,
    pub median: f64,
}

/// JSON receipt wrapping a conversion report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReceipt {
    pub schema_version: u32,
    pub generated_at_ms: u128,
    pub tool: ToolInfo,
    pub mode: String,
    pub report: ConversionReport,
}

/// JSON receipt wrapping a stats report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReceipt {
    pub schema_version: u32,
    pub generated_at_ms: u128,
    pub tool: ToolInfo,
    pub mode: String,
    pub report: ColumnStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_fraction_displays_as_ratio() {
        let half = ReducedFraction {
            numerator: 1,
            denominator: 2,
        };
        assert_eq!(half.to_string(), "1/2");
    }

    #[test]
    fn whole_numbers_display_without_denominator() {
        let three = ReducedFraction {
            numerator: 3,
            denominator: 1,
        };
        assert_eq!(three.to_string(), "3");
    }

    #[test]
    fn mean_comparison_serializes_to_snake_case() {
        let json = serde_json::to_string(&MeanComparison::Indeterminate).unwrap();
        assert_eq!(json, "\"indeterminate\"");
    }

    #[test]
    fn table_format_serializes_to_snake_case() {
        let json = serde_json::to_string(&TableFormat::Tsv).unwrap();
        assert_eq!(json, "\"tsv\"");
    }

    #[test]
    fn column_stats_omits_absent_filter() {
        let stats = ColumnStats {
            column: "price".to_string(),
            filter: None,
            count: 1,
            range: RangeSummary {
                min: 4.0,
                max: 4.0,
                diff: 0.0,
            },
            mean: 4.0,
            median: 4.0,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(!json.contains("filter"));
    }
}
