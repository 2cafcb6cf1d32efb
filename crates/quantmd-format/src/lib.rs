//! # quantmd-format
//!
//! **Tier 3 (Formatting)**
//!
//! This crate handles the rendering and serialization of `quantmd` reports.
//! It supports Markdown, TSV, and JSON receipt formats.
//!
//! ## What belongs here
//! * Markdown/TSV table rendering
//! * JSON receipt assembly and serialization
//! * Stdout printing entry points
//!
//! ## What does NOT belong here
//! * Business logic (reducing fractions, computing stats)
//! * CLI arg parsing
//! * Clocks — callers supply `generated_at_ms`

#![forbid(unsafe_code)]

use anyhow::Result;

use quantmd_types::{
    ColumnStats, ConversionReceipt, ConversionReport, FormattedValue, StatsReceipt, TableFormat,
    ToolInfo, SCHEMA_VERSION,
};

// -----------------------
// Conversion table output
// -----------------------

/// Print a conversion report in the requested format.
pub fn print_conversion_report(
    report: &ConversionReport,
    format: TableFormat,
    mode: &str,
    generated_at_ms: u128,
) -> Result<()> {
    match format {
        TableFormat::Md => print!("{}", render_conversion_md(report)),
        TableFormat::Tsv => print!("{}", render_conversion_tsv(report)),
        TableFormat::Json => {
            let receipt = ConversionReceipt {
                schema_version: SCHEMA_VERSION,
                generated_at_ms,
                tool: ToolInfo::current(),
                mode: mode.to_string(),
                report: report.clone(),
            };
            println!("{}", serde_json::to_string(&receipt)?);
        }
    }
    Ok(())
}

#[must_use]
pub fn render_conversion_md(report: &ConversionReport) -> String {
    let mut s = String::new();
    s.push_str("|Fraction|Reduced|Decimal|Percent|\n");
    s.push_str("|---|---|---:|---:|\n");
    for row in &report.rows {
        s.push_str(&format!(
            "|{}/{}|{}|{}|{}|\n",
            row.numerator,
            row.denominator,
            row.reduced,
            marked(&row.decimal),
            marked(&row.percent),
        ));
    }
    s
}

#[must_use]
pub fn render_conversion_tsv(report: &ConversionReport) -> String {
    let mut s = String::new();
    s.push_str("Fraction\tReduced\tDecimal\tPercent\tExact\n");
    for row in &report.rows {
        s.push_str(&format!(
            "{}/{}\t{}\t{}\t{}\t{}\n",
            row.numerator,
            row.denominator,
            row.reduced,
            row.decimal.text,
            row.percent.text,
            if row.decimal.exact { "exact" } else { "approx" },
        ));
    }
    s
}

/// Markdown cell text: approximate values carry the same marker the source
/// tables badge them with.
fn marked(value: &FormattedValue) -> String {
    if value.exact {
        value.text.clone()
    } else {
        format!("{} (approx)", value.text)
    }
}

// --------------------
// Stats summary output
// --------------------

/// Print a column-stats report in the requested format.
pub fn print_stats_report(
    stats: &ColumnStats,
    format: TableFormat,
    generated_at_ms: u128,
) -> Result<()> {
    match format {
        TableFormat::Md => print!("{}", render_stats_md(stats)),
        TableFormat::Tsv => print!("{}", render_stats_tsv(stats)),
        TableFormat::Json => {
            let receipt = StatsReceipt {
                schema_version: SCHEMA_VERSION,
                generated_at_ms,
                tool: ToolInfo::current(),
                mode: "stats".to_string(),
                report: stats.clone(),
            };
            println!("{}", serde_json::to_string(&receipt)?);
        }
    }
    Ok(())
}

#[must_use]
pub fn render_stats_md(stats: &ColumnStats) -> String {
    let mut s = String::new();
    match &stats.filter {
        Some(filter) => s.push_str(&format!("**{}** where {}\n\n", stats.column, filter)),
        None => s.push_str(&format!("**{}**\n\n", stats.column)),
    }
    s.push_str("|Stat|Value|\n");
    s.push_str("|---|---:|\n");
    s.push_str(&format!("|Count|{}|\n", stats.count));
    s.push_str(&format!("|Min|{}|\n", fmt_number(stats.range.min)));
    s.push_str(&format!("|Max|{}|\n", fmt_number(stats.range.max)));
    s.push_str(&format!("|Range|{}|\n", fmt_number(stats.range.diff)));
    s.push_str(&format!("|Mean|{}|\n", fmt_number(stats.mean)));
    s.push_str(&format!("|Median|{}|\n", fmt_number(stats.median)));
    s
}

#[must_use]
pub fn render_stats_tsv(stats: &ColumnStats) -> String {
    let mut s = String::new();
    s.push_str("Column\tFilter\tCount\tMin\tMax\tRange\tMean\tMedian\n");
    s.push_str(&format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
        stats.column,
        stats.filter.as_deref().unwrap_or("-"),
        stats.count,
        fmt_number(stats.range.min),
        fmt_number(stats.range.max),
        fmt_number(stats.range.diff),
        fmt_number(stats.mean),
        fmt_number(stats.median),
    ));
    s
}

/// Display a statistic at three decimal places with trailing zeros trimmed.
fn fmt_number(value: f64) -> String {
    let text = format!("{value:.3}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
