use anyhow::Result;
use quantmd_config as cli;
use quantmd_format as format;
use quantmd_rational as rational;
use quantmd_types::{ErrorCode, QuantmdError};

pub(crate) fn handle(args: cli::ConvertArgs, global: &cli::GlobalArgs) -> Result<()> {
    let (numerator, denominator) = parse_fraction(&args.fraction)?;
    let report = rational::conversion_report(
        &[(numerator, denominator)],
        args.precision,
        args.percent_precision,
    )?;
    format::print_conversion_report(&report, global.format, "convert", crate::now_ms())?;
    Ok(())
}

/// Parse a `N/D` literal.
fn parse_fraction(literal: &str) -> Result<(i64, i64), QuantmdError> {
    let Some((n, d)) = literal.split_once('/') else {
        return Err(QuantmdError::with_details(
            ErrorCode::InvalidInput,
            format!("Invalid fraction literal: {literal}"),
            "expected N/D",
        ));
    };
    let numerator = n.trim().parse::<i64>().map_err(|_| {
        QuantmdError::invalid_input(format!("numerator `{}` is not an integer", n.trim()))
    })?;
    let denominator = d.trim().parse::<i64>().map_err(|_| {
        QuantmdError::invalid_input(format!("denominator `{}` is not an integer", d.trim()))
    })?;
    Ok((numerator, denominator))
}
