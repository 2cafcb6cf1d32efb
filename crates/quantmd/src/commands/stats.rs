use anyhow::{Context, Result};
use quantmd_config as cli;
use quantmd_format as format;
use quantmd_stats as stats;
use quantmd_types::{ErrorCode, QuantmdError};

pub(crate) fn handle(args: cli::StatsArgs, global: &cli::GlobalArgs) -> Result<()> {
    let mut reader = csv::Reader::from_path(&args.path)
        .with_context(|| format!("Failed to open {}", args.path.display()))?;
    let headers = reader.headers()?.clone();
    let value_index = column_index(&headers, &args.column)?;

    let filter = args.filter.as_deref().map(parse_filter).transpose()?;
    let filter_index = match &filter {
        Some((column, _)) => Some(column_index(&headers, column)?),
        None => None,
    };

    let records = reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to read {}", args.path.display()))?;

    let predicate = filter_index.map(|index| {
        let expected = filter
            .as_ref()
            .map(|(_, value)| value.clone())
            .unwrap_or_default();
        move |record: &csv::StringRecord| record.get(index).unwrap_or("") == expected
    });
    let kept = stats::filter_rows(&records, predicate);

    let mut values = Vec::with_capacity(kept.len());
    for record in kept {
        let raw = record.get(value_index).unwrap_or("");
        let value: f64 = raw.trim().parse().map_err(|_| {
            QuantmdError::with_details(
                ErrorCode::InvalidInput,
                format!("Column `{}` is not numeric", args.column),
                format!("value `{raw}`"),
            )
        })?;
        values.push(value);
    }

    let report = stats::column_stats(&args.column, args.filter.clone(), &values)?;
    format::print_stats_report(&report, global.format, crate::now_ms())?;
    Ok(())
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize, QuantmdError> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| QuantmdError::column_not_found(name))
}

/// Parse a `COL=VALUE` filter expression.
fn parse_filter(raw: &str) -> Result<(String, String), QuantmdError> {
    match raw.split_once('=') {
        Some((column, value)) if !column.is_empty() && !value.is_empty() => {
            Ok((column.to_string(), value.to_string()))
        }
        _ => Err(QuantmdError::with_details(
            ErrorCode::InvalidInput,
            format!("Invalid filter: {raw}"),
            "expected COL=VALUE",
        )),
    }
}
