use anyhow::Result;
use quantmd_config as cli;
use quantmd_format as format;
use quantmd_rational as rational;
use quantmd_types::QuantmdError;

pub(crate) fn handle(args: cli::TableArgs, global: &cli::GlobalArgs) -> Result<()> {
    for &d in &args.denominators {
        if d < 2 {
            return Err(QuantmdError::invalid_input(format!(
                "denominator `{d}` must be 2 or greater"
            ))
            .into());
        }
    }
    let report =
        rational::base_fraction_report(&args.denominators, args.precision, args.percent_precision)?;
    format::print_conversion_report(&report, global.format, "table", crate::now_ms())?;
    Ok(())
}
