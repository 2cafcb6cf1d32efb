//! Deterministic fraction reduction and decimal/percent rendering.
//!
//! All text output goes through integer long division so results never
//! inherit binary floating point artifacts.

#![forbid(unsafe_code)]

use quantmd_types::{
    ConversionReport, ConversionRow, FormattedValue, QuantmdError, ReducedFraction,
};

/// Default number of decimal places for decimal text.
pub const DECIMAL_PRECISION: u32 = 3;

/// Default number of decimal places for percent text.
pub const PERCENT_PRECISION: u32 = 1;

/// Greatest common divisor via the Euclidean algorithm.
///
/// `gcd(a, 0) == |a|`, and the result is always non-negative.
#[must_use]
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a as i64
}

/// Reduce a fraction to lowest terms.
///
/// The denominator of the result is strictly positive; the numerator carries
/// the sign. Zero reduces to `0/1`. Fails with `invalid_fraction` when the
/// denominator is zero.
pub fn reduce(numerator: i64, denominator: i64) -> Result<ReducedFraction, QuantmdError> {
    if denominator == 0 {
        return Err(QuantmdError::invalid_fraction(numerator));
    }
    let g = gcd(numerator, denominator);
    let mut numerator = numerator / g;
    let mut denominator = denominator / g;
    if denominator < 0 {
        numerator = -numerator;
        denominator = -denominator;
    }
    Ok(ReducedFraction {
        numerator,
        denominator,
    })
}

/// Whether a reduced denominator yields a terminating decimal expansion.
///
/// True iff repeatedly dividing out 2 and then 5 leaves 1; a reduced
/// fraction terminates in base 10 exactly when its denominator has no other
/// prime factors. Zero is never exact.
#[must_use]
pub fn is_exact(denominator: i64) -> bool {
    let mut d = denominator.unsigned_abs();
    if d == 0 {
        return false;
    }
    while d % 2 == 0 {
        d /= 2;
    }
    while d % 5 == 0 {
        d /= 5;
    }
    d == 1
}

/// Render `numerator/denominator` as decimal text at the default precision.
pub fn decimal_text(numerator: i64, denominator: i64) -> Result<FormattedValue, QuantmdError> {
    decimal_text_with_precision(numerator, denominator, DECIMAL_PRECISION)
}

/// Render `numerator/denominator` as decimal text at `precision` places.
///
/// Terminating expansions have trailing zeros trimmed; non-terminating ones
/// keep the full width and are flagged approximate.
pub fn decimal_text_with_precision(
    numerator: i64,
    denominator: i64,
    precision: u32,
) -> Result<FormattedValue, QuantmdError> {
    let reduced = reduce(numerator, denominator)?;
    let exact = is_exact(reduced.denominator);
    let scaled = scaled_magnitude(
        u128::from(reduced.numerator.unsigned_abs()),
        reduced.denominator as u128,
        precision,
    );
    let text = compose_text(reduced.numerator < 0, scaled, precision, exact);
    Ok(FormattedValue { text, exact })
}

/// Render `numerator/denominator` as percent text at the default precision.
pub fn percent_text(numerator: i64, denominator: i64) -> Result<FormattedValue, QuantmdError> {
    percent_text_with_precision(numerator, denominator, PERCENT_PRECISION)
}

/// Render `numerator/denominator × 100` as percent text at `precision`
/// places, with a trailing `%`.
///
/// Exactness is re-derived from the percent's own reduced denominator; since
/// 100 contributes only the primes 2 and 5 it always agrees with the
/// decimal's flag.
pub fn percent_text_with_precision(
    numerator: i64,
    denominator: i64,
    precision: u32,
) -> Result<FormattedValue, QuantmdError> {
    let reduced = reduce(numerator, denominator)?;
    let g = gcd(100, reduced.denominator);
    let percent_denominator = reduced.denominator / g;
    let percent_scale = 100 / g;
    let exact = is_exact(percent_denominator);
    let scaled = scaled_magnitude(
        u128::from(reduced.numerator.unsigned_abs()) * percent_scale as u128,
        percent_denominator as u128,
        precision,
    );
    let mut text = compose_text(reduced.numerator < 0, scaled, precision, exact);
    text.push('%');
    Ok(FormattedValue { text, exact })
}

/// Reduce one fraction and render both of its text forms.
pub fn conversion_row(
    numerator: i64,
    denominator: i64,
    decimal_precision: u32,
    percent_precision: u32,
) -> Result<ConversionRow, QuantmdError> {
    Ok(ConversionRow {
        numerator,
        denominator,
        reduced: reduce(numerator, denominator)?,
        decimal: decimal_text_with_precision(numerator, denominator, decimal_precision)?,
        percent: percent_text_with_precision(numerator, denominator, percent_precision)?,
    })
}

/// Convert a batch of fractions into a report.
pub fn conversion_report(
    fractions: &[(i64, i64)],
    decimal_precision: u32,
    percent_precision: u32,
) -> Result<ConversionReport, QuantmdError> {
    let rows = fractions
        .iter()
        .map(|&(n, d)| conversion_row(n, d, decimal_precision, percent_precision))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ConversionReport {
        rows,
        decimal_precision,
        percent_precision,
    })
}

/// The proper-fraction table for each denominator: numerators `1..d`.
pub fn base_fraction_report(
    denominators: &[i64],
    decimal_precision: u32,
    percent_precision: u32,
) -> Result<ConversionReport, QuantmdError> {
    let mut fractions = Vec::new();
    for &d in denominators {
        if d == 0 {
            return Err(QuantmdError::invalid_fraction(1));
        }
        for n in 1..d.abs() {
            fractions.push((n, d));
        }
    }
    conversion_report(&fractions, decimal_precision, percent_precision)
}

/// `|value| * 10^precision`, rounded half-away-from-zero at the last digit.
fn scaled_magnitude(numerator: u128, denominator: u128, precision: u32) -> u128 {
    let num = numerator * 10u128.pow(precision);
    let q = num / denominator;
    let r = num % denominator;
    if r * 2 >= denominator { q + 1 } else { q }
}

/// Place the decimal point, trim exact trailing zeros, apply the sign.
fn compose_text(negative: bool, scaled: u128, precision: u32, exact: bool) -> String {
    let mut digits = scaled.to_string();
    let width = precision as usize + 1;
    if digits.len() < width {
        digits = format!("{digits:0>width$}");
    }
    let point = digits.len() - precision as usize;
    let mut text = String::with_capacity(digits.len() + 2);
    text.push_str(&digits[..point]);
    if precision > 0 {
        text.push('.');
        text.push_str(&digits[point..]);
    }
    if exact {
        text = trim_zeros(&text);
    }
    // A magnitude that rounds to zero renders without a sign.
    if negative && scaled != 0 {
        text.insert(0, '-');
    }
    text
}

/// Trim trailing fractional zeros and a dangling point, never the leading
/// integer digit.
fn trim_zeros(text: &str) -> String {
    if !text.contains('.') {
        return text.to_string();
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
