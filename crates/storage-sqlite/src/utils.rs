//! Helpers shared by the repository implementations.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a stored decimal string, tolerating scientific notation.
///
/// Amounts are written as plain decimal strings, so failures only happen for
/// rows edited outside the application. Those fall back to zero and are logged.
pub fn parse_decimal(value: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value) {
        Ok(d) => d,
        Err(decimal_err) => match f64::from_str(value).ok().and_then(Decimal::from_f64) {
            Some(d) => d,
            None => {
                log::error!(
                    "Failed to parse {} '{}' as a decimal ({}). Falling back to zero.",
                    field_name,
                    value,
                    decimal_err
                );
                Decimal::ZERO
            }
        },
    }
}

/// Canonical text form used when storing amounts.
pub fn format_decimal(value: Decimal) -> String {
    value.round_dp(2).to_string()
}
