//! Centavo rounding and peso formatting.
//!
//! Payslip figures are computed in `f64` so they match the demo's output
//! exactly. Anything that is summed or shown to a person goes through
//! [`centavos`] first.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Converts an amount to a `Decimal` rounded to two places.
///
/// Midpoints round away from zero. Returns `None` when the amount is not
/// finite or is beyond what a `Decimal` can hold (about 7.9e28).
///
/// # Example
///
/// ```
/// use prominent_payroll::models::centavos;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(centavos(4648.4), Some(Decimal::from_str("4648.40").unwrap()));
/// assert_eq!(centavos(0.125), Some(Decimal::from_str("0.13").unwrap()));
/// assert_eq!(centavos(1e30), None);
/// ```
pub fn centavos(amount: f64) -> Option<Decimal> {
    let mut rounded = Decimal::from_f64(amount)?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    Some(rounded)
}

/// Renders an amount to two places for a report cell.
///
/// Uses the rounded `Decimal` when it exists and the `f64` text otherwise,
/// so an out-of-range figure is never printed as zero.
///
/// # Example
///
/// ```
/// use prominent_payroll::models::centavo_text;
///
/// assert_eq!(centavo_text(900.0), "900.00");
/// assert!(centavo_text(1e30).starts_with("1000000000000000"));
/// ```
pub fn centavo_text(amount: f64) -> String {
    match centavos(amount) {
        Some(value) => value.to_string(),
        None => format!("{amount:.2}"),
    }
}

/// Formats an amount as pesos with thousands separators.
///
/// # Example
///
/// ```
/// use prominent_payroll::models::format_peso;
/// use std::str::FromStr;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_peso(Decimal::from_str("42551.6").unwrap()), "₱42,551.60");
/// assert_eq!(format_peso(Decimal::from_str("-200").unwrap()), "-₱200.00");
/// ```
pub fn format_peso(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let plain = format!("{:.2}", rounded.abs());
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}₱{grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_centavos_rounds_to_two_places() {
        assert_eq!(centavos(42551.6), Some(dec("42551.60")));
        assert_eq!(centavos(1234.5678), Some(dec("1234.57")));
        assert_eq!(centavos(0.0015), Some(dec("0.00")));
    }

    #[test]
    fn test_centavos_always_carries_two_places() {
        assert_eq!(centavos(800.0).unwrap().to_string(), "800.00");
        assert_eq!(centavos(0.5).unwrap().to_string(), "0.50");
    }

    #[test]
    fn test_centavos_of_unrepresentable_amount_is_none() {
        assert_eq!(centavos(f64::NAN), None);
        assert_eq!(centavos(f64::INFINITY), None);
        assert_eq!(centavos(1e30), None);
        assert_eq!(centavos(-1e30), None);
        assert!(centavos(5e28).is_some());
    }

    #[test]
    fn test_centavo_text_never_zeroes_large_amounts() {
        assert_eq!(centavo_text(1350.0), "1350.00");
        let text = centavo_text(1e30);
        assert!(text.ends_with(".00"));
        assert!((text.parse::<f64>().unwrap() - 1e30).abs() < 1e15);
    }

    #[test]
    fn test_format_peso_groups_thousands() {
        assert_eq!(format_peso(dec("0")), "₱0.00");
        assert_eq!(format_peso(dec("999.5")), "₱999.50");
        assert_eq!(format_peso(dec("1000")), "₱1,000.00");
        assert_eq!(format_peso(dec("1234567.891")), "₱1,234,567.89");
    }

    #[test]
    fn test_format_peso_negative_amount() {
        assert_eq!(format_peso(dec("-1350")), "-₱1,350.00");
    }
}
