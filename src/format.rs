//! Display formatting for prices and figures
//!
//! Output mirrors en-US locale formatting: `,` thousands separators and
//! exactly two fraction digits, with halves rounded away from zero.

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency glyph prefixed to every price
pub const CURRENCY_GLYPH: &str = "₱";

/// Format a price as `₱1,234.50`. A missing value renders as `₱0.00`.
pub fn format_currency(value: Option<f64>) -> String {
    format!("{CURRENCY_GLYPH}{}", format_number(value))
}

/// Format a figure as `1,234.50`. A missing value renders as `0.00`.
///
/// Non-finite values are not corrected: NaN renders as `NaN` and infinities
/// as `∞` / `-∞`.
pub fn format_number(value: Option<f64>) -> String {
    let value = value.unwrap_or(0.0);

    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞".into() } else { "-∞".into() };
    }

    let fixed = round_cents(value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    // -0.001 rounds to 0.00 and must not keep its sign
    let negative = value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    let sign = if negative { "-" } else { "" };

    format!("{sign}{}.{frac_part}", group_thousands(int_part))
}

/// Format a percentage using the shortest representation (`72%`, `72.5%`)
pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}

/// Parse a form field the way a lenient numeric input does: the longest
/// numeric prefix wins, anything unparseable becomes `0.0`.
pub fn parse_float_or_zero(input: &str) -> f64 {
    let trimmed = input.trim_start();
    let prefix = numeric_prefix(trimmed);

    match prefix.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Two-decimal text of a non-negative finite value.
///
/// Rounds the exact binary value, so `265.125` (exact) goes up while `1.005`
/// (really 1.00499…) goes down. Magnitudes beyond `Decimal` fall back to
/// the float formatter.
fn round_cents(value: f64) -> String {
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.2}")
        }
        None => format!("{value:.2}"),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Longest prefix shaped like `[+-]digits[.digits][e[+-]digits]`
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start || has_digits {
            has_digits = has_digits || frac_end > frac_start;
            end = frac_end;
        }
    }

    if !has_digits {
        return "";
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_missing_value() {
        assert_eq!(format_currency(None), "₱0.00");
    }

    #[test]
    fn test_currency_thousands() {
        assert_eq!(format_currency(Some(1234.5)), "₱1,234.50");
        assert_eq!(format_currency(Some(1_234_567.891)), "₱1,234,567.89");
        assert_eq!(format_currency(Some(999.999)), "₱1,000.00");
        assert_eq!(format_currency(Some(12.0)), "₱12.00");
    }

    #[test]
    fn test_halves_round_away_from_zero() {
        assert_eq!(format_currency(Some(265.125)), "₱265.13");
        assert_eq!(format_currency(Some(1234.625)), "₱1,234.63");
        assert_eq!(format_currency(Some(0.375)), "₱0.38");
        assert_eq!(format_number(Some(-2.875)), "-2.88");
        // Not a true half in binary
        assert_eq!(format_number(Some(1.005)), "1.00");
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_number(Some(0.0)), "0.00");
        assert_eq!(format_number(None), "0.00");
        assert_eq!(format_number(Some(56.12)), "56.12");
        assert_eq!(format_number(Some(-4321.0)), "-4,321.00");
        assert_eq!(format_number(Some(-0.001)), "0.00");
    }

    #[test]
    fn test_non_finite_passes_through() {
        assert_eq!(format_currency(Some(f64::NAN)), "₱NaN");
        assert_eq!(format_number(Some(f64::INFINITY)), "∞");
        assert_eq!(format_number(Some(f64::NEG_INFINITY)), "-∞");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(72.0), "72%");
        assert_eq!(format_percent(72.5), "72.5%");
        assert_eq!(format_percent(0.0), "0%");
    }

    #[test]
    fn test_parse_float_or_zero() {
        assert!((parse_float_or_zero("12.5") - 12.5).abs() < f64::EPSILON);
        assert!((parse_float_or_zero("  40 bags") - 40.0).abs() < f64::EPSILON);
        assert!((parse_float_or_zero("1e3kg") - 1000.0).abs() < f64::EPSILON);
        assert!((parse_float_or_zero("-.5") + 0.5).abs() < f64::EPSILON);
        assert!((parse_float_or_zero("3.") - 3.0).abs() < f64::EPSILON);
        assert_eq!(parse_float_or_zero(""), 0.0);
        assert_eq!(parse_float_or_zero("abc"), 0.0);
        assert_eq!(parse_float_or_zero("."), 0.0);
        assert_eq!(parse_float_or_zero("-"), 0.0);
    }
}
