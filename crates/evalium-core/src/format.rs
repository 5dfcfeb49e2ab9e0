//! Italian-locale formatting for the figures embedded in narrative text.
//!
//! Mirrors `it-IT` number formatting: `.` groups thousands, `,` separates
//! decimals, the euro sign trails after a non-breaking space. Midpoints round
//! away from zero.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::types::{Money, Rate};

const NBSP: char = '\u{a0}';

fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Insert `.` every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

fn sign_prefix(rounded: Decimal) -> &'static str {
    if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    }
}

/// Whole euros, e.g. `1234567.4` -> `"1.234.567 €"`.
pub fn format_currency(value: Money) -> String {
    let rounded = round_half_up(value, 0);
    let digits = rounded.abs().normalize().to_string();
    format!("{}{}{}€", sign_prefix(rounded), group_thousands(&digits), NBSP)
}

/// Percentage of a decimal rate, e.g. `0.125` -> `"12,5%"`.
pub fn format_percentage(value: Rate, decimals: u32) -> String {
    let rounded = round_half_up(value.saturating_mul(dec!(100)), decimals);
    let plain = format!("{:.*}", decimals as usize, rounded.abs());
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (plain.clone(), None),
    };
    let mut out = format!("{}{}", sign_prefix(rounded), group_thousands(&int_part));
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(&frac);
    }
    out.push('%');
    out
}

/// Fixed decimals with a `.` separator and no grouping (`toFixed` style),
/// used for inline growth percentages and ratios.
pub fn format_fixed(value: Decimal, decimals: u32) -> String {
    let rounded = round_half_up(value, decimals);
    format!("{}{:.*}", sign_prefix(rounded), decimals as usize, rounded.abs())
}

/// Short euro amounts for labels: `2000000` -> `"2M"`, `750000` -> `"750K"`.
pub fn format_compact(value: Money) -> String {
    let abs = value.abs();
    let (scaled, suffix) = if abs >= dec!(1_000_000) {
        (value / dec!(1_000_000), "M")
    } else if abs >= dec!(1_000) {
        (value / dec!(1_000), "K")
    } else {
        (value, "")
    };
    let shown = round_half_up(scaled, 1).normalize().to_string().replace('.', ",");
    format!("{}{}", shown, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(dec!(3000000)), "3.000.000\u{a0}€");
        assert_eq!(format_currency(dec!(1234)), "1.234\u{a0}€");
        assert_eq!(format_currency(dec!(999)), "999\u{a0}€");
        assert_eq!(format_currency(dec!(0)), "0\u{a0}€");
    }

    #[test]
    fn test_currency_rounds_half_up() {
        assert_eq!(format_currency(dec!(1234.5)), "1.235\u{a0}€");
        assert_eq!(format_currency(dec!(1234.49)), "1.234\u{a0}€");
    }

    #[test]
    fn test_currency_negative() {
        assert_eq!(format_currency(dec!(-50000)), "-50.000\u{a0}€");
        assert_eq!(format_currency(dec!(-0.4)), "0\u{a0}€");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(format_percentage(dec!(0.125), 1), "12,5%");
        assert_eq!(format_percentage(dec!(0.1), 1), "10,0%");
        assert_eq!(format_percentage(dec!(-0.03), 1), "-3,0%");
        assert_eq!(format_percentage(dec!(0.2), 0), "20%");
        assert_eq!(format_percentage(dec!(12.5), 0), "1.250%");
    }

    #[test]
    fn test_fixed() {
        assert_eq!(format_fixed(dec!(20), 1), "20.0");
        assert_eq!(format_fixed(dec!(-3.25), 1), "-3.3");
        assert_eq!(format_fixed(dec!(0.5), 2), "0.50");
    }

    #[test]
    fn test_compact() {
        assert_eq!(format_compact(dec!(2000000)), "2M");
        assert_eq!(format_compact(dec!(1500000)), "1,5M");
        assert_eq!(format_compact(dec!(750000)), "750K");
        assert_eq!(format_compact(dec!(500)), "500");
    }
}
