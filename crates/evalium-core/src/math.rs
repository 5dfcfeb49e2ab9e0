//! Overflow-aware Decimal arithmetic.
//!
//! Plain `/`, `-` and `*` on [`Decimal`] panic when the result leaves the
//! 96-bit range. Every ratio and change in the crate goes through these
//! helpers: they either return `None` or saturate at `Decimal::MAX` /
//! `Decimal::MIN` with the sign the exact result would have had.

use rust_decimal::Decimal;

fn saturate(positive: bool) -> Decimal {
    if positive {
        Decimal::MAX
    } else {
        Decimal::MIN
    }
}

/// `numerator / denominator`; `None` on a zero divisor or an overflow.
pub fn safe_ratio(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    numerator.checked_div(denominator)
}

/// `numerator / denominator`, saturating on overflow. A zero divisor yields
/// zero; callers that need a different zero-divisor rule check it first.
pub fn saturating_ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or_else(|| {
        tracing::warn!(%numerator, %denominator, "ratio overflowed; saturating");
        let positive = numerator.is_sign_positive() == denominator.is_sign_positive();
        saturate(positive)
    })
}

/// `(current - previous) / base`, saturating on overflow of either step.
/// A zero base yields zero.
pub fn saturating_change(current: Decimal, previous: Decimal, base: Decimal) -> Decimal {
    if base.is_zero() || current == previous {
        return Decimal::ZERO;
    }
    match current.checked_sub(previous) {
        Some(delta) => saturating_ratio(delta, base),
        None => {
            tracing::warn!(%current, %previous, "change overflowed; saturating");
            saturate((current > previous) == base.is_sign_positive())
        }
    }
}

/// `(current - previous) / base`; `None` on a zero base or an overflow.
pub fn checked_change(current: Decimal, previous: Decimal, base: Decimal) -> Option<Decimal> {
    current.checked_sub(previous)?.checked_div(base)
}

/// Arithmetic mean; `0` for an empty slice. When the running sum would
/// overflow, each value is scaled by `1/n` before summing.
pub fn mean(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    let n = Decimal::from(values.len() as u64);
    let sum = values
        .iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v));
    match sum {
        Some(total) => total / n,
        None => values
            .iter()
            .fold(Decimal::ZERO, |acc, v| acc.saturating_add(*v / n)),
    }
}
