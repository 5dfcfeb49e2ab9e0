//! Four-level qualitative status for individual KPIs.
//!
//! Cutoffs are exact and inclusive on the side listed first; they drive
//! user-facing wording and must not drift.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Multiple, Rate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KpiStatus {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl std::fmt::Display for KpiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        };
        write!(f, "{}", s)
    }
}

/// `>= 0.20` excellent, `>= 0.12` good, `>= 0.05` fair, else poor.
pub fn ebitda_margin_status(margin: Rate) -> KpiStatus {
    if margin >= dec!(0.20) {
        KpiStatus::Excellent
    } else if margin >= dec!(0.12) {
        KpiStatus::Good
    } else if margin >= dec!(0.05) {
        KpiStatus::Fair
    } else {
        KpiStatus::Poor
    }
}

/// Unknown growth is fair.
pub fn growth_status(growth: Option<Rate>) -> KpiStatus {
    let Some(g) = growth else {
        return KpiStatus::Fair;
    };
    if g >= dec!(0.15) {
        KpiStatus::Excellent
    } else if g >= dec!(0.05) {
        KpiStatus::Good
    } else if g >= Decimal::ZERO {
        KpiStatus::Fair
    } else {
        KpiStatus::Poor
    }
}

/// Lower is better: `<= 0.3` excellent, `<= 0.6` good, `<= 1.0` fair.
pub fn debt_to_equity_status(ratio: Option<Multiple>) -> KpiStatus {
    let Some(r) = ratio else {
        return KpiStatus::Fair;
    };
    if r <= dec!(0.3) {
        KpiStatus::Excellent
    } else if r <= dec!(0.6) {
        KpiStatus::Good
    } else if r <= dec!(1.0) {
        KpiStatus::Fair
    } else {
        KpiStatus::Poor
    }
}

pub fn current_ratio_status(ratio: Option<Multiple>) -> KpiStatus {
    let Some(r) = ratio else {
        return KpiStatus::Fair;
    };
    if r >= dec!(2.0) {
        KpiStatus::Excellent
    } else if r >= dec!(1.5) {
        KpiStatus::Good
    } else if r >= dec!(1.0) {
        KpiStatus::Fair
    } else {
        KpiStatus::Poor
    }
}
