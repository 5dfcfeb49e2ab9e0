//! Headline KPI cards for the latest fiscal year.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::extraction::KpiSet;
use super::status::{ebitda_margin_status, growth_status, KpiStatus};
use crate::format::{format_currency, format_percentage};
use crate::math::checked_change;
use crate::types::Rate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiCard {
    pub key: String,
    pub label: String,
    /// Display value (Italian locale)
    pub value: String,
    /// Year-over-year change as a rate; margin card reports the margin delta
    pub change: Option<Rate>,
    pub status: KpiStatus,
}

/// `None` on a zero base or when the change does not fit a Decimal.
fn relative_change(current: Decimal, previous: Decimal) -> Option<Rate> {
    checked_change(current, previous, previous.abs())
}

/// Revenue growth versus the previous year, or the reported growth when there
/// is no previous year.
pub(crate) fn revenue_change(latest: &KpiSet, previous: Option<&KpiSet>) -> Option<Rate> {
    match previous {
        Some(prev) => checked_change(latest.revenue, prev.revenue, prev.revenue),
        None => latest.revenue_growth,
    }
}

/// Revenue, EBITDA, EBITDA margin and net income cards, in that order.
pub fn kpi_cards(latest: &KpiSet, previous: Option<&KpiSet>) -> Vec<KpiCard> {
    let revenue_delta = revenue_change(latest, previous);
    let margin_status = ebitda_margin_status(latest.ebitda_margin);

    vec![
        KpiCard {
            key: "revenue".into(),
            label: "Ricavi".into(),
            value: format_currency(latest.revenue),
            change: revenue_delta,
            status: growth_status(revenue_delta),
        },
        KpiCard {
            key: "ebitda".into(),
            label: "EBITDA".into(),
            value: format_currency(latest.ebitda),
            change: previous.and_then(|p| relative_change(latest.ebitda, p.ebitda)),
            status: margin_status,
        },
        KpiCard {
            key: "ebitda_margin".into(),
            label: "Margine EBITDA".into(),
            value: format_percentage(latest.ebitda_margin, 1),
            change: previous.and_then(|p| latest.ebitda_margin.checked_sub(p.ebitda_margin)),
            status: margin_status,
        },
        KpiCard {
            key: "net_income".into(),
            label: "Utile Netto".into(),
            value: format_currency(latest.net_income),
            change: previous.and_then(|p| {
                let base = if p.net_income.is_zero() {
                    Decimal::ONE
                } else {
                    p.net_income.abs()
                };
                checked_change(latest.net_income, p.net_income, base)
            }),
            status: if latest.net_income > Decimal::ZERO {
                KpiStatus::Good
            } else {
                KpiStatus::Poor
            },
        },
    ]
}
