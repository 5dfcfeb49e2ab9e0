//! KPI extraction from a single fiscal-year statement, plus the growth
//! helpers every downstream analysis shares.

use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use crate::math;
use crate::types::{Currency, FinancialStatement, Money, Multiple, Rate};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Normalised KPIs for one fiscal year. Built once from a statement and
/// never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSet {
    // Profitability
    pub revenue: Money,
    pub revenue_growth: Option<Rate>,
    pub ebitda: Money,
    pub ebitda_margin: Rate,
    pub net_income: Money,
    pub net_profit_margin: Option<Rate>,
    // Balance sheet
    pub total_assets: Money,
    pub total_liabilities: Money,
    pub equity: Money,
    pub net_debt: Option<Money>,
    // Ratios
    pub debt_to_equity_ratio: Option<Multiple>,
    pub current_ratio: Option<Multiple>,
    // Metadata
    pub fiscal_year: i32,
    pub currency: Currency,
}

impl KpiSet {
    /// Net income over revenue; `None` when revenue is zero or the ratio
    /// overflows.
    pub fn net_margin(&self) -> Option<Rate> {
        math::safe_ratio(self.net_income, self.revenue)
    }
}

/// Statement fields that can be averaged across years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementField {
    Revenue,
    Ebitda,
    EbitdaMargin,
    NetIncome,
    TotalAssets,
    TotalLiabilities,
    Equity,
    NetDebt,
    RevenueGrowth,
    NetProfitMargin,
    DebtToEquityRatio,
    CurrentRatio,
}

impl StatementField {
    fn value(self, s: &FinancialStatement) -> Option<Decimal> {
        match self {
            Self::Revenue => Some(s.revenue),
            Self::Ebitda => Some(s.ebitda),
            Self::EbitdaMargin => Some(s.ebitda_margin),
            Self::NetIncome => Some(s.net_income),
            Self::TotalAssets => Some(s.total_assets),
            Self::TotalLiabilities => Some(s.total_liabilities),
            Self::Equity => Some(s.equity),
            Self::NetDebt => s.net_debt,
            Self::RevenueGrowth => s.revenue_growth,
            Self::NetProfitMargin => s.net_profit_margin,
            Self::DebtToEquityRatio => s.debt_to_equity_ratio,
            Self::CurrentRatio => s.current_ratio,
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Copy a statement's figures into a [`KpiSet`]. Never fails.
pub fn extract_kpis(statement: &FinancialStatement) -> KpiSet {
    KpiSet {
        revenue: statement.revenue,
        revenue_growth: statement.revenue_growth,
        ebitda: statement.ebitda,
        ebitda_margin: statement.ebitda_margin,
        net_income: statement.net_income,
        net_profit_margin: statement.net_profit_margin,
        total_assets: statement.total_assets,
        total_liabilities: statement.total_liabilities,
        equity: statement.equity,
        net_debt: statement.net_debt,
        debt_to_equity_ratio: statement.debt_to_equity_ratio,
        current_ratio: statement.current_ratio,
        fiscal_year: statement.fiscal_year,
        currency: statement.currency.clone(),
    }
}

/// Year-over-year growth `(current - previous) / |previous|`.
///
/// A zero base yields `1` when the current value is positive, `0` otherwise.
/// An overflowing result saturates at `Decimal::MAX` / `Decimal::MIN`.
pub fn calculate_growth_rate(current: Money, previous: Money) -> Rate {
    if previous.is_zero() {
        return if current > Decimal::ZERO {
            Decimal::ONE
        } else {
            Decimal::ZERO
        };
    }
    math::saturating_change(current, previous, previous.abs())
}

/// Compound annual growth rate `(end / start)^(1 / years) - 1`.
///
/// Returns `0` for a non-positive start, non-positive horizon, or a negative
/// end value (no real root).
pub fn calculate_cagr(start: Money, end: Money, years: Decimal) -> Rate {
    if start <= Decimal::ZERO || years <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let Some(ratio) = math::safe_ratio(end, start) else {
        tracing::warn!(%start, %end, "CAGR ratio overflowed");
        return Decimal::ZERO;
    };
    if ratio.is_zero() {
        return -Decimal::ONE;
    }
    if ratio < Decimal::ZERO {
        tracing::warn!(%start, %end, "CAGR undefined for a negative end value");
        return Decimal::ZERO;
    }
    match math::safe_ratio(Decimal::ONE, years).and_then(|exp| ratio.checked_powd(exp)) {
        Some(growth) => growth - Decimal::ONE,
        None => Decimal::ZERO,
    }
}

/// Mean of a field over the statements that report it; `0` when none do.
pub fn calculate_average(statements: &[FinancialStatement], field: StatementField) -> Decimal {
    let values: Vec<Decimal> = statements.iter().filter_map(|s| field.value(s)).collect();
    math::mean(&values)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
