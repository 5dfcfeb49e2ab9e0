//! Per-metric comparison of the company against its competitor set.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::format::{format_currency, format_percentage};
use crate::kpi::KpiSet;
use crate::math::{mean, saturating_ratio};

/// Above this ratio to the peer average the company leads.
const ABOVE_RATIO: Decimal = dec!(1.1);
/// Below this ratio to the peer average the company trails.
const BELOW_RATIO: Decimal = dec!(0.9);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkMetric {
    Revenue,
    Ebitda,
    EbitdaMargin,
    NetIncome,
    Equity,
}

impl BenchmarkMetric {
    /// Comparison order.
    pub const ALL: [BenchmarkMetric; 5] = [
        Self::Revenue,
        Self::Ebitda,
        Self::EbitdaMargin,
        Self::NetIncome,
        Self::Equity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Revenue => "Ricavi",
            Self::Ebitda => "EBITDA",
            Self::EbitdaMargin => "Margine EBITDA",
            Self::NetIncome => "Utile Netto",
            Self::Equity => "Patrimonio Netto",
        }
    }

    pub fn is_percentage(self) -> bool {
        matches!(self, Self::EbitdaMargin)
    }

    pub fn value(self, kpis: &KpiSet) -> Decimal {
        match self {
            Self::Revenue => kpis.revenue,
            Self::Ebitda => kpis.ebitda,
            Self::EbitdaMargin => kpis.ebitda_margin,
            Self::NetIncome => kpis.net_income,
            Self::Equity => kpis.equity,
        }
    }

    fn format(self, value: Decimal) -> String {
        if self.is_percentage() {
            format_percentage(value, 1)
        } else {
            format_currency(value)
        }
    }
}

impl std::fmt::Display for BenchmarkMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Revenue => "revenue",
            Self::Ebitda => "ebitda",
            Self::EbitdaMargin => "ebitda_margin",
            Self::NetIncome => "net_income",
            Self::Equity => "equity",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenchmarkPosition {
    Above,
    Below,
    Average,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    pub metric: BenchmarkMetric,
    pub metric_label: String,
    pub company_value: Decimal,
    pub competitor_average: Decimal,
    pub position: BenchmarkPosition,
    /// 0-100
    pub percentile: u32,
    pub narrative: String,
}

/// `above` when company / average > 1.1, `below` when < 0.9.
///
/// A zero average compares on the sign of the company value. A ratio too
/// large for a Decimal saturates, so it still lands on the side its sign
/// implies.
pub fn classify_position(company: Decimal, average: Decimal) -> BenchmarkPosition {
    if average.is_zero() {
        return if company > Decimal::ZERO {
            BenchmarkPosition::Above
        } else if company < Decimal::ZERO {
            BenchmarkPosition::Below
        } else {
            BenchmarkPosition::Average
        };
    }
    let ratio = saturating_ratio(company, average);
    if ratio > ABOVE_RATIO {
        BenchmarkPosition::Above
    } else if ratio < BELOW_RATIO {
        BenchmarkPosition::Below
    } else {
        BenchmarkPosition::Average
    }
}

/// Index of the company value in the ascending list of competitors plus
/// company, over the list length, as a rounded 0-100 figure. Ties rank at the
/// first occurrence.
pub fn percentile_rank(company: Decimal, competitors: &[Decimal]) -> u32 {
    let mut all: Vec<Decimal> = competitors.to_vec();
    all.push(company);
    all.sort();

    let index = all.iter().position(|v| *v == company).unwrap_or(0);
    let pct = Decimal::from(index as u64) / Decimal::from(all.len() as u64) * dec!(100);
    pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

fn comparison_narrative(
    metric: BenchmarkMetric,
    company: Decimal,
    average: Decimal,
    position: BenchmarkPosition,
    percentile: u32,
) -> String {
    let label = metric.label().to_lowercase();
    let value = metric.format(company);
    let avg = metric.format(average);
    match position {
        BenchmarkPosition::Above => format!(
            "Il tuo {} ({}) è superiore alla media dei competitor ({}). Ti posizioni nel {}° percentile.",
            label, value, avg, percentile
        ),
        BenchmarkPosition::Below => format!(
            "Il tuo {} ({}) è inferiore alla media dei competitor ({}). Ti posizioni nel {}° percentile.",
            label, value, avg, percentile
        ),
        BenchmarkPosition::Average => format!(
            "Il tuo {} ({}) è in linea con la media dei competitor ({}).",
            label, value, avg
        ),
    }
}

/// Compare one metric. `competitor_kpis` must be non-empty.
pub(crate) fn compare_metric(
    metric: BenchmarkMetric,
    company: &KpiSet,
    competitor_kpis: &[&KpiSet],
) -> BenchmarkComparison {
    let values: Vec<Decimal> = competitor_kpis.iter().map(|k| metric.value(k)).collect();
    let average = mean(&values);
    let company_value = metric.value(company);

    let position = classify_position(company_value, average);
    let percentile = percentile_rank(company_value, &values);
    let narrative = comparison_narrative(metric, company_value, average, position, percentile);

    BenchmarkComparison {
        metric,
        metric_label: metric.label().to_string(),
        company_value,
        competitor_average: average,
        position,
        percentile,
        narrative,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_thresholds() {
        assert_eq!(classify_position(dec!(111), dec!(100)), BenchmarkPosition::Above);
        assert_eq!(classify_position(dec!(110), dec!(100)), BenchmarkPosition::Average);
        assert_eq!(classify_position(dec!(90), dec!(100)), BenchmarkPosition::Average);
        assert_eq!(classify_position(dec!(89), dec!(100)), BenchmarkPosition::Below);
    }

    #[test]
    fn test_position_zero_average() {
        assert_eq!(classify_position(dec!(5), dec!(0)), BenchmarkPosition::Above);
        assert_eq!(classify_position(dec!(-5), dec!(0)), BenchmarkPosition::Below);
        assert_eq!(classify_position(dec!(0), dec!(0)), BenchmarkPosition::Average);
    }

    #[test]
    fn test_percentile_middle() {
        // sorted: [1, 3, 5] -> index 1 of 3
        assert_eq!(percentile_rank(dec!(3), &[dec!(1), dec!(5)]), 33);
    }

    #[test]
    fn test_percentile_extremes() {
        assert_eq!(percentile_rank(dec!(0), &[dec!(1), dec!(5)]), 0);
        // top of three ranks at index 2 -> 66.67 -> 67
        assert_eq!(percentile_rank(dec!(9), &[dec!(1), dec!(5)]), 67);
        assert_eq!(percentile_rank(dec!(9), &[dec!(1)]), 50);
    }

    #[test]
    fn test_percentile_ties_rank_first() {
        assert_eq!(percentile_rank(dec!(2), &[dec!(2), dec!(2), dec!(1)]), 25);
    }

    #[test]
    fn test_margin_narrative_uses_percentages() {
        let text = comparison_narrative(
            BenchmarkMetric::EbitdaMargin,
            dec!(0.2),
            dec!(0.1),
            BenchmarkPosition::Above,
            50,
        );
        assert_eq!(
            text,
            "Il tuo margine ebitda (20,0%) è superiore alla media dei competitor (10,0%). Ti posizioni nel 50° percentile."
        );
    }

    #[test]
    fn test_currency_narrative_in_line() {
        let text = comparison_narrative(
            BenchmarkMetric::Revenue,
            dec!(3_000_000),
            dec!(3_000_000),
            BenchmarkPosition::Average,
            33,
        );
        assert_eq!(
            text,
            "Il tuo ricavi (3.000.000\u{a0}€) è in linea con la media dei competitor (3.000.000\u{a0}€)."
        );
    }
}
