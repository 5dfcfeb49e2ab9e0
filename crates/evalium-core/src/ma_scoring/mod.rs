//! M&A attractiveness score.
//!
//! A weighted average of five factors, gated by the eligibility thresholds in
//! [`MaConfig`]. Highlights and the summary paragraph are derived from the
//! same inputs.

pub mod factors;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::config::MaConfig;
use crate::format::format_compact;
use crate::kpi::{calculate_growth_rate, extract_kpis, KpiSet};
use crate::types::{sorted_by_year_desc, FinancialStatement, Rate};

pub use factors::{FactorStatus, MaFactor};

const NO_DATA_SUMMARY: &str = "Dati finanziari insufficienti per la valutazione.";
/// Score from which the summary calls the profile "molto interessante".
const TOP_SUMMARY_SCORE: u32 = 80;
const GOOD_SUMMARY_SCORE: u32 = 60;
const FAIR_SUMMARY_SCORE: u32 = 40;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaScoreResult {
    /// 0-100
    pub score: u32,
    pub is_eligible: bool,
    pub factors: Vec<MaFactor>,
    pub highlights: Vec<String>,
    pub summary: String,
}

/// `round(sum(score * weight) / sum(weight))`, midpoints away from zero.
pub fn weighted_score(factors: &[MaFactor]) -> u32 {
    let total_weight: u32 = factors.iter().map(|f| f.weight).sum();
    if total_weight == 0 {
        return 0;
    }
    let weighted: u64 = factors
        .iter()
        .map(|f| u64::from(f.score) * u64::from(f.weight))
        .sum();
    (Decimal::from(weighted) / Decimal::from(total_weight))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

/// Score threshold plus either the revenue path or the EBITDA path.
pub fn is_eligible(score: u32, kpis: &KpiSet, config: &MaConfig) -> bool {
    let meets_revenue = kpis.revenue >= config.revenue_threshold;
    let meets_ebitda = kpis.ebitda_margin >= config.ebitda_margin_threshold
        && kpis.ebitda >= config.ebitda_threshold;
    score >= config.score_threshold && (meets_revenue || meets_ebitda)
}

fn highlights(kpis: &KpiSet, growth: Option<Rate>, config: &MaConfig) -> Vec<String> {
    let mut out = Vec::new();
    if kpis.revenue >= config.revenue_threshold {
        out.push(format!(
            "Ricavi superiori a €{}",
            format_compact(config.revenue_threshold)
        ));
    }
    if kpis.ebitda_margin > dec!(0.15) {
        out.push("Margine EBITDA sopra la media".to_string());
    }
    if growth.is_some_and(|g| g > dec!(0.10)) {
        out.push("Crescita a doppia cifra".to_string());
    }
    if kpis.debt_to_equity_ratio.is_some_and(|r| r < dec!(0.5)) {
        out.push("Basso indebitamento".to_string());
    }
    if kpis.net_income > Decimal::ZERO && kpis.net_margin().is_some_and(|m| m > dec!(0.05)) {
        out.push("Buona redditività netta".to_string());
    }
    out
}

fn summary(score: u32, eligible: bool) -> &'static str {
    if score >= TOP_SUMMARY_SCORE {
        "Azienda con profilo molto interessante per operazioni straordinarie. Dimensione, redditività e crescita sono tutti fattori attrattivi."
    } else if score >= GOOD_SUMMARY_SCORE && eligible {
        "Azienda con buon potenziale per M&A. Presenta alcuni punti di forza che potrebbero interessare investitori o acquirenti."
    } else if score >= FAIR_SUMMARY_SCORE {
        "Azienda con alcuni elementi interessanti ma con margini di miglioramento prima di considerare operazioni straordinarie."
    } else {
        "Al momento il profilo aziendale non è ottimale per operazioni M&A. Consigliamo di concentrarsi sulla crescita e sul miglioramento dei margini."
    }
}

/// Revenue growth used by the scorer: year over year when a previous year
/// exists, otherwise the reported `revenue_growth`.
pub(crate) fn scoring_growth(latest: &KpiSet, previous: Option<&KpiSet>) -> Option<Rate> {
    match previous {
        Some(prev) => Some(calculate_growth_rate(latest.revenue, prev.revenue)),
        None => latest.revenue_growth,
    }
}

/// Score the most recent fiscal year of `statements`.
pub fn calculate_ma_score(statements: &[FinancialStatement], config: &MaConfig) -> MaScoreResult {
    let sorted = sorted_by_year_desc(statements);
    let Some(latest_statement) = sorted.first() else {
        return MaScoreResult {
            score: 0,
            is_eligible: false,
            factors: Vec::new(),
            highlights: Vec::new(),
            summary: NO_DATA_SUMMARY.to_string(),
        };
    };

    let latest = extract_kpis(latest_statement);
    let previous = sorted.get(1).map(|s| extract_kpis(s));
    let growth = scoring_growth(&latest, previous.as_ref());

    let factors = vec![
        factors::size_factor(&latest),
        factors::ebitda_factor(&latest),
        factors::growth_factor(growth),
        factors::profitability_factor(&latest),
        factors::financial_health_factor(&latest),
    ];
    let score = weighted_score(&factors);
    let eligible = is_eligible(score, &latest, config);

    tracing::debug!(
        fiscal_year = latest.fiscal_year,
        score,
        eligible,
        "M&A score computed"
    );

    MaScoreResult {
        score,
        is_eligible: eligible,
        factors,
        highlights: highlights(&latest, growth, config),
        summary: summary(score, eligible).to_string(),
    }
}
