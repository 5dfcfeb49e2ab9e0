//! The five scoring factors. Each one reads one or two KPIs and maps them to a
//! fixed score bucket; weights always add up to 100.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::kpi::KpiSet;
use crate::math::saturating_ratio;
use crate::types::Rate;

pub const SIZE_WEIGHT: u32 = 30;
pub const EBITDA_WEIGHT: u32 = 25;
pub const GROWTH_WEIGHT: u32 = 20;
pub const PROFITABILITY_WEIGHT: u32 = 15;
pub const FINANCIAL_HEALTH_WEIGHT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorStatus {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaFactor {
    pub name: String,
    /// 0-100
    pub score: u32,
    pub weight: u32,
    pub status: FactorStatus,
    pub description: String,
}

fn factor(name: &str, weight: u32, score: u32, status: FactorStatus, description: &str) -> MaFactor {
    MaFactor {
        name: name.to_string(),
        score,
        weight,
        status,
        description: description.to_string(),
    }
}

pub fn size_factor(kpis: &KpiSet) -> MaFactor {
    let (score, status, description) = if kpis.revenue >= dec!(5_000_000) {
        (100, FactorStatus::Positive, "Dimensione significativa per il mercato M&A")
    } else if kpis.revenue >= dec!(2_000_000) {
        (80, FactorStatus::Positive, "Buona dimensione per operazioni straordinarie")
    } else if kpis.revenue >= dec!(1_000_000) {
        (50, FactorStatus::Neutral, "Dimensione nella media per piccole operazioni")
    } else {
        (20, FactorStatus::Negative, "Dimensione ridotta per il mercato M&A")
    };
    factor("Dimensione (Ricavi)", SIZE_WEIGHT, score, status, description)
}

/// Absolute EBITDA and margin are tested together.
pub fn ebitda_factor(kpis: &KpiSet) -> MaFactor {
    let (ebitda, margin) = (kpis.ebitda, kpis.ebitda_margin);
    let (score, status, description) = if ebitda >= dec!(500_000) && margin >= dec!(0.15) {
        (100, FactorStatus::Positive, "Eccellente redditività operativa")
    } else if ebitda >= dec!(200_000) && margin >= dec!(0.10) {
        (75, FactorStatus::Positive, "Buona generazione di cassa")
    } else if ebitda > Decimal::ZERO && margin >= dec!(0.05) {
        (50, FactorStatus::Neutral, "Marginalità nella media")
    } else if ebitda > Decimal::ZERO {
        (25, FactorStatus::Negative, "Margini operativi ridotti")
    } else {
        (0, FactorStatus::Negative, "EBITDA negativo")
    };
    factor("Redditività (EBITDA)", EBITDA_WEIGHT, score, status, description)
}

/// `None` means no growth figure is available at all.
pub fn growth_factor(growth: Option<Rate>) -> MaFactor {
    let (score, status, description) = match growth {
        None => (50, FactorStatus::Neutral, "Dati storici insufficienti"),
        Some(g) if g >= dec!(0.20) => (100, FactorStatus::Positive, "Crescita eccezionale"),
        Some(g) if g >= dec!(0.10) => (85, FactorStatus::Positive, "Crescita a doppia cifra"),
        Some(g) if g >= dec!(0.05) => (65, FactorStatus::Neutral, "Crescita moderata"),
        Some(g) if g >= Decimal::ZERO => (40, FactorStatus::Neutral, "Crescita piatta"),
        Some(_) => (15, FactorStatus::Negative, "Ricavi in calo"),
    };
    factor("Crescita", GROWTH_WEIGHT, score, status, description)
}

pub fn profitability_factor(kpis: &KpiSet) -> MaFactor {
    let net_margin = if kpis.revenue > Decimal::ZERO {
        saturating_ratio(kpis.net_income, kpis.revenue)
    } else {
        Decimal::ZERO
    };
    let (score, status, description) = if net_margin >= dec!(0.10) {
        (100, FactorStatus::Positive, "Eccellente utile netto")
    } else if net_margin >= dec!(0.05) {
        (75, FactorStatus::Positive, "Buona redditività finale")
    } else if net_margin > Decimal::ZERO {
        (50, FactorStatus::Neutral, "Utile positivo ma contenuto")
    } else {
        (10, FactorStatus::Negative, "Azienda in perdita")
    };
    factor("Utile Netto", PROFITABILITY_WEIGHT, score, status, description)
}

/// Non-positive equity scores zero whatever the leverage ratio says.
pub fn financial_health_factor(kpis: &KpiSet) -> MaFactor {
    let (score, status, description) = if kpis.equity <= Decimal::ZERO {
        (0, FactorStatus::Negative, "Patrimonio netto negativo")
    } else {
        match kpis.debt_to_equity_ratio {
            None => (50, FactorStatus::Neutral, "Dati insufficienti"),
            Some(r) if r <= dec!(0.3) => {
                (100, FactorStatus::Positive, "Struttura finanziaria molto solida")
            }
            Some(r) if r <= dec!(0.6) => (75, FactorStatus::Positive, "Buon equilibrio finanziario"),
            Some(r) if r <= dec!(1.0) => (50, FactorStatus::Neutral, "Indebitamento nella norma"),
            Some(_) => (25, FactorStatus::Negative, "Elevato indebitamento"),
        }
    };
    factor(
        "Solidità Patrimoniale",
        FINANCIAL_HEALTH_WEIGHT,
        score,
        status,
        description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Currency;

    fn kpis() -> KpiSet {
        KpiSet {
            revenue: dec!(3_000_000),
            revenue_growth: None,
            ebitda: dec!(400_000),
            ebitda_margin: dec!(0.13),
            net_income: dec!(200_000),
            net_profit_margin: None,
            total_assets: dec!(5_000_000),
            total_liabilities: dec!(2_500_000),
            equity: dec!(2_500_000),
            net_debt: None,
            debt_to_equity_ratio: Some(dec!(0.5)),
            current_ratio: None,
            fiscal_year: 2023,
            currency: Currency::EUR,
        }
    }

    #[test]
    fn test_weights_sum_to_100() {
        assert_eq!(
            SIZE_WEIGHT + EBITDA_WEIGHT + GROWTH_WEIGHT + PROFITABILITY_WEIGHT + FINANCIAL_HEALTH_WEIGHT,
            100
        );
    }

    #[test]
    fn test_size_boundaries() {
        let mut k = kpis();
        for (revenue, expected) in [
            (dec!(5_000_000), 100),
            (dec!(4_999_999), 80),
            (dec!(2_000_000), 80),
            (dec!(1_000_000), 50),
            (dec!(999_999), 20),
        ] {
            k.revenue = revenue;
            assert_eq!(size_factor(&k).score, expected, "revenue {}", revenue);
        }
    }

    #[test]
    fn test_ebitda_needs_both_thresholds() {
        let mut k = kpis();
        k.ebitda = dec!(600_000);
        k.ebitda_margin = dec!(0.14);
        assert_eq!(ebitda_factor(&k).score, 75);

        k.ebitda = dec!(100_000);
        k.ebitda_margin = dec!(0.30);
        assert_eq!(ebitda_factor(&k).score, 50);

        k.ebitda_margin = dec!(0.01);
        let f = ebitda_factor(&k);
        assert_eq!(f.score, 25);
        assert_eq!(f.status, FactorStatus::Negative);

        k.ebitda = dec!(-1);
        assert_eq!(ebitda_factor(&k).description, "EBITDA negativo");
    }

    #[test]
    fn test_growth_buckets() {
        assert_eq!(growth_factor(None).score, 50);
        assert_eq!(growth_factor(Some(dec!(0.20))).score, 100);
        assert_eq!(growth_factor(Some(dec!(0.10))).score, 85);
        assert_eq!(growth_factor(Some(dec!(0.05))).score, 65);
        assert_eq!(growth_factor(Some(dec!(0))).score, 40);
        assert_eq!(growth_factor(Some(dec!(-0.01))).score, 15);
    }

    #[test]
    fn test_profitability_zero_revenue() {
        let mut k = kpis();
        k.revenue = Decimal::ZERO;
        let f = profitability_factor(&k);
        assert_eq!(f.score, 10);
        assert_eq!(f.description, "Azienda in perdita");
    }

    #[test]
    fn test_financial_health_negative_equity_wins() {
        let mut k = kpis();
        k.equity = dec!(-10);
        k.debt_to_equity_ratio = Some(dec!(0.1));
        assert_eq!(financial_health_factor(&k).score, 0);

        k.equity = dec!(10);
        k.debt_to_equity_ratio = None;
        assert_eq!(financial_health_factor(&k).score, 50);
        k.debt_to_equity_ratio = Some(dec!(1.0));
        assert_eq!(financial_health_factor(&k).score, 50);
        k.debt_to_equity_ratio = Some(dec!(1.01));
        assert_eq!(financial_health_factor(&k).score, 25);
    }
}
