use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::sections::render;
use crate::format::format_currency;
use crate::kpi::status::ebitda_margin_status;
use crate::kpi::{KpiSet, KpiStatus};
use crate::types::Rate;

/// Revenue this large counts as a strength on its own.
const SIGNIFICANT_REVENUE: Decimal = dec!(2_000_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Needs a margin of two to lean either way.
    pub fn from_counts(strengths: usize, weaknesses: usize) -> Self {
        if strengths > weaknesses + 1 {
            Self::Positive
        } else if weaknesses > strengths + 1 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    fn template(self) -> &'static str {
        match self {
            Self::Positive => "Nel complesso, i numeri del {year} mostrano un'azienda in buona salute con ricavi di {revenue}. I punti di forza superano le criticità.",
            Self::Negative => "I dati del {year} (ricavi: {revenue}) evidenziano alcune aree di attenzione. Consigliamo di analizzare i punti deboli per intervenire.",
            Self::Neutral => "I numeri del {year} (ricavi: {revenue}) mostrano un quadro equilibrato, con alcuni punti di forza e alcune aree di miglioramento.",
        }
    }
}

/// Independent checks on the latest year. `growth` is the year-over-year
/// revenue growth, `None` without a previous year.
pub fn strengths_and_weaknesses(
    latest: &KpiSet,
    growth: Option<Rate>,
) -> (Vec<String>, Vec<String>) {
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();

    if let Some(g) = growth {
        if g > dec!(0.10) {
            strengths.push("Crescita dei ricavi a doppia cifra".to_string());
        } else if g < dec!(-0.05) {
            weaknesses.push("Ricavi in calo rispetto all'anno precedente".to_string());
        }
    }

    match ebitda_margin_status(latest.ebitda_margin) {
        KpiStatus::Excellent | KpiStatus::Good => {
            strengths.push("Buona marginalità operativa".to_string())
        }
        KpiStatus::Poor => weaknesses.push("Margine EBITDA sotto la media".to_string()),
        KpiStatus::Fair => {}
    }

    if latest.net_income > Decimal::ZERO {
        if latest.net_margin().is_some_and(|m| m > dec!(0.08)) {
            strengths.push("Eccellente utile netto".to_string());
        }
    } else {
        weaknesses.push("Utile netto negativo".to_string());
    }

    if let Some(ratio) = latest.debt_to_equity_ratio {
        if ratio < dec!(0.3) {
            strengths.push("Basso indebitamento".to_string());
        } else if ratio > dec!(1.0) {
            weaknesses.push("Elevato rapporto debiti/patrimonio".to_string());
        }
    }

    if latest.net_debt.is_some_and(|d| d < Decimal::ZERO) {
        strengths.push("Posizione di cassa positiva".to_string());
    }

    if latest.revenue >= SIGNIFICANT_REVENUE {
        strengths.push("Dimensione aziendale significativa".to_string());
    }

    (strengths, weaknesses)
}

pub fn overall_summary(latest: &KpiSet, sentiment: Sentiment) -> String {
    render(
        sentiment.template(),
        &[
            ("year", latest.fiscal_year.to_string()),
            ("revenue", format_currency(latest.revenue)),
        ],
    )
}
