//! Plain-Italian explanation of a company's financial statements.
//!
//! Only the two most recent fiscal years are read. Output is deterministic:
//! year references come from the statements, never the clock.

pub mod assessment;
pub mod sections;

use serde::{Deserialize, Serialize};

use crate::kpi::{calculate_growth_rate, extract_kpis, KpiSet};
use crate::math::saturating_change;
use crate::types::{sorted_by_year_desc, FinancialStatement, Rate};

use assessment::{overall_summary, strengths_and_weaknesses, Sentiment};
use sections::{financial_structure_section, profitability_section, revenue_section};

const NO_DATA_SUMMARY: &str = "Non abbiamo ancora dati finanziari per questa azienda.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionStatus {
    Positive,
    Neutral,
    Negative,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeSection {
    pub title: String,
    pub icon: String,
    pub content: String,
    pub status: SectionStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialNarrative {
    pub summary: String,
    pub sections: Vec<NarrativeSection>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Year-over-year revenue growth `(latest - previous) / previous`.
///
/// A zero previous revenue falls back to [`calculate_growth_rate`]; an
/// overflowing ratio saturates.
pub(crate) fn year_over_year_growth(latest: &KpiSet, previous: &KpiSet) -> Rate {
    if previous.revenue.is_zero() {
        tracing::warn!(
            fiscal_year = previous.fiscal_year,
            "previous revenue is zero; growth falls back to the zero-base rule"
        );
        return calculate_growth_rate(latest.revenue, previous.revenue);
    }
    saturating_change(latest.revenue, previous.revenue, previous.revenue)
}

/// Build the narrative: revenue, profitability and financial-structure
/// sections, strengths and weaknesses, and a one-sentence summary.
pub fn generate_narrative(statements: &[FinancialStatement]) -> FinancialNarrative {
    let sorted = sorted_by_year_desc(statements);
    let Some(latest_statement) = sorted.first() else {
        return FinancialNarrative {
            summary: NO_DATA_SUMMARY.to_string(),
            sections: Vec::new(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
        };
    };

    let latest = extract_kpis(latest_statement);
    let previous = sorted.get(1).map(|s| extract_kpis(s));
    let growth = previous
        .as_ref()
        .map(|prev| year_over_year_growth(&latest, prev));

    let sections = vec![
        revenue_section(&latest, growth),
        profitability_section(&latest),
        financial_structure_section(&latest),
    ];

    let (strengths, weaknesses) = strengths_and_weaknesses(&latest, growth);
    let sentiment = Sentiment::from_counts(strengths.len(), weaknesses.len());
    let summary = overall_summary(&latest, sentiment);

    tracing::debug!(
        fiscal_year = latest.fiscal_year,
        strengths = strengths.len(),
        weaknesses = weaknesses.len(),
        ?sentiment,
        "narrative generated"
    );

    FinancialNarrative {
        summary,
        sections,
        strengths,
        weaknesses,
    }
}
