//! Company-versus-competitors benchmark.
//!
//! Compares the company's KPIs with the arithmetic mean of its competitors on
//! five fixed metrics, ranks it by percentile and derives a summary with
//! recommendations.

pub mod chart;
pub mod comparison;
pub mod summary;

use serde::{Deserialize, Serialize};

use crate::error::EvaliumError;
use crate::kpi::{extract_kpis, KpiSet};
use crate::types::FinancialStatement;
use crate::EvaliumResult;

pub use chart::{benchmark_chart_data, BenchmarkChartData};
pub use comparison::{BenchmarkComparison, BenchmarkMetric, BenchmarkPosition};
pub use summary::{BenchmarkSummary, OverallPosition};

/// A competitor's latest statement as supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorStatement {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,
    pub statement: FinancialStatement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorData {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,
    pub kpis: KpiSet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub company_kpis: KpiSet,
    pub competitors: Vec<CompetitorData>,
    pub comparisons: Vec<BenchmarkComparison>,
    pub summary: BenchmarkSummary,
}

/// Benchmark a company statement against one or more competitors.
pub fn create_benchmark(
    company: &FinancialStatement,
    competitors: &[CompetitorStatement],
) -> EvaliumResult<BenchmarkResult> {
    if competitors.is_empty() {
        return Err(EvaliumError::InsufficientData(
            "At least one competitor is required for a benchmark.".into(),
        ));
    }

    let company_kpis = extract_kpis(company);
    let competitors: Vec<CompetitorData> = competitors
        .iter()
        .map(|c| CompetitorData {
            name: c.name.clone(),
            vat_number: c.vat_number.clone(),
            kpis: extract_kpis(&c.statement),
        })
        .collect();

    let competitor_kpis: Vec<&KpiSet> = competitors.iter().map(|c| &c.kpis).collect();
    let comparisons: Vec<BenchmarkComparison> = BenchmarkMetric::ALL
        .iter()
        .map(|m| comparison::compare_metric(*m, &company_kpis, &competitor_kpis))
        .collect();
    let summary = summary::summarize(&comparisons);

    tracing::debug!(
        competitors = competitors.len(),
        overall_position = %summary.overall_position,
        "benchmark computed"
    );

    Ok(BenchmarkResult {
        company_kpis,
        competitors,
        comparisons,
        summary,
    })
}
