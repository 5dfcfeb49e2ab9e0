//! Full analysis of one company: KPIs, cards, narrative, M&A score and an
//! optional benchmark, wrapped in the standard output envelope.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::benchmark::{
    benchmark_chart_data, create_benchmark, BenchmarkChartData, BenchmarkResult,
    CompetitorStatement,
};
use crate::kpi::cards::{kpi_cards, KpiCard};
use crate::kpi::{extract_kpis, KpiSet};
use crate::ma_scoring::{calculate_ma_score, scoring_growth, MaScoreResult};
use crate::narrative::{generate_narrative, FinancialNarrative};
use crate::{types::*, EvaliumError, EvaliumResult, MaConfig};

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyReportInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Any order; the most recent fiscal year drives the analysis
    #[serde(default)]
    pub statements: Vec<FinancialStatement>,
    #[serde(default)]
    pub competitors: Vec<CompetitorStatement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub latest_kpis: Option<KpiSet>,
    pub previous_kpis: Option<KpiSet>,
    pub kpi_cards: Vec<KpiCard>,
    pub narrative: FinancialNarrative,
    pub ma_score: MaScoreResult,
    pub benchmark: Option<BenchmarkResult>,
    pub benchmark_chart: Option<BenchmarkChartData>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

pub fn analyze_company(
    input: &CompanyReportInput,
    config: &MaConfig,
) -> EvaliumResult<ComputationOutput<CompanyReport>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    config.validate()?;

    let sorted = sorted_by_year_desc(&input.statements);
    let latest = sorted.first().map(|s| extract_kpis(s));
    let previous = sorted.get(1).map(|s| extract_kpis(s));

    match sorted.len() {
        0 => warnings
            .push("No financial statements provided; narrative and M&A score are empty.".into()),
        1 => warnings.push(
            "Only one fiscal year available; year-over-year comparisons use the reported revenue growth."
                .into(),
        ),
        _ => {}
    }

    if let Some(latest) = latest.as_ref() {
        let growth = scoring_growth(latest, previous.as_ref());
        if growth.is_some_and(|g| g < config.growth_threshold) {
            warnings.push("Revenue growth is below the configured M&A growth threshold.".into());
        }
    }

    // -- Benchmark ------------------------------------------------------------
    let benchmark = if input.competitors.is_empty() {
        None
    } else {
        let company = sorted.first().ok_or_else(|| {
            EvaliumError::InsufficientData(
                "A benchmark needs at least one company statement.".into(),
            )
        })?;
        Some(create_benchmark(company, &input.competitors)?)
    };
    let benchmark_chart = benchmark.as_ref().map(benchmark_chart_data);

    let cards = latest
        .as_ref()
        .map(|l| kpi_cards(l, previous.as_ref()))
        .unwrap_or_default();

    let report = CompanyReport {
        company_name: input.company_name.clone(),
        kpi_cards: cards,
        narrative: generate_narrative(&input.statements),
        ma_score: calculate_ma_score(&input.statements, config),
        latest_kpis: latest,
        previous_kpis: previous,
        benchmark,
        benchmark_chart,
    };

    tracing::debug!(
        statements = input.statements.len(),
        competitors = input.competitors.len(),
        score = report.ma_score.score,
        "company report computed"
    );

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Evalium company analysis (KPI, narrative, M&A score, benchmark)",
        config,
        warnings,
        elapsed,
        report,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn statement(year: i32, revenue: Decimal) -> FinancialStatement {
        FinancialStatement {
            fiscal_year: year,
            revenue,
            ebitda: dec!(400_000),
            ebitda_margin: dec!(0.13),
            net_income: dec!(200_000),
            total_assets: dec!(5_000_000),
            total_liabilities: dec!(2_500_000),
            equity: dec!(2_500_000),
            net_debt: None,
            revenue_growth: None,
            net_profit_margin: None,
            debt_to_equity_ratio: Some(dec!(0.5)),
            current_ratio: None,
            currency: Currency::EUR,
        }
    }

    fn input(statements: Vec<FinancialStatement>) -> CompanyReportInput {
        CompanyReportInput {
            company_name: Some("Rossi S.r.l.".into()),
            statements,
            competitors: Vec::new(),
        }
    }

    #[test]
    fn test_empty_report_warns() {
        let out = analyze_company(&input(Vec::new()), &MaConfig::default()).unwrap();
        assert!(out.result.latest_kpis.is_none());
        assert!(out.result.kpi_cards.is_empty());
        assert_eq!(out.result.ma_score.score, 0);
        assert!(out.warnings[0].starts_with("No financial statements"));
    }

    #[test]
    fn test_single_year_warning() {
        let out = analyze_company(&input(vec![statement(2023, dec!(3_000_000))]), &MaConfig::default())
            .unwrap();
        assert_eq!(out.warnings.len(), 1);
        assert!(out.warnings[0].contains("Only one fiscal year"));
        assert_eq!(out.result.kpi_cards.len(), 4);
        assert!(out.result.benchmark.is_none());
    }

    #[test]
    fn test_slow_growth_warning() {
        let out = analyze_company(
            &input(vec![statement(2022, dec!(3_000_000)), statement(2023, dec!(3_030_000))]),
            &MaConfig::default(),
        )
        .unwrap();
        assert!(out
            .warnings
            .iter()
            .any(|w| w.contains("below the configured M&A growth threshold")));
        assert_eq!(out.result.previous_kpis.map(|k| k.fiscal_year), Some(2022));
    }

    #[test]
    fn test_competitors_without_statements_fail() {
        let mut i = input(Vec::new());
        i.competitors.push(CompetitorStatement {
            name: "Bianchi S.p.A.".into(),
            vat_number: Some("IT01234567890".into()),
            statement: statement(2023, dec!(1_000_000)),
        });
        let err = analyze_company(&i, &MaConfig::default()).unwrap_err();
        assert!(matches!(err, EvaliumError::InsufficientData(_)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = MaConfig {
            score_threshold: 120,
            ..MaConfig::default()
        };
        assert!(analyze_company(&input(Vec::new()), &config).is_err());
    }

    #[test]
    fn test_assumptions_echo_config() {
        let out = analyze_company(&input(Vec::new()), &MaConfig::default()).unwrap();
        assert_eq!(out.assumptions["score_threshold"], serde_json::json!(60));
    }
}
