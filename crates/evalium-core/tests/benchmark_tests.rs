use evalium_core::benchmark::{
    benchmark_chart_data, create_benchmark, BenchmarkMetric, BenchmarkPosition,
    CompetitorStatement, OverallPosition,
};
use evalium_core::{Currency, EvaliumError, FinancialStatement};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Fixtures
// ===========================================================================

fn statement(revenue: Decimal, ebitda: Decimal, margin: Decimal, net_income: Decimal, equity: Decimal) -> FinancialStatement {
    FinancialStatement {
        fiscal_year: 2023,
        revenue,
        ebitda,
        ebitda_margin: margin,
        net_income,
        total_assets: dec!(3_000_000),
        total_liabilities: dec!(1_000_000),
        equity,
        net_debt: None,
        revenue_growth: None,
        net_profit_margin: None,
        debt_to_equity_ratio: None,
        current_ratio: None,
        currency: Currency::EUR,
    }
}

fn base() -> FinancialStatement {
    statement(dec!(1_000_000), dec!(100_000), dec!(0.02), dec!(40_000), dec!(500_000))
}

fn scaled(factor: Decimal) -> FinancialStatement {
    statement(
        dec!(1_000_000) * factor,
        dec!(100_000) * factor,
        dec!(0.02) * factor,
        dec!(40_000) * factor,
        dec!(500_000) * factor,
    )
}

fn competitors(n: usize) -> Vec<CompetitorStatement> {
    (0..n)
        .map(|i| CompetitorStatement {
            name: format!("Competitor {}", i + 1),
            vat_number: None,
            statement: base(),
        })
        .collect()
}

// ===========================================================================
// Benchmark
// ===========================================================================

#[test]
fn test_leader_when_five_times_competitors() {
    let r = create_benchmark(&scaled(dec!(5)), &competitors(2)).unwrap();
    assert_eq!(r.summary.overall_position, OverallPosition::Leader);
    assert!(r
        .comparisons
        .iter()
        .all(|c| c.position == BenchmarkPosition::Above));
    // top of three values
    assert!(r.comparisons.iter().all(|c| c.percentile == 67));
    assert_eq!(r.summary.strengths.len(), 5);
    assert_eq!(
        r.summary.recommendations,
        vec!["Mantieni il vantaggio competitivo investendo in innovazione"]
    );
}

#[test]
fn test_lagging_when_a_fifth_of_competitors() {
    let r = create_benchmark(&scaled(dec!(0.2)), &competitors(3)).unwrap();
    assert_eq!(r.summary.overall_position, OverallPosition::Lagging);
    assert_eq!(r.summary.weaknesses.len(), 5);
    assert_eq!(r.summary.recommendations.len(), 4);
    assert!(r.comparisons.iter().all(|c| c.percentile == 0));
}

#[test]
fn test_competitor_average_is_arithmetic_mean() {
    let mut comps = competitors(2);
    comps[1].statement.revenue = dec!(3_000_000);
    let r = create_benchmark(&base(), &comps).unwrap();
    let revenue = &r.comparisons[0];
    assert_eq!(revenue.metric, BenchmarkMetric::Revenue);
    assert_eq!(revenue.competitor_average, dec!(2_000_000));
    assert_eq!(revenue.position, BenchmarkPosition::Below);
    assert!(revenue.narrative.contains("inferiore alla media dei competitor"));
}

#[test]
fn test_extreme_ratio_vs_competitor_does_not_overflow() {
    let mut company = base();
    company.revenue = dec!(10_000_000_000_000_000_000_000);
    let mut comps = competitors(1);
    comps[0].statement.revenue = dec!(0.0000001);

    let r = create_benchmark(&company, &comps).unwrap();
    let revenue = &r.comparisons[0];
    assert_eq!(revenue.metric, BenchmarkMetric::Revenue);
    assert_eq!(revenue.competitor_average, dec!(0.0000001));
    assert_eq!(revenue.position, BenchmarkPosition::Above);
    assert_eq!(revenue.percentile, 50);
    assert!(revenue.narrative.contains("superiore alla media dei competitor"));
}

#[test]
fn test_competitor_average_survives_sum_overflow() {
    let mut comps = competitors(2);
    comps[0].statement.equity = Decimal::MAX;
    comps[1].statement.equity = Decimal::MAX;
    let r = create_benchmark(&base(), &comps).unwrap();
    let equity = r
        .comparisons
        .iter()
        .find(|c| c.metric == BenchmarkMetric::Equity)
        .unwrap();
    assert!(equity.competitor_average >= Decimal::MAX - dec!(1));
    assert_eq!(equity.position, BenchmarkPosition::Below);
}

#[test]
fn test_competitor_kpis_are_carried() {
    let mut comps = competitors(1);
    comps[0].vat_number = Some("IT09876543210".into());
    let r = create_benchmark(&base(), &comps).unwrap();
    assert_eq!(r.competitors[0].name, "Competitor 1");
    assert_eq!(r.competitors[0].vat_number.as_deref(), Some("IT09876543210"));
    assert_eq!(r.competitors[0].kpis.revenue, dec!(1_000_000));
}

#[test]
fn test_empty_competitors_rejected() {
    let err = create_benchmark(&base(), &[]).unwrap_err();
    assert!(matches!(err, EvaliumError::InsufficientData(_)));
}

#[test]
fn test_chart_series_per_competitor() {
    let r = create_benchmark(&scaled(dec!(2)), &competitors(3)).unwrap();
    let chart = benchmark_chart_data(&r);
    assert_eq!(chart.revenue.competitors.len(), 3);
    assert_eq!(chart.ebitda.company, dec!(200_000));
    assert_eq!(chart.ebitda_margin.company, dec!(4));
    assert_eq!(chart.ebitda_margin.competitors[2].value, dec!(2));
}

#[test]
fn test_benchmark_serializes_snake_case() {
    let r = create_benchmark(&base(), &competitors(1)).unwrap();
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["comparisons"][2]["metric"], "ebitda_margin");
    assert_eq!(json["summary"]["overall_position"], "average");
    assert_eq!(json["comparisons"][0]["position"], "average");
}
