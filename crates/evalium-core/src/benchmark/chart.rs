//! Series for the benchmark bar charts.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::comparison::BenchmarkMetric;
use super::BenchmarkResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub company: Decimal,
    pub competitors: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkChartData {
    pub revenue: ChartSeries,
    pub ebitda: ChartSeries,
    /// Expressed in percent (0.15 -> 15)
    pub ebitda_margin: ChartSeries,
}

fn series(result: &BenchmarkResult, metric: BenchmarkMetric, scale: Decimal) -> ChartSeries {
    ChartSeries {
        company: metric.value(&result.company_kpis).saturating_mul(scale),
        competitors: result
            .competitors
            .iter()
            .map(|c| ChartPoint {
                name: c.name.clone(),
                value: metric.value(&c.kpis).saturating_mul(scale),
            })
            .collect(),
    }
}

pub fn benchmark_chart_data(result: &BenchmarkResult) -> BenchmarkChartData {
    BenchmarkChartData {
        revenue: series(result, BenchmarkMetric::Revenue, Decimal::ONE),
        ebitda: series(result, BenchmarkMetric::Ebitda, Decimal::ONE),
        ebitda_margin: series(result, BenchmarkMetric::EbitdaMargin, dec!(100)),
    }
}
