use clap::Args;
use serde::Deserialize;
use serde_json::Value;

use evalium_core::benchmark::{benchmark_chart_data, create_benchmark, CompetitorStatement};
use evalium_core::FinancialStatement;

use crate::input;

/// Arguments for competitor benchmarking
#[derive(Args)]
pub struct BenchmarkArgs {
    /// Path to JSON input file ({"company": {...}, "competitors": [...]})
    #[arg(long)]
    pub input: Option<String>,

    /// Also emit the chart series
    #[arg(long)]
    pub chart: bool,
}

#[derive(Deserialize)]
struct BenchmarkInput {
    company: FinancialStatement,
    competitors: Vec<CompetitorStatement>,
}

pub fn run_benchmark(args: BenchmarkArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let bench_input: BenchmarkInput = input::read_input(args.input.as_deref(), "benchmark")?;
    let result = create_benchmark(&bench_input.company, &bench_input.competitors)?;
    if args.chart {
        let chart = benchmark_chart_data(&result);
        return Ok(serde_json::json!({ "result": result, "chart": chart }));
    }
    Ok(serde_json::to_value(result)?)
}
