use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Deserialize;

use evalium_core::benchmark::CompetitorStatement;
use evalium_core::report::CompanyReportInput;
use evalium_core::{FinancialStatement, MaConfig};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Absent or empty config JSON means the default thresholds.
fn parse_config(config_json: Option<String>) -> NapiResult<MaConfig> {
    let config = match config_json.as_deref().map(str::trim) {
        None | Some("") => MaConfig::default(),
        Some(json) => serde_json::from_str(json).map_err(to_napi_error)?,
    };
    config.validate().map_err(to_napi_error)?;
    Ok(config)
}

// ---------------------------------------------------------------------------
// KPI
// ---------------------------------------------------------------------------

#[napi]
pub fn extract_kpis(statement_json: String) -> NapiResult<String> {
    let statement: FinancialStatement =
        serde_json::from_str(&statement_json).map_err(to_napi_error)?;
    let kpis = evalium_core::kpi::extract_kpis(&statement);
    serde_json::to_string(&kpis).map_err(to_napi_error)
}

#[napi]
pub fn kpi_explanation(key: String) -> String {
    evalium_core::kpi::definitions::kpi_explanation(&key).to_string()
}

// ---------------------------------------------------------------------------
// Narrative
// ---------------------------------------------------------------------------

#[napi]
pub fn generate_narrative(statements_json: String) -> NapiResult<String> {
    let statements: Vec<FinancialStatement> =
        serde_json::from_str(&statements_json).map_err(to_napi_error)?;
    let narrative = evalium_core::narrative::generate_narrative(&statements);
    serde_json::to_string(&narrative).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Benchmark
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct BenchmarkInput {
    company: FinancialStatement,
    competitors: Vec<CompetitorStatement>,
}

#[napi]
pub fn create_benchmark(input_json: String) -> NapiResult<String> {
    let input: BenchmarkInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let result = evalium_core::benchmark::create_benchmark(&input.company, &input.competitors)
        .map_err(to_napi_error)?;
    serde_json::to_string(&result).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// M&A scoring and full report
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_ma_score(statements_json: String, config_json: Option<String>) -> NapiResult<String> {
    let statements: Vec<FinancialStatement> =
        serde_json::from_str(&statements_json).map_err(to_napi_error)?;
    let config = parse_config(config_json)?;
    let result = evalium_core::ma_scoring::calculate_ma_score(&statements, &config);
    serde_json::to_string(&result).map_err(to_napi_error)
}

#[napi]
pub fn analyze_company(input_json: String, config_json: Option<String>) -> NapiResult<String> {
    let input: CompanyReportInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let config = parse_config(config_json)?;
    let output = evalium_core::report::analyze_company(&input, &config).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
