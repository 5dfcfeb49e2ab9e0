use clap::Args;
use serde_json::Value;

use evalium_core::kpi::definitions::{kpi_definition, kpi_explanation};

/// Arguments for KPI explanations
#[derive(Args)]
pub struct ExplainArgs {
    /// KPI key, e.g. ebitda_margin or ebitdaMargin
    pub key: String,
}

pub fn run_explain(args: ExplainArgs) -> Result<Value, Box<dyn std::error::Error>> {
    match kpi_definition(&args.key) {
        Some(def) => Ok(serde_json::to_value(def)?),
        None => {
            tracing::warn!(key = %args.key, "unknown KPI key");
            Ok(serde_json::json!({
                "key": args.key,
                "explanation": kpi_explanation(&args.key),
            }))
        }
    }
}
