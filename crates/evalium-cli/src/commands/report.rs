use clap::Args;
use serde_json::Value;

use evalium_core::report::{analyze_company, CompanyReportInput};
use evalium_core::MaConfig;

use crate::input;

/// Arguments for the full company report
#[derive(Args)]
pub struct ReportArgs {
    /// Path to JSON input file ({"company_name", "statements", "competitors"})
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_report(args: ReportArgs, config: &MaConfig) -> Result<Value, Box<dyn std::error::Error>> {
    let report_input: CompanyReportInput = input::read_input(args.input.as_deref(), "report")?;
    let result = analyze_company(&report_input, config)?;
    Ok(serde_json::to_value(result)?)
}
