use clap::Args;
use serde_json::Value;

use evalium_core::ma_scoring::calculate_ma_score;
use evalium_core::MaConfig;

/// Arguments for M&A attractiveness scoring
#[derive(Args)]
pub struct MaScoreArgs {
    /// Path to JSON input file (array of statements or {"statements": [...]})
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_ma_score(args: MaScoreArgs, config: &MaConfig) -> Result<Value, Box<dyn std::error::Error>> {
    let statements = super::read_statements(args.input.as_deref(), "ma-score")?;
    let result = calculate_ma_score(&statements, config);
    Ok(serde_json::to_value(result)?)
}
