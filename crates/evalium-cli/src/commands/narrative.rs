use clap::Args;
use serde_json::Value;

use evalium_core::narrative::generate_narrative;

/// Arguments for narrative generation
#[derive(Args)]
pub struct NarrativeArgs {
    /// Path to JSON input file (array of statements or {"statements": [...]})
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_narrative(args: NarrativeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let statements = super::read_statements(args.input.as_deref(), "narrative")?;
    let narrative = generate_narrative(&statements);
    Ok(serde_json::to_value(narrative)?)
}
