pub mod benchmark;
pub mod explain;
pub mod kpi;
pub mod ma;
pub mod narrative;
pub mod report;

use evalium_core::FinancialStatement;
use serde::Deserialize;

use crate::input;

/// Statements may arrive as a bare array or wrapped as `{"statements": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum StatementsInput {
    List(Vec<FinancialStatement>),
    Wrapped { statements: Vec<FinancialStatement> },
}

pub fn read_statements(
    path: Option<&str>,
    what: &str,
) -> Result<Vec<FinancialStatement>, Box<dyn std::error::Error>> {
    let statements = match input::read_input::<StatementsInput>(path, what)? {
        StatementsInput::List(s) => s,
        StatementsInput::Wrapped { statements } => statements,
    };
    tracing::debug!(count = statements.len(), "statements loaded");
    Ok(statements)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATEMENT: &str = r#"{
        "fiscal_year": 2023, "revenue": "1000000", "ebitda": "100000",
        "ebitda_margin": "0.1", "net_income": "50000", "total_assets": "800000",
        "total_liabilities": "300000", "equity": "500000"
    }"#;

    #[test]
    fn test_bare_array() {
        let json = format!("[{}]", STATEMENT);
        let parsed: StatementsInput = serde_json::from_str(&json).unwrap();
        assert!(matches!(parsed, StatementsInput::List(ref s) if s.len() == 1));
    }

    #[test]
    fn test_wrapped_object() {
        let json = format!(r#"{{"statements": [{}, {}]}}"#, STATEMENT, STATEMENT);
        let parsed: StatementsInput = serde_json::from_str(&json).unwrap();
        assert!(matches!(parsed, StatementsInput::Wrapped { ref statements } if statements.len() == 2));
    }
}
