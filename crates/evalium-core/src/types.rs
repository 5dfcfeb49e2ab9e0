use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// Multiples and ratios (e.g., 0.45x debt/equity)
pub type Multiple = Decimal;

/// Reporting currency of a statement. Serialized as its ISO code; known codes
/// match case-insensitively, anything else is kept as [`Currency::Other`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Currency {
    #[default]
    EUR,
    USD,
    GBP,
    CHF,
    Other(String),
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EUR => write!(f, "EUR"),
            Self::USD => write!(f, "USD"),
            Self::GBP => write!(f, "GBP"),
            Self::CHF => write!(f, "CHF"),
            Self::Other(code) => write!(f, "{}", code),
        }
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        let trimmed = code.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "" | "EUR" => Self::EUR,
            "USD" => Self::USD,
            "GBP" => Self::GBP,
            "CHF" => Self::CHF,
            _ => Self::Other(trimmed.to_string()),
        }
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.to_string()
    }
}

/// One fiscal year of a company's financial statements, as persisted by the
/// surrounding application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialStatement {
    pub fiscal_year: i32,
    pub revenue: Money,
    pub ebitda: Money,
    pub ebitda_margin: Rate,
    pub net_income: Money,
    pub total_assets: Money,
    pub total_liabilities: Money,
    pub equity: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_debt: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_growth: Option<Rate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_profit_margin: Option<Rate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debt_to_equity_ratio: Option<Multiple>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_ratio: Option<Multiple>,
    #[serde(default)]
    pub currency: Currency,
}

/// Sort statements by fiscal year, most recent first. The input order is
/// never trusted.
pub fn sorted_by_year_desc(statements: &[FinancialStatement]) -> Vec<&FinancialStatement> {
    let mut sorted: Vec<&FinancialStatement> = statements.iter().collect();
    sorted.sort_by(|a, b| b.fiscal_year.cmp(&a.fiscal_year));
    sorted
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
