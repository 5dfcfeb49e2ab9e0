use clap::Args;
use serde::Serialize;
use serde_json::Value;

use evalium_core::kpi::cards::{kpi_cards, KpiCard};
use evalium_core::kpi::extraction::{calculate_average, StatementField};
use evalium_core::kpi::status::{
    current_ratio_status, debt_to_equity_status, ebitda_margin_status, growth_status,
};
use evalium_core::kpi::{calculate_cagr, extract_kpis, KpiSet, KpiStatus};
use evalium_core::{sorted_by_year_desc, Rate};
use rust_decimal::Decimal;

/// Arguments for KPI extraction
#[derive(Args)]
pub struct KpiArgs {
    /// Path to JSON input file (array of statements or {"statements": [...]})
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Serialize)]
struct KpiStatuses {
    ebitda_margin: KpiStatus,
    growth: KpiStatus,
    debt_to_equity: KpiStatus,
    current_ratio: KpiStatus,
}

#[derive(Serialize)]
struct KpiOutput {
    latest: KpiSet,
    previous: Option<KpiSet>,
    statuses: KpiStatuses,
    cards: Vec<KpiCard>,
    average_revenue: Decimal,
    average_ebitda_margin: Decimal,
    /// Revenue CAGR from the oldest to the latest statement
    revenue_cagr: Option<Rate>,
}

pub fn run_kpi(args: KpiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let statements = super::read_statements(args.input.as_deref(), "kpi")?;
    let sorted = sorted_by_year_desc(&statements);
    let (Some(latest_statement), Some(oldest_statement)) = (sorted.first(), sorted.last()) else {
        return Err("at least one financial statement is required for kpi".into());
    };

    let latest = extract_kpis(latest_statement);
    let previous = sorted.get(1).map(|s| extract_kpis(s));
    let cards = kpi_cards(&latest, previous.as_ref());
    // the cards already resolve growth against the previous year
    let growth = cards.first().and_then(|c| c.change);

    let years = latest_statement.fiscal_year - oldest_statement.fiscal_year;
    let revenue_cagr = (years > 0).then(|| {
        calculate_cagr(
            oldest_statement.revenue,
            latest_statement.revenue,
            Decimal::from(years),
        )
    });

    let output = KpiOutput {
        statuses: KpiStatuses {
            ebitda_margin: ebitda_margin_status(latest.ebitda_margin),
            growth: growth_status(growth),
            debt_to_equity: debt_to_equity_status(latest.debt_to_equity_ratio),
            current_ratio: current_ratio_status(latest.current_ratio),
        },
        cards,
        average_revenue: calculate_average(&statements, StatementField::Revenue),
        average_ebitda_margin: calculate_average(&statements, StatementField::EbitdaMargin),
        revenue_cagr,
        latest,
        previous,
    };
    Ok(serde_json::json!({ "result": output }))
}
