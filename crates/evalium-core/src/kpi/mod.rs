pub mod cards;
pub mod definitions;
pub mod extraction;
pub mod status;

pub use extraction::{calculate_cagr, calculate_growth_rate, extract_kpis, KpiSet};
pub use status::KpiStatus;
