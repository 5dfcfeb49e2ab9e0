//! Thresholds that gate M&A eligibility.
//!
//! The core never reads the environment: callers build an [`MaConfig`]
//! (the CLI layers a YAML file and `MA_*` variables over the defaults) and
//! pass it into the scorer and the report.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::EvaliumError;
use crate::types::{Money, Rate};
use crate::EvaliumResult;

pub const DEFAULT_REVENUE_THRESHOLD: Money = dec!(2_000_000);
pub const DEFAULT_EBITDA_MARGIN_THRESHOLD: Rate = dec!(0.10);
pub const DEFAULT_EBITDA_THRESHOLD: Money = dec!(200_000);
pub const DEFAULT_GROWTH_THRESHOLD: Rate = dec!(0.05);
pub const DEFAULT_SCORE_THRESHOLD: u32 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaConfig {
    /// Minimum revenue (EUR) for the revenue path to eligibility
    pub revenue_threshold: Money,
    /// Minimum EBITDA margin for the EBITDA path to eligibility
    pub ebitda_margin_threshold: Rate,
    /// Minimum absolute EBITDA (EUR) for the EBITDA path to eligibility
    pub ebitda_threshold: Money,
    /// Year-over-year revenue growth considered attractive
    pub growth_threshold: Rate,
    /// Minimum score (0-100) for eligibility
    pub score_threshold: u32,
}

impl Default for MaConfig {
    fn default() -> Self {
        Self {
            revenue_threshold: DEFAULT_REVENUE_THRESHOLD,
            ebitda_margin_threshold: DEFAULT_EBITDA_MARGIN_THRESHOLD,
            ebitda_threshold: DEFAULT_EBITDA_THRESHOLD,
            growth_threshold: DEFAULT_GROWTH_THRESHOLD,
            score_threshold: DEFAULT_SCORE_THRESHOLD,
        }
    }
}

impl MaConfig {
    pub fn validate(&self) -> EvaliumResult<()> {
        if self.revenue_threshold < Decimal::ZERO {
            return Err(EvaliumError::InvalidInput {
                field: "revenue_threshold".into(),
                reason: "Revenue threshold cannot be negative.".into(),
            });
        }
        if self.ebitda_threshold < Decimal::ZERO {
            return Err(EvaliumError::InvalidInput {
                field: "ebitda_threshold".into(),
                reason: "EBITDA threshold cannot be negative.".into(),
            });
        }
        if self.ebitda_margin_threshold < Decimal::ZERO || self.ebitda_margin_threshold > Decimal::ONE
        {
            return Err(EvaliumError::InvalidInput {
                field: "ebitda_margin_threshold".into(),
                reason: "EBITDA margin threshold must be between 0 and 1.".into(),
            });
        }
        if self.growth_threshold < Decimal::ZERO || self.growth_threshold > Decimal::ONE {
            return Err(EvaliumError::InvalidInput {
                field: "growth_threshold".into(),
                reason: "Growth threshold must be between 0 and 1.".into(),
            });
        }
        if self.score_threshold > 100 {
            return Err(EvaliumError::InvalidInput {
                field: "score_threshold".into(),
                reason: "Score threshold must be between 0 and 100.".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = MaConfig::default();
        assert_eq!(cfg.revenue_threshold, dec!(2000000));
        assert_eq!(cfg.ebitda_margin_threshold, dec!(0.10));
        assert_eq!(cfg.ebitda_threshold, dec!(200000));
        assert_eq!(cfg.growth_threshold, dec!(0.05));
        assert_eq!(cfg.score_threshold, 60);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_negative_revenue_threshold_rejected() {
        let cfg = MaConfig {
            revenue_threshold: dec!(-1),
            ..MaConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("revenue_threshold"));
    }

    #[test]
    fn test_negative_growth_threshold_rejected() {
        let cfg = MaConfig {
            growth_threshold: dec!(-0.05),
            ..MaConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("growth_threshold"));

        let zero = MaConfig {
            growth_threshold: Decimal::ZERO,
            ..MaConfig::default()
        };
        assert!(zero.validate().is_ok());
    }

    #[test]
    fn test_margin_above_one_rejected() {
        let cfg = MaConfig {
            ebitda_margin_threshold: dec!(1.5),
            ..MaConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_score_above_100_rejected() {
        let cfg = MaConfig {
            score_threshold: 101,
            ..MaConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let cfg: MaConfig = serde_json::from_str(r#"{"score_threshold": 70}"#).unwrap();
        assert_eq!(cfg.score_threshold, 70);
        assert_eq!(cfg.revenue_threshold, DEFAULT_REVENUE_THRESHOLD);
    }
}
