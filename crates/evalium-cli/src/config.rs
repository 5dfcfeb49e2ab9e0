//! M&A threshold configuration: defaults, then an optional YAML file, then
//! `MA_*` environment variables.

use std::fs;
use std::str::FromStr;

use evalium_core::MaConfig;

use crate::input;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

pub const ENV_REVENUE_THRESHOLD: &str = "MA_REVENUE_THRESHOLD";
pub const ENV_EBITDA_MARGIN_THRESHOLD: &str = "MA_EBITDA_MARGIN_THRESHOLD";
pub const ENV_EBITDA_THRESHOLD: &str = "MA_EBITDA_THRESHOLD";
pub const ENV_GROWTH_THRESHOLD: &str = "MA_GROWTH_THRESHOLD";
pub const ENV_SCORE_THRESHOLD: &str = "MA_SCORE_THRESHOLD";

pub fn load_config(path: Option<&str>) -> CliResult<MaConfig> {
    let base = match path {
        Some(p) => read_yaml(p)?,
        None => MaConfig::default(),
    };
    let config = apply_overrides(base, |key| std::env::var(key).ok())?;
    config.validate()?;
    tracing::debug!(?config, "M&A configuration loaded");
    Ok(config)
}

fn read_yaml(path: &str) -> CliResult<MaConfig> {
    let canonical = input::file::resolve_path(path)?;
    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;
    let config: MaConfig = serde_yaml::from_str(&contents)
        .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?;
    Ok(config)
}

fn parse_var<T: FromStr>(key: &str, raw: &str) -> CliResult<T>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| format!("Invalid value for {}: '{}' ({})", key, raw, e).into())
}

/// Overlay variables found by `lookup` onto `config`. An unparseable value is
/// an error rather than a silent fallback.
pub fn apply_overrides<F>(mut config: MaConfig, lookup: F) -> CliResult<MaConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(ENV_REVENUE_THRESHOLD) {
        config.revenue_threshold = parse_var(ENV_REVENUE_THRESHOLD, &raw)?;
    }
    if let Some(raw) = lookup(ENV_EBITDA_MARGIN_THRESHOLD) {
        config.ebitda_margin_threshold = parse_var(ENV_EBITDA_MARGIN_THRESHOLD, &raw)?;
    }
    if let Some(raw) = lookup(ENV_EBITDA_THRESHOLD) {
        config.ebitda_threshold = parse_var(ENV_EBITDA_THRESHOLD, &raw)?;
    }
    if let Some(raw) = lookup(ENV_GROWTH_THRESHOLD) {
        config.growth_threshold = parse_var(ENV_GROWTH_THRESHOLD, &raw)?;
    }
    if let Some(raw) = lookup(ENV_SCORE_THRESHOLD) {
        config.score_threshold = parse_var(ENV_SCORE_THRESHOLD, &raw)?;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_no_overrides_keeps_defaults() {
        let config = apply_overrides(MaConfig::default(), lookup(&[])).unwrap();
        assert_eq!(config, MaConfig::default());
    }

    #[test]
    fn test_overrides_replace_fields() {
        let config = apply_overrides(
            MaConfig::default(),
            lookup(&[
                (ENV_REVENUE_THRESHOLD, "1500000"),
                (ENV_SCORE_THRESHOLD, " 70 "),
            ]),
        )
        .unwrap();
        assert_eq!(config.revenue_threshold, dec!(1_500_000));
        assert_eq!(config.score_threshold, 70);
        assert_eq!(config.ebitda_threshold, dec!(200_000));
    }

    #[test]
    fn test_bad_value_is_an_error() {
        let err = apply_overrides(
            MaConfig::default(),
            lookup(&[(ENV_GROWTH_THRESHOLD, "five percent")]),
        )
        .unwrap_err();
        assert!(err.to_string().contains(ENV_GROWTH_THRESHOLD));
    }

    #[test]
    fn test_yaml_partial_file_uses_defaults() {
        let config: MaConfig = serde_yaml::from_str("score_threshold: 50\n").unwrap();
        assert_eq!(config.score_threshold, 50);
        assert_eq!(config.revenue_threshold, dec!(2_000_000));
    }
}
