//! Process configuration loaded from environment variables.
//!
//! Every setting has a default, so an empty environment is a valid setup.

use std::time::Duration;

use thiserror::Error;

use crate::store::StoreOptions;

pub const LOG_LEVELS: [&str; 4] = ["debug", "info", "warn", "error"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid LOG_LEVEL: {0}, must be one of: debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("invalid {key}: {value} (expected a positive integer)")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusterConfig {
    /// Env: `LOG_LEVEL`. Default: `info`. Stored lowercased.
    pub log_level: String,

    /// Lifetime of a recruitment created without an explicit expiry.
    /// Env: `RECRUITMENT_TTL_HOURS`. Default: 24.
    pub recruitment_ttl: Duration,

    /// Env: `SWEEP_INTERVAL_SECS`. Default: 60.
    pub sweep_interval: Duration,
}

impl Default for MusterConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            recruitment_ttl: Duration::from_secs(24 * 60 * 60),
            sweep_interval: Duration::from_secs(60),
        }
    }
}

impl MusterConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    /// Unset and empty values fall back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(level) = get("LOG_LEVEL") {
            let normalized = level.trim().to_ascii_lowercase();
            if !LOG_LEVELS.contains(&normalized.as_str()) {
                return Err(ConfigError::InvalidLogLevel(level));
            }
            config.log_level = normalized;
        }

        if let Some(hours) = get("RECRUITMENT_TTL_HOURS") {
            let hours = parse_positive("RECRUITMENT_TTL_HOURS", &hours)?;
            config.recruitment_ttl = Duration::from_secs(hours.saturating_mul(60 * 60));
        }

        if let Some(secs) = get("SWEEP_INTERVAL_SECS") {
            config.sweep_interval =
                Duration::from_secs(parse_positive("SWEEP_INTERVAL_SECS", &secs)?);
        }

        Ok(config)
    }

    pub fn store_options(&self) -> StoreOptions {
        let default_ttl = chrono::Duration::from_std(self.recruitment_ttl)
            .unwrap_or_else(|_| StoreOptions::default().default_ttl);
        StoreOptions { default_ttl }
    }
}

fn parse_positive(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<MusterConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        MusterConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, MusterConfig::default());
        assert_eq!(config.store_options(), StoreOptions::default());
    }

    #[rstest]
    #[case::lower("debug", "debug")]
    #[case::upper("WARN", "warn")]
    #[case::padded(" error ", "error")]
    fn accepts_log_levels(#[case] raw: &str, #[case] expected: &str) {
        let config = load(&[("LOG_LEVEL", raw)]).unwrap();
        assert_eq!(config.log_level, expected);
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = load(&[("LOG_LEVEL", "verbose")]).unwrap_err();
        assert_eq!(err, ConfigError::InvalidLogLevel("verbose".into()));
    }

    #[rstest]
    #[case::zero("0")]
    #[case::negative("-1")]
    #[case::word("soon")]
    fn rejects_bad_numbers(#[case] raw: &str) {
        assert!(matches!(
            load(&[("SWEEP_INTERVAL_SECS", raw)]),
            Err(ConfigError::InvalidNumber { key: "SWEEP_INTERVAL_SECS", .. })
        ));
        assert!(matches!(
            load(&[("RECRUITMENT_TTL_HOURS", raw)]),
            Err(ConfigError::InvalidNumber { key: "RECRUITMENT_TTL_HOURS", .. })
        ));
    }

    #[test]
    fn ttl_flows_into_store_options() {
        let config = load(&[("RECRUITMENT_TTL_HOURS", "6"), ("SWEEP_INTERVAL_SECS", "15")]).unwrap();
        assert_eq!(config.sweep_interval, Duration::from_secs(15));
        assert_eq!(config.store_options().default_ttl, chrono::Duration::hours(6));
    }
}
