//! Shell configuration

use rust_decimal::Decimal;
use serde::Deserialize;

use core_kernel::{CoreError, Rate};
use domain_account::InterestPolicy;
use crate::error::CliError;

/// Prefix of every environment variable read by [`CliConfig::from_env`]
pub const ENV_PREFIX: &str = "BANK";

/// Shell configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CliConfig {
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// Monthly interest rate for savings accounts, as a fraction
    pub interest_rate: Decimal,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_json: false,
            interest_rate: InterestPolicy::default().rate().as_decimal(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from `BANK_*` environment variables, falling
    /// back to the defaults for anything unset
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_source(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration from an arbitrary source layered over the defaults
    pub fn from_source<S>(source: S) -> Result<Self, CliError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = Self::default();
        let loaded: CliConfig = config::Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("log_json", defaults.log_json)?
            .set_default("interest_rate", defaults.interest_rate.to_string())?
            .add_source(source)
            .build()?
            .try_deserialize()?;

        loaded.interest_policy()?;
        Ok(loaded)
    }

    /// Builds the interest policy from the configured rate
    ///
    /// # Errors
    ///
    /// `CoreError::Configuration` unless the rate lies within 0..=1
    pub fn interest_policy(&self) -> Result<InterestPolicy, CoreError> {
        if self.interest_rate < Decimal::ZERO || self.interest_rate > Decimal::ONE {
            return Err(CoreError::configuration(format!(
                "interest_rate must be between 0 and 1, got {}",
                self.interest_rate
            )));
        }
        Ok(InterestPolicy::new(Rate::new(self.interest_rate)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_source(env(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.interest_rate, dec!(0.04));
    }

    #[test]
    fn test_environment_overrides() {
        let config = CliConfig::from_source(env(&[
            ("BANK_LOG_LEVEL", "debug"),
            ("BANK_LOG_JSON", "true"),
            ("BANK_INTEREST_RATE", "0.015"),
        ]))
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert!(config.log_json);
        assert_eq!(config.interest_rate, dec!(0.015));
    }

    #[test]
    fn test_out_of_range_rate_is_rejected() {
        let result = CliConfig::from_source(env(&[("BANK_INTEREST_RATE", "1.5")]));
        assert!(matches!(result, Err(CliError::Core(CoreError::Configuration(_)))));
    }
}
