//! Deployment configuration from environment variables.
//!
//! Every value that can differ between deployments is listed in
//! [`ConfigOption`]; nothing else reads the environment.

use crate::domain::{AccountAddress, LifecycleConstants, ModelError, StageTiming};
use primitive_types::U256;
use std::env;
use std::str::FromStr;

/// Deployment-configurable values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigOption {
    /// LiskGarden contract address. Unset runs the client disabled.
    ContractAddress,
    /// `PLANT_PRICE` in wei.
    PlantPrice,
    /// `HARVEST_REWARD` in wei.
    HarvestReward,
    /// `STAGE_DURATION` in seconds.
    StageDuration,
    /// `WATER_DEPLETION_TIME` in seconds.
    WaterDepletionInterval,
    /// `WATER_DEPLETION_RATE` in percent per interval.
    WaterDepletionRate,
    /// Stage-advance clock.
    StageTiming,
}

impl ConfigOption {
    /// Every option, in the order they are read.
    pub const ALL: [ConfigOption; 7] = [
        ConfigOption::ContractAddress,
        ConfigOption::PlantPrice,
        ConfigOption::HarvestReward,
        ConfigOption::StageDuration,
        ConfigOption::WaterDepletionInterval,
        ConfigOption::WaterDepletionRate,
        ConfigOption::StageTiming,
    ];

    /// Environment variable that carries this option.
    pub fn env_key(self) -> &'static str {
        match self {
            Self::ContractAddress => "LG_CONTRACT_ADDRESS",
            Self::PlantPrice => "LG_PLANT_PRICE_WEI",
            Self::HarvestReward => "LG_HARVEST_REWARD_WEI",
            Self::StageDuration => "LG_STAGE_DURATION_SECS",
            Self::WaterDepletionInterval => "LG_WATER_DEPLETION_INTERVAL_SECS",
            Self::WaterDepletionRate => "LG_WATER_DEPLETION_RATE",
            Self::StageTiming => "LG_STAGE_TIMING",
        }
    }
}

/// Process-wide deployment configuration, loaded once at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeploymentConfig {
    /// Contract address; `None` means degraded mode.
    pub contract_address: Option<AccountAddress>,
    /// Ledger lifecycle constants.
    pub constants: LifecycleConstants,
    /// Stage-advance clock.
    pub stage_timing: StageTiming,
}

impl DeploymentConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `LG_CONTRACT_ADDRESS`: contract address (default: unset, disabled)
    /// - `LG_PLANT_PRICE_WEI`: plant price in wei (default: 0.001 ETH)
    /// - `LG_HARVEST_REWARD_WEI`: harvest reward in wei (default: 0.003 ETH)
    /// - `LG_STAGE_DURATION_SECS`: stage duration (default: 60)
    /// - `LG_WATER_DEPLETION_INTERVAL_SECS`: depletion interval (default: 30)
    /// - `LG_WATER_DEPLETION_RATE`: percent per interval (default: 2)
    /// - `LG_STAGE_TIMING`: `cumulative` or `per_stage` (default: cumulative)
    pub fn from_env() -> Result<Self, ModelError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ModelError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |option: ConfigOption| {
            lookup(option.env_key())
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = LifecycleConstants::default();

        let contract_address = read(ConfigOption::ContractAddress)
            .map(|v| parse_option(ConfigOption::ContractAddress, &v))
            .transpose()?;

        let constants = LifecycleConstants {
            plant_price: read(ConfigOption::PlantPrice)
                .map(|v| parse_wei(ConfigOption::PlantPrice, &v))
                .transpose()?
                .unwrap_or(defaults.plant_price),
            harvest_reward: read(ConfigOption::HarvestReward)
                .map(|v| parse_wei(ConfigOption::HarvestReward, &v))
                .transpose()?
                .unwrap_or(defaults.harvest_reward),
            stage_duration_secs: read(ConfigOption::StageDuration)
                .map(|v| parse_option(ConfigOption::StageDuration, &v))
                .transpose()?
                .unwrap_or(defaults.stage_duration_secs),
            water_depletion_interval_secs: read(ConfigOption::WaterDepletionInterval)
                .map(|v| parse_option(ConfigOption::WaterDepletionInterval, &v))
                .transpose()?
                .unwrap_or(defaults.water_depletion_interval_secs),
            water_depletion_rate_percent: read(ConfigOption::WaterDepletionRate)
                .map(|v| parse_option(ConfigOption::WaterDepletionRate, &v))
                .transpose()?
                .unwrap_or(defaults.water_depletion_rate_percent),
        };
        constants.validate()?;

        let stage_timing = read(ConfigOption::StageTiming)
            .map(|v| v.parse::<StageTiming>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            contract_address,
            constants,
            stage_timing,
        })
    }

    /// Whether a contract is configured. When false the client runs
    /// disabled instead of failing.
    pub fn is_enabled(&self) -> bool {
        self.contract_address.is_some()
    }
}

fn parse_option<T>(option: ConfigOption, value: &str) -> Result<T, ModelError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|e| ModelError::InvalidConfig {
        key: option.env_key(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_wei(option: ConfigOption, value: &str) -> Result<U256, ModelError> {
    U256::from_dec_str(value).map_err(|e| ModelError::InvalidConfig {
        key: option.env_key(),
        value: value.to_string(),
        reason: format!("{:?}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = DeploymentConfig::from_lookup(lookup(&[])).unwrap();
        assert!(!config.is_enabled());
        assert_eq!(config.constants, LifecycleConstants::default());
        assert_eq!(config.stage_timing, StageTiming::Cumulative);
    }

    #[test]
    fn test_empty_address_is_degraded_mode() {
        let config =
            DeploymentConfig::from_lookup(lookup(&[("LG_CONTRACT_ADDRESS", "  ")])).unwrap();
        assert!(!config.is_enabled());
    }

    #[test]
    fn test_full_override() {
        let config = DeploymentConfig::from_lookup(lookup(&[
            (
                "LG_CONTRACT_ADDRESS",
                "0x00000000000000000000000000000000000000aa",
            ),
            ("LG_PLANT_PRICE_WEI", "5"),
            ("LG_HARVEST_REWARD_WEI", "15"),
            ("LG_STAGE_DURATION_SECS", "120"),
            ("LG_WATER_DEPLETION_INTERVAL_SECS", "10"),
            ("LG_WATER_DEPLETION_RATE", "5"),
            ("LG_STAGE_TIMING", "per_stage"),
        ]))
        .unwrap();
        assert!(config.is_enabled());
        assert_eq!(config.constants.plant_price, U256::from(5u64));
        assert_eq!(config.constants.harvest_reward, U256::from(15u64));
        assert_eq!(config.constants.stage_duration_secs, 120);
        assert_eq!(config.constants.water_depletion_interval_secs, 10);
        assert_eq!(config.constants.water_depletion_rate_percent, 5);
        assert_eq!(config.stage_timing, StageTiming::PerStage);
    }

    #[test]
    fn test_malformed_value_names_the_key() {
        let err = DeploymentConfig::from_lookup(lookup(&[("LG_STAGE_DURATION_SECS", "soon")]))
            .unwrap_err();
        match err {
            ModelError::InvalidConfig { key, value, .. } => {
                assert_eq!(key, "LG_STAGE_DURATION_SECS");
                assert_eq!(value, "soon");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bad_address_is_an_error_not_degraded_mode() {
        let result = DeploymentConfig::from_lookup(lookup(&[("LG_CONTRACT_ADDRESS", "0x12")]));
        assert!(matches!(
            result,
            Err(ModelError::InvalidConfig {
                key: "LG_CONTRACT_ADDRESS",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = DeploymentConfig::from_lookup(lookup(&[(
            "LG_WATER_DEPLETION_INTERVAL_SECS",
            "0",
        )]));
        assert!(matches!(result, Err(ModelError::InvalidConstant { .. })));
    }

    #[test]
    fn test_every_option_has_a_distinct_key() {
        let mut keys: Vec<_> = ConfigOption::ALL.iter().map(|o| o.env_key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ConfigOption::ALL.len());
        assert!(keys.iter().all(|k| k.starts_with("LG_")));
    }
}
