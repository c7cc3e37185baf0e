//! # Lifecycle Constants
//!
//! Mirrors of the ledger's own constants. They must match the deployed
//! contract exactly; a mismatch makes every projection wrong.

use super::errors::ModelError;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Wei per ether.
pub const WEI_PER_ETHER: u64 = 1_000_000_000_000_000_000;

/// `PLANT_PRICE` on the deployed ledger: 0.001 ETH.
pub const DEFAULT_PLANT_PRICE_WEI: u64 = 1_000_000_000_000_000;

/// `HARVEST_REWARD` on the deployed ledger: 0.003 ETH.
pub const DEFAULT_HARVEST_REWARD_WEI: u64 = 3_000_000_000_000_000;

/// `STAGE_DURATION` on the deployed ledger, in seconds.
pub const DEFAULT_STAGE_DURATION_SECS: u64 = 60;

/// `WATER_DEPLETION_TIME` on the deployed ledger, in seconds.
pub const DEFAULT_WATER_DEPLETION_INTERVAL_SECS: u64 = 30;

/// `WATER_DEPLETION_RATE` on the deployed ledger, percent per interval.
pub const DEFAULT_WATER_DEPLETION_RATE_PERCENT: u8 = 2;

/// Water level assigned by a confirmed watering action.
pub const MAX_WATER_LEVEL: u8 = 100;

/// The four lifecycle rules plus the two monetary amounts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleConstants {
    /// Price paid to plant a seed, in wei.
    pub plant_price: U256,
    /// Reward paid on harvest, in wei.
    pub harvest_reward: U256,
    /// Time a stage must persist before it may advance.
    pub stage_duration_secs: u64,
    /// Cadence at which water drains.
    pub water_depletion_interval_secs: u64,
    /// Percent of water lost per full interval.
    pub water_depletion_rate_percent: u8,
}

impl Default for LifecycleConstants {
    fn default() -> Self {
        Self {
            plant_price: U256::from(DEFAULT_PLANT_PRICE_WEI),
            harvest_reward: U256::from(DEFAULT_HARVEST_REWARD_WEI),
            stage_duration_secs: DEFAULT_STAGE_DURATION_SECS,
            water_depletion_interval_secs: DEFAULT_WATER_DEPLETION_INTERVAL_SECS,
            water_depletion_rate_percent: DEFAULT_WATER_DEPLETION_RATE_PERCENT,
        }
    }
}

impl LifecycleConstants {
    /// Reject values the depletion and growth rules cannot divide by or
    /// that would drain more than a full tank per interval.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.water_depletion_interval_secs == 0 {
            return Err(ModelError::InvalidConstant {
                name: "water_depletion_interval_secs",
                reason: "must be greater than zero",
            });
        }
        if self.stage_duration_secs == 0 {
            return Err(ModelError::InvalidConstant {
                name: "stage_duration_secs",
                reason: "must be greater than zero",
            });
        }
        if self.water_depletion_rate_percent > MAX_WATER_LEVEL {
            return Err(ModelError::InvalidConstant {
                name: "water_depletion_rate_percent",
                reason: "must be at most 100",
            });
        }
        Ok(())
    }

    /// Intervals needed to drain a full tank, `None` when the rate is 0.
    pub fn intervals_to_drain(&self, level: u8) -> Option<u64> {
        if self.water_depletion_rate_percent == 0 {
            return None;
        }
        let rate = u64::from(self.water_depletion_rate_percent);
        Some(u64::from(level).div_ceil(rate))
    }
}

/// Render a wei amount as decimal ether, trimming trailing zeros.
pub fn format_ether(wei: U256) -> String {
    let unit = U256::from(WEI_PER_ETHER);
    let whole = wei / unit;
    let frac = wei % unit;
    if frac.is_zero() {
        return whole.to_string();
    }
    let frac = format!("{:0>18}", frac.to_string());
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}
