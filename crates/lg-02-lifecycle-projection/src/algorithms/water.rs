//! # Water Depletion
//!
//! Staircase depletion, bit-for-bit with the ledger's `calculateWaterLevel`:
//! `level - (elapsed / interval) * rate`, floored at zero. Partial
//! intervals drain nothing.

use crate::domain::{invariant_valid_query, ProjectionConfig, ProjectionError};
use lg_01_contract_model::{Plant, MAX_WATER_LEVEL};
use std::time::Duration;

/// Projected water level at `now`, in [0, 100].
///
/// Dead plants always report 0.
pub fn project_water_level(
    config: &ProjectionConfig,
    plant: &Plant,
    now: u64,
) -> Result<u8, ProjectionError> {
    invariant_valid_query(plant, now)?;
    Ok(water_at(config, plant, now))
}

/// Time until the next full depletion interval since `lastWatered`
/// completes. Zero once dead or dry.
pub fn time_to_next_water_drop(
    config: &ProjectionConfig,
    plant: &Plant,
    now: u64,
) -> Result<Duration, ProjectionError> {
    invariant_valid_query(plant, now)?;
    if water_at(config, plant, now) == 0 {
        return Ok(Duration::ZERO);
    }
    let interval = config.interval_secs();
    let into_interval = (now - plant.last_watered) % interval;
    Ok(Duration::from_secs(interval - into_interval))
}

/// Time until projected water first reaches 0.
///
/// Zero when already dry or dead; `None` when the depletion rate is zero
/// and the tank never drains.
pub fn time_until_dry(
    config: &ProjectionConfig,
    plant: &Plant,
    now: u64,
) -> Result<Option<Duration>, ProjectionError> {
    invariant_valid_query(plant, now)?;
    if water_at(config, plant, now) == 0 {
        return Ok(Some(Duration::ZERO));
    }
    Ok(dry_at(config, plant).map(|at| Duration::from_secs(at.saturating_sub(now))))
}

/// Water level without precondition checks. Callers validate first.
pub(crate) fn water_at(config: &ProjectionConfig, plant: &Plant, now: u64) -> u8 {
    if plant.is_dead {
        return 0;
    }
    let elapsed = now.saturating_sub(plant.last_watered);
    let intervals = elapsed / config.interval_secs();
    let lost = intervals.saturating_mul(config.rate_percent());
    let level = u64::from(plant.water_level.min(MAX_WATER_LEVEL));
    // level <= 100, so the narrowing cannot truncate.
    level.saturating_sub(lost) as u8
}

/// Absolute time at which the tank empties, `None` if it never does.
pub(crate) fn dry_at(config: &ProjectionConfig, plant: &Plant) -> Option<u64> {
    if plant.is_dead {
        return Some(plant.last_watered);
    }
    let level = plant.water_level.min(MAX_WATER_LEVEL);
    let intervals = config.constants().intervals_to_drain(level)?;
    Some(
        plant
            .last_watered
            .saturating_add(intervals.saturating_mul(config.interval_secs())),
    )
}
