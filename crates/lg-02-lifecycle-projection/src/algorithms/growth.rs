//! # Growth
//!
//! Stage-advance and harvest eligibility.
//!
//! Under [`StageTiming::Cumulative`] (the ledger's `updatePlantStage`), the
//! k-th stage after Seed is due once `k * STAGE_DURATION` seconds have
//! passed since planting, compared with `>=`. A single update may advance
//! several stages. The ledger refreshes water first, so a dry plant dies
//! instead of growing.

use super::water::{dry_at, water_at};
use crate::domain::{invariant_plant_exists, invariant_valid_query, ProjectionConfig, ProjectionError};
use lg_01_contract_model::{GrowthStage, Plant, StageTiming};
use std::time::Duration;

/// Whether a stage-advance action submitted at `now` would advance the
/// plant. Never changes `plant.stage` itself.
pub fn project_stage_eligibility(
    config: &ProjectionConfig,
    plant: &Plant,
    now: u64,
) -> Result<bool, ProjectionError> {
    invariant_valid_query(plant, now)?;
    Ok(stage_eligible_at(config, plant, now))
}

/// Stage the ledger would store if a stage update ran at `now`.
///
/// Never below the confirmed stage.
pub fn project_stage(
    config: &ProjectionConfig,
    plant: &Plant,
    now: u64,
) -> Result<GrowthStage, ProjectionError> {
    invariant_valid_query(plant, now)?;
    Ok(stage_at(config, plant, now))
}

/// Countdown until [`project_stage_eligibility`] turns true.
///
/// `None` when the plant can never advance from its snapshot: already
/// Blooming, dead, dry, or going dry before the window opens.
pub fn time_to_stage_eligibility(
    config: &ProjectionConfig,
    plant: &Plant,
    now: u64,
) -> Result<Option<Duration>, ProjectionError> {
    invariant_valid_query(plant, now)?;
    Ok(until_stage_eligible(config, plant, now))
}

/// Whether a harvest is valid on the confirmed snapshot.
pub fn project_harvest_eligibility(plant: &Plant) -> Result<bool, ProjectionError> {
    invariant_plant_exists(plant)?;
    Ok(!plant.is_dead && plant.stage == GrowthStage::Blooming)
}

/// Time at which the next stage becomes due.
///
/// `None` at Blooming, and under [`StageTiming::PerStage`] when the
/// current stage's start time is unknown.
pub(crate) fn next_stage_due_at(config: &ProjectionConfig, plant: &Plant) -> Option<u64> {
    plant.stage.next()?;
    let duration = config.stage_duration_secs();
    let due = match config.stage_timing() {
        StageTiming::Cumulative => {
            let stages = u64::from(plant.stage.index()) + 1;
            plant
                .planted_date
                .saturating_add(stages.saturating_mul(duration))
        }
        StageTiming::PerStage => plant.stage_clock_start()?.saturating_add(duration),
    };
    Some(due)
}

fn can_grow(config: &ProjectionConfig, plant: &Plant, now: u64) -> bool {
    !plant.is_dead && water_at(config, plant, now) > 0
}

pub(crate) fn stage_eligible_at(config: &ProjectionConfig, plant: &Plant, now: u64) -> bool {
    if !can_grow(config, plant, now) {
        return false;
    }
    next_stage_due_at(config, plant).is_some_and(|due| now >= due)
}

pub(crate) fn stage_at(config: &ProjectionConfig, plant: &Plant, now: u64) -> GrowthStage {
    if !can_grow(config, plant, now) {
        return plant.stage;
    }
    match config.stage_timing() {
        StageTiming::Cumulative => {
            let elapsed = now.saturating_sub(plant.planted_date);
            let reached = (elapsed / config.stage_duration_secs())
                .min(u64::from(GrowthStage::Blooming.index()));
            let reached = GrowthStage::ALL[reached as usize];
            plant.stage.max(reached)
        }
        StageTiming::PerStage => {
            if stage_eligible_at(config, plant, now) {
                plant.stage.next().unwrap_or(plant.stage)
            } else {
                plant.stage
            }
        }
    }
}

pub(crate) fn until_stage_eligible(
    config: &ProjectionConfig,
    plant: &Plant,
    now: u64,
) -> Option<Duration> {
    if !can_grow(config, plant, now) {
        return None;
    }
    let due = next_stage_due_at(config, plant)?;
    if now >= due {
        return Some(Duration::ZERO);
    }
    if dry_at(config, plant).is_some_and(|dry| dry <= due) {
        return None;
    }
    Some(Duration::from_secs(due - now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InvalidInput, ProjectionError};
    use lg_01_contract_model::{AccountAddress, LifecycleConstants, PlantId};

    const T0: u64 = 1_700_000_000;

    fn cumulative() -> ProjectionConfig {
        ProjectionConfig::default()
    }

    fn per_stage() -> ProjectionConfig {
        ProjectionConfig::new(LifecycleConstants::default(), StageTiming::PerStage).unwrap()
    }

    fn plant() -> Plant {
        Plant::seeded(PlantId::new(1).unwrap(), AccountAddress::ZERO, T0)
    }

    fn at_stage(stage: GrowthStage) -> Plant {
        let mut p = plant();
        p.stage = stage;
        p
    }

    #[test]
    fn test_seed_not_eligible_before_duration() {
        assert!(!project_stage_eligibility(&cumulative(), &plant(), T0 + 59).unwrap());
    }

    #[test]
    fn test_seed_eligible_at_duration() {
        assert!(project_stage_eligibility(&cumulative(), &plant(), T0 + 60).unwrap());
    }

    #[test]
    fn test_cumulative_thresholds_per_stage() {
        let c = cumulative();
        let sprout = at_stage(GrowthStage::Sprout);
        assert!(!project_stage_eligibility(&c, &sprout, T0 + 119).unwrap());
        assert!(project_stage_eligibility(&c, &sprout, T0 + 120).unwrap());

        let growing = at_stage(GrowthStage::Growing);
        assert!(!project_stage_eligibility(&c, &growing, T0 + 179).unwrap());
        assert!(project_stage_eligibility(&c, &growing, T0 + 180).unwrap());
    }

    #[test]
    fn test_scenario_c_blooming_never_eligible() {
        let c = cumulative();
        let mut blooming = at_stage(GrowthStage::Blooming);
        for dt in [0, 60, 600] {
            blooming.last_watered = T0 + dt;
            assert!(!project_stage_eligibility(&c, &blooming, T0 + dt).unwrap());
        }
        assert!(project_harvest_eligibility(&blooming).unwrap());

        blooming.is_dead = true;
        assert!(!project_harvest_eligibility(&blooming).unwrap());
    }

    #[test]
    fn test_harvest_needs_blooming() {
        assert!(!project_harvest_eligibility(&at_stage(GrowthStage::Growing)).unwrap());
    }

    #[test]
    fn test_harvest_on_missing_plant_is_invalid_input() {
        let mut missing = at_stage(GrowthStage::Blooming);
        missing.exists = false;
        assert!(matches!(
            project_harvest_eligibility(&missing),
            Err(ProjectionError::InvalidInput(
                InvalidInput::PlantDoesNotExist(_)
            ))
        ));
    }

    #[test]
    fn test_dry_plant_cannot_grow() {
        let mut p = plant();
        p.water_level = 2;
        // Dry after one interval, long before the stage is due.
        assert!(!project_stage_eligibility(&cumulative(), &p, T0 + 60).unwrap());
        assert_eq!(project_stage(&cumulative(), &p, T0 + 600).unwrap(), GrowthStage::Seed);
    }

    #[test]
    fn test_dead_plant_cannot_grow() {
        let mut p = plant();
        p.is_dead = true;
        assert!(!project_stage_eligibility(&cumulative(), &p, T0 + 600).unwrap());
    }

    #[test]
    fn test_cumulative_stage_skips_ahead() {
        let c = cumulative();
        let p = plant();
        assert_eq!(project_stage(&c, &p, T0 + 59).unwrap(), GrowthStage::Seed);
        assert_eq!(project_stage(&c, &p, T0 + 60).unwrap(), GrowthStage::Sprout);
        assert_eq!(project_stage(&c, &p, T0 + 150).unwrap(), GrowthStage::Growing);
        assert_eq!(project_stage(&c, &p, T0 + 180).unwrap(), GrowthStage::Blooming);
        assert_eq!(project_stage(&c, &p, T0 + 1_000).unwrap(), GrowthStage::Blooming);
    }

    #[test]
    fn test_projected_stage_never_regresses() {
        // Confirmed stage ahead of the clock (e.g. constants changed).
        let growing = at_stage(GrowthStage::Growing);
        assert_eq!(
            project_stage(&cumulative(), &growing, T0 + 10).unwrap(),
            GrowthStage::Growing
        );
    }

    #[test]
    fn test_per_stage_uses_stage_clock() {
        let c = per_stage();
        let mut sprout = at_stage(GrowthStage::Sprout);
        sprout.stage_started_at = Some(T0 + 100);
        sprout.last_watered = T0 + 100;
        assert!(!project_stage_eligibility(&c, &sprout, T0 + 159).unwrap());
        assert!(project_stage_eligibility(&c, &sprout, T0 + 160).unwrap());
        assert_eq!(project_stage(&c, &sprout, T0 + 1_000).unwrap(), GrowthStage::Growing);
    }

    #[test]
    fn test_per_stage_falls_back_to_planting() {
        let c = per_stage();
        let mut p = plant();
        p.stage_started_at = None;
        assert!(project_stage_eligibility(&c, &p, T0 + 60).unwrap());
    }

    #[test]
    fn test_per_stage_unknown_clock_past_seed() {
        let c = per_stage();
        let mut sprout = at_stage(GrowthStage::Sprout);
        sprout.stage_started_at = None;
        sprout.last_watered = T0 + 100;
        // Planting time must not stand in for the Sprout clock.
        assert!(!project_stage_eligibility(&c, &sprout, T0 + 120).unwrap());
        assert!(!project_stage_eligibility(&c, &sprout, T0 + 1_000).unwrap());
        assert_eq!(time_to_stage_eligibility(&c, &sprout, T0 + 120).unwrap(), None);
        assert_eq!(project_stage(&c, &sprout, T0 + 1_000).unwrap(), GrowthStage::Sprout);
        // Cumulative timing never needs the stage clock.
        assert!(project_stage_eligibility(&cumulative(), &sprout, T0 + 120).unwrap());
    }

    #[test]
    fn test_countdown_to_stage() {
        let c = cumulative();
        let p = plant();
        assert_eq!(
            time_to_stage_eligibility(&c, &p, T0 + 15).unwrap(),
            Some(Duration::from_secs(45))
        );
        assert_eq!(
            time_to_stage_eligibility(&c, &p, T0 + 75).unwrap(),
            Some(Duration::ZERO)
        );
        assert_eq!(
            time_to_stage_eligibility(&c, &at_stage(GrowthStage::Blooming), T0).unwrap(),
            None
        );
    }

    #[test]
    fn test_countdown_none_when_dry_first() {
        let mut p = plant();
        p.water_level = 2; // dry at T0 + 30, stage due at T0 + 60
        assert_eq!(time_to_stage_eligibility(&cumulative(), &p, T0).unwrap(), None);
    }

    #[test]
    fn test_clock_skew_rejected() {
        let mut p = plant();
        p.last_watered = T0 + 500;
        assert!(project_stage_eligibility(&cumulative(), &p, T0 + 100).is_err());
    }
}
