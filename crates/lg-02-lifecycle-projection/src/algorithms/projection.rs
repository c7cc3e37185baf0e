//! # Full Projection
//!
//! One consistent view of a plant for a render tick.

use super::growth::{stage_at, stage_eligible_at, until_stage_eligible};
use super::vitality::vitality_at;
use super::water::{dry_at, water_at};
use crate::domain::{invariant_valid_query, PlantProjection, ProjectionConfig, ProjectionError};
use lg_01_contract_model::{GrowthStage, Plant};
use std::time::Duration;

/// Project every derived field of `plant` at `now`.
///
/// Equivalent to calling each projection separately with the same
/// `(plant, now)`, with the preconditions checked once.
pub fn project(
    config: &ProjectionConfig,
    plant: &Plant,
    now: u64,
) -> Result<PlantProjection, ProjectionError> {
    invariant_valid_query(plant, now)?;

    let water_level = water_at(config, plant, now);
    let vitality = vitality_at(config, plant, now);
    let dry = water_level == 0;

    let next_water_drop = if dry {
        Duration::ZERO
    } else {
        let interval = config.interval_secs();
        Duration::from_secs(interval - (now - plant.last_watered) % interval)
    };

    let until_dry = if dry {
        Some(Duration::ZERO)
    } else {
        dry_at(config, plant).map(|at| Duration::from_secs(at.saturating_sub(now)))
    };

    Ok(PlantProjection {
        plant_id: plant.id,
        at: now,
        water_level,
        vitality,
        confirmed_stage: plant.stage,
        projected_stage: stage_at(config, plant, now),
        stage_eligible: stage_eligible_at(config, plant, now),
        harvestable: !plant.is_dead && plant.stage == GrowthStage::Blooming,
        next_water_drop,
        until_dry,
        until_stage_eligible: until_stage_eligible(config, plant, now),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{
        project_harvest_eligibility, project_stage_eligibility, project_water_level,
        time_to_next_water_drop, time_until_dry,
    };
    use crate::domain::Vitality;
    use lg_01_contract_model::{AccountAddress, PlantId};

    const T0: u64 = 1_700_000_000;

    fn plant() -> Plant {
        Plant::seeded(PlantId::new(1).unwrap(), AccountAddress::ZERO, T0)
    }

    #[test]
    fn test_projection_agrees_with_individual_operations() {
        let c = ProjectionConfig::default();
        let p = plant();
        for dt in [0, 29, 30, 45, 60, 181, 1_499, 1_500, 3_600] {
            let now = T0 + dt;
            let view = project(&c, &p, now).unwrap();
            assert_eq!(view.water_level, project_water_level(&c, &p, now).unwrap());
            assert_eq!(
                view.stage_eligible,
                project_stage_eligibility(&c, &p, now).unwrap()
            );
            assert_eq!(view.harvestable, project_harvest_eligibility(&p).unwrap());
            assert_eq!(
                view.next_water_drop,
                time_to_next_water_drop(&c, &p, now).unwrap()
            );
            assert_eq!(view.until_dry, time_until_dry(&c, &p, now).unwrap());
        }
    }

    #[test]
    fn test_projection_of_fresh_seed() {
        let view = project(&ProjectionConfig::default(), &plant(), T0 + 45).unwrap();
        assert_eq!(view.water_level, 98);
        assert_eq!(view.vitality, Vitality::Alive);
        assert_eq!(view.confirmed_stage, GrowthStage::Seed);
        assert_eq!(view.projected_stage, GrowthStage::Seed);
        assert!(!view.stage_eligible);
        assert_eq!(view.until_stage_eligible, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_projection_does_not_touch_snapshot() {
        let p = plant();
        let before = p.clone();
        let _ = project(&ProjectionConfig::default(), &p, T0 + 10_000).unwrap();
        assert_eq!(p, before);
    }
}
