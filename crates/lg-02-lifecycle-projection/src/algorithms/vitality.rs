//! # Vitality
//!
//! Alive/wilting/dead. Only the ledger can make a plant `Dead`.

use super::water::water_at;
use crate::domain::{invariant_valid_query, ProjectionConfig, ProjectionError, Vitality};
use lg_01_contract_model::Plant;

/// Vitality at `now`.
pub fn project_vitality(
    config: &ProjectionConfig,
    plant: &Plant,
    now: u64,
) -> Result<Vitality, ProjectionError> {
    invariant_valid_query(plant, now)?;
    Ok(vitality_at(config, plant, now))
}

/// Whether the plant is dead at `now`.
///
/// True only once the ledger has recorded the death. A dry plant that the
/// ledger has not yet killed reports `false` here and `Wilting` from
/// [`project_vitality`].
pub fn is_projected_dead(
    config: &ProjectionConfig,
    plant: &Plant,
    now: u64,
) -> Result<bool, ProjectionError> {
    Ok(project_vitality(config, plant, now)? == Vitality::Dead)
}

pub(crate) fn vitality_at(config: &ProjectionConfig, plant: &Plant, now: u64) -> Vitality {
    if plant.is_dead {
        Vitality::Dead
    } else if water_at(config, plant, now) == 0 {
        Vitality::Wilting
    } else {
        Vitality::Alive
    }
}
