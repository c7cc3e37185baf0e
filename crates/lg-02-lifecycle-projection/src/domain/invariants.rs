//! # Domain Invariants
//!
//! Preconditions every projection checks before doing arithmetic.

use super::errors::{InvalidInput, ProjectionError};
use lg_01_contract_model::Plant;

/// Invariant: the snapshot denotes a real plant.
pub fn invariant_plant_exists(plant: &Plant) -> Result<(), ProjectionError> {
    if !plant.exists {
        return Err(InvalidInput::PlantDoesNotExist(plant.id).into());
    }
    Ok(())
}

/// Invariant: the query clock is not behind the snapshot.
///
/// A stale snapshot paired with a corrected clock would otherwise yield
/// negative elapsed time.
pub fn invariant_clock_not_behind(plant: &Plant, now: u64) -> Result<(), ProjectionError> {
    if now < plant.last_watered {
        return Err(InvalidInput::BeforeLastWatered {
            now,
            last_watered: plant.last_watered,
        }
        .into());
    }
    if now < plant.planted_date {
        return Err(InvalidInput::BeforePlanted {
            now,
            planted_date: plant.planted_date,
        }
        .into());
    }
    Ok(())
}

/// Both invariants, in the order callers expect them reported.
pub fn invariant_valid_query(plant: &Plant, now: u64) -> Result<(), ProjectionError> {
    invariant_plant_exists(plant)?;
    invariant_clock_not_behind(plant, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lg_01_contract_model::{AccountAddress, PlantId};

    fn plant() -> Plant {
        Plant::seeded(PlantId::new(1).unwrap(), AccountAddress::ZERO, 1_000)
    }

    #[test]
    fn test_existing_plant_passes() {
        assert!(invariant_plant_exists(&plant()).is_ok());
    }

    #[test]
    fn test_missing_plant_fails() {
        let missing = Plant::missing(PlantId::new(2).unwrap());
        assert!(matches!(
            invariant_plant_exists(&missing),
            Err(ProjectionError::InvalidInput(
                InvalidInput::PlantDoesNotExist(_)
            ))
        ));
    }

    #[test]
    fn test_clock_at_snapshot_passes() {
        assert!(invariant_clock_not_behind(&plant(), 1_000).is_ok());
    }

    #[test]
    fn test_clock_behind_watering_fails() {
        let mut p = plant();
        p.last_watered = 1_500;
        assert!(matches!(
            invariant_clock_not_behind(&p, 1_200),
            Err(ProjectionError::InvalidInput(
                InvalidInput::BeforeLastWatered { .. }
            ))
        ));
    }

    #[test]
    fn test_clock_behind_planting_fails() {
        // Malformed snapshot: watered before planted.
        let mut p = plant();
        p.last_watered = 500;
        assert!(matches!(
            invariant_clock_not_behind(&p, 800),
            Err(ProjectionError::InvalidInput(
                InvalidInput::BeforePlanted { .. }
            ))
        ));
    }

    #[test]
    fn test_existence_checked_first() {
        let missing = Plant::missing(PlantId::new(2).unwrap());
        // planted_date is 0 on a missing plant, so only existence can fail.
        assert!(matches!(
            invariant_valid_query(&missing, 0),
            Err(ProjectionError::InvalidInput(
                InvalidInput::PlantDoesNotExist(_)
            ))
        ));
    }
}
