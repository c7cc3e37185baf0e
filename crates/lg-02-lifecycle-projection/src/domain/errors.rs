//! # Domain Errors
//!
//! The engine raises exactly one kind of error, [`ProjectionError::InvalidInput`],
//! and only for caller bugs. Dead plants, empty tanks and fully grown
//! plants are ordinary return values.

use lg_01_contract_model::{ModelError, PlantId};
use thiserror::Error;

/// Precondition violated by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// Snapshot has `exists == false`.
    #[error("plant {0} does not exist")]
    PlantDoesNotExist(PlantId),

    /// Query time is before the snapshot's last watering.
    #[error("query time {now} precedes last_watered={last_watered}")]
    BeforeLastWatered {
        /// Query time.
        now: u64,
        /// Snapshot watering time.
        last_watered: u64,
    },

    /// Query time is before the plant was planted.
    #[error("query time {now} precedes planted_date={planted_date}")]
    BeforePlanted {
        /// Query time.
        now: u64,
        /// Snapshot planting time.
        planted_date: u64,
    },
}

/// Projection engine errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// Caller bug: non-existent plant or a clock behind the snapshot.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Errors from the garden service and its collaborators.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No contract address configured.
    #[error("Garden client disabled: no contract address configured")]
    Disabled,

    /// Plant is not in the working set.
    #[error("Plant not tracked: {0}")]
    UnknownPlant(PlantId),

    /// Chain-reading collaborator failed.
    #[error("Ledger read failed: {0}")]
    Reader(String),

    /// Projection rejected its input.
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    /// Snapshot or configuration was malformed.
    #[error(transparent)]
    Model(#[from] ModelError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_plant_message() {
        let err: ProjectionError = InvalidInput::PlantDoesNotExist(PlantId::new(7).unwrap()).into();
        assert_eq!(err.to_string(), "Invalid input: plant 7 does not exist");
    }

    #[test]
    fn test_clock_skew_message() {
        let err: ProjectionError = InvalidInput::BeforeLastWatered {
            now: 90,
            last_watered: 100,
        }
        .into();
        assert!(err.to_string().contains("precedes last_watered=100"));
    }

    #[test]
    fn test_service_error_wraps_projection() {
        let err: ServiceError = ProjectionError::from(InvalidInput::BeforePlanted {
            now: 1,
            planted_date: 2,
        })
        .into();
        assert!(matches!(err, ServiceError::Projection(_)));
        assert!(err.to_string().starts_with("Invalid input"));
    }
}
