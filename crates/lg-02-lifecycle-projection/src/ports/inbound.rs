//! # Inbound Ports
//!
//! What the projection subsystem offers rendering and gating callers.

use crate::domain::{Action, ActionGate, PlantProjection, ProjectionError, Vitality};
use lg_01_contract_model::{AccountAddress, GrowthStage, Plant};
use std::time::Duration;

/// Lifecycle projection API - inbound port.
///
/// Every method is pure in `(plant, now)` and safe to call every frame.
pub trait LifecycleProjectionApi: Send + Sync {
    /// Projected water level, 0..=100.
    fn project_water_level(&self, plant: &Plant, now: u64) -> Result<u8, ProjectionError>;

    /// Ledger-confirmed death.
    fn is_projected_dead(&self, plant: &Plant, now: u64) -> Result<bool, ProjectionError>;

    /// Alive, wilting or dead.
    fn project_vitality(&self, plant: &Plant, now: u64) -> Result<Vitality, ProjectionError>;

    /// A stage-advance action would succeed now.
    fn project_stage_eligibility(&self, plant: &Plant, now: u64)
        -> Result<bool, ProjectionError>;

    /// Stage after a stage update at `now`.
    fn project_stage(&self, plant: &Plant, now: u64) -> Result<GrowthStage, ProjectionError>;

    /// A harvest would succeed on the confirmed snapshot.
    fn project_harvest_eligibility(&self, plant: &Plant) -> Result<bool, ProjectionError>;

    /// Countdown to the next water drop.
    fn time_to_next_water_drop(&self, plant: &Plant, now: u64)
        -> Result<Duration, ProjectionError>;

    /// All of the above at once.
    fn project(&self, plant: &Plant, now: u64) -> Result<PlantProjection, ProjectionError>;

    /// Pre-submission check for `caller` performing `action`.
    fn check_action(
        &self,
        plant: &Plant,
        caller: &AccountAddress,
        action: Action,
        now: u64,
    ) -> Result<ActionGate, ProjectionError>;
}
