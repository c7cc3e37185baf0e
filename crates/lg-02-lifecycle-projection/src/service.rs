//! # Garden Service
//!
//! Wires the pure projection functions to the outbound ports.
//!
//! ## Architecture
//!
//! - [`ProjectionEngine`] implements [`LifecycleProjectionApi`] over a
//!   validated [`ProjectionConfig`]. Stateless.
//! - [`GardenService`] owns one owner's working set, refreshes it through a
//!   [`PlantReader`] and reports advisories to a [`Notifier`].
//!
//! The reader is the only writer of snapshot state. Projections never
//! feed back into the working set.
//!
//! ## Degraded Mode
//!
//! Without a configured contract address the service still projects
//! whatever snapshots it holds, but every ledger fetch fails with
//! [`ServiceError::Disabled`].

use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::algorithms;
use crate::domain::{
    Action, ActionGate, AdvisoryThresholds, EventOutcome, Garden, PlantProjection,
    ProjectionConfig, ProjectionError, ServiceError, Vitality,
};
use crate::ports::inbound::LifecycleProjectionApi;
use crate::ports::outbound::{Notifier, PlantReader};
use lg_01_contract_model::{
    AccountAddress, DeploymentConfig, GrowthStage, LedgerEvent, Plant, PlantId,
};

/// Stateless projection engine.
#[derive(Clone, Debug, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Engine over an already validated configuration.
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Rules in effect.
    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Countdown until the tank empties. See [`algorithms::time_until_dry`].
    pub fn time_until_dry(
        &self,
        plant: &Plant,
        now: u64,
    ) -> Result<Option<Duration>, ProjectionError> {
        algorithms::time_until_dry(&self.config, plant, now)
    }

    /// Countdown until the next stage window opens.
    pub fn time_to_stage_eligibility(
        &self,
        plant: &Plant,
        now: u64,
    ) -> Result<Option<Duration>, ProjectionError> {
        algorithms::time_to_stage_eligibility(&self.config, plant, now)
    }
}

impl LifecycleProjectionApi for ProjectionEngine {
    fn project_water_level(&self, plant: &Plant, now: u64) -> Result<u8, ProjectionError> {
        algorithms::project_water_level(&self.config, plant, now)
    }

    fn is_projected_dead(&self, plant: &Plant, now: u64) -> Result<bool, ProjectionError> {
        algorithms::is_projected_dead(&self.config, plant, now)
    }

    fn project_vitality(&self, plant: &Plant, now: u64) -> Result<Vitality, ProjectionError> {
        algorithms::project_vitality(&self.config, plant, now)
    }

    fn project_stage_eligibility(
        &self,
        plant: &Plant,
        now: u64,
    ) -> Result<bool, ProjectionError> {
        algorithms::project_stage_eligibility(&self.config, plant, now)
    }

    fn project_stage(&self, plant: &Plant, now: u64) -> Result<GrowthStage, ProjectionError> {
        algorithms::project_stage(&self.config, plant, now)
    }

    fn project_harvest_eligibility(&self, plant: &Plant) -> Result<bool, ProjectionError> {
        algorithms::project_harvest_eligibility(plant)
    }

    fn time_to_next_water_drop(
        &self,
        plant: &Plant,
        now: u64,
    ) -> Result<Duration, ProjectionError> {
        algorithms::time_to_next_water_drop(&self.config, plant, now)
    }

    fn project(&self, plant: &Plant, now: u64) -> Result<PlantProjection, ProjectionError> {
        algorithms::project(&self.config, plant, now)
    }

    fn check_action(
        &self,
        plant: &Plant,
        caller: &AccountAddress,
        action: Action,
        now: u64,
    ) -> Result<ActionGate, ProjectionError> {
        algorithms::check_action(&self.config, plant, caller, action, now)
    }
}

/// One owner's garden: working set, reader and notifier.
///
/// ## Thread Safety
///
/// Shareable across tasks via `Arc`. The working set sits behind a
/// `RwLock` that is never held across an `.await`.
pub struct GardenService<R, N>
where
    R: PlantReader,
    N: Notifier,
{
    engine: ProjectionEngine,
    /// Ledger fetches are refused when false.
    enabled: bool,
    thresholds: AdvisoryThresholds,
    garden: RwLock<Garden>,
    reader: Arc<R>,
    notifier: Arc<N>,
}

impl<R, N> GardenService<R, N>
where
    R: PlantReader,
    N: Notifier,
{
    /// Build a service for `owner` from the deployment configuration.
    ///
    /// Fails only when the configured constants are unusable.
    pub fn new(
        deployment: &DeploymentConfig,
        owner: AccountAddress,
        reader: Arc<R>,
        notifier: Arc<N>,
    ) -> Result<Self, ServiceError> {
        let config = ProjectionConfig::from_deployment(deployment)?;
        let enabled = deployment.is_enabled();
        if !enabled {
            warn!("[lg-02] No contract address configured, running in degraded mode");
        }
        Ok(Self {
            engine: ProjectionEngine::new(config),
            enabled,
            thresholds: AdvisoryThresholds::default(),
            garden: RwLock::new(Garden::new(owner)),
            reader,
            notifier,
        })
    }

    /// Override the advisory thresholds.
    pub fn with_thresholds(mut self, thresholds: AdvisoryThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Projection engine used by this service.
    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }

    /// Whether ledger fetches are possible.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Owner whose plants are tracked.
    pub fn owner(&self) -> AccountAddress {
        self.garden.read().owner()
    }

    /// Copies of the tracked snapshots, in id order.
    pub fn plants(&self) -> Vec<Plant> {
        self.garden.read().plants().cloned().collect()
    }

    /// Store a snapshot obtained elsewhere, e.g. from a file.
    ///
    /// Returns whether the plant is tracked afterwards.
    pub fn load_snapshot(&self, plant: Plant) -> Result<bool, ServiceError> {
        plant.validate()?;
        Ok(self.garden.write().apply_snapshot(plant))
    }

    fn ensure_enabled(&self, operation: &str) -> Result<(), ServiceError> {
        if self.enabled {
            return Ok(());
        }
        warn!("[lg-02] {} refused: garden client disabled", operation);
        Err(ServiceError::Disabled)
    }

    /// Re-fetch the owner's whole plant list, replacing the working set.
    ///
    /// Returns the number of plants tracked afterwards.
    pub async fn refresh(&self) -> Result<usize, ServiceError> {
        self.ensure_enabled("refresh")?;
        let owner = self.owner();
        let ids = self.reader.get_user_plants(owner).await?;

        let mut fetched = Vec::with_capacity(ids.len());
        for id in ids {
            let plant = self.reader.get_plant(id).await?;
            plant.validate()?;
            fetched.push(plant);
        }

        let mut garden = self.garden.write();
        garden.replace_all(fetched);
        info!("[lg-02] Refreshed garden of {}: {} active plants", owner, garden.len());
        Ok(garden.len())
    }

    /// Re-fetch a single plant. Returns whether it is tracked afterwards.
    pub async fn refresh_plant(&self, id: PlantId) -> Result<bool, ServiceError> {
        self.ensure_enabled("refresh_plant")?;
        let plant = self.reader.get_plant(id).await?;
        plant.validate()?;
        let tracked = self.garden.write().apply_snapshot(plant);
        debug!("[lg-02] Refreshed plant {} (tracked: {})", id, tracked);
        Ok(tracked)
    }

    /// React to a confirmed ledger event, re-fetching when it made the
    /// stored snapshot stale.
    pub async fn handle_event(&self, event: &LedgerEvent) -> Result<EventOutcome, ServiceError> {
        let outcome = self.garden.write().apply_event(event);
        match outcome {
            EventOutcome::RefreshRequired(id) => {
                debug!("[lg-02] {} for plant {}, re-fetching", event.name(), id);
                self.refresh_plant(id).await?;
            }
            EventOutcome::Removed(id) => {
                info!("[lg-02] Plant {} harvested, removed from garden", id);
            }
            EventOutcome::Ignored => {}
        }
        Ok(outcome)
    }

    /// Projection of a tracked plant.
    pub fn projection(&self, id: PlantId, now: u64) -> Result<PlantProjection, ServiceError> {
        let garden = self.garden.read();
        let plant = garden.get(id).ok_or(ServiceError::UnknownPlant(id))?;
        Ok(self.engine.project(plant, now)?)
    }

    /// Pre-submission check for `caller` performing `action` on a tracked plant.
    pub fn gate(
        &self,
        id: PlantId,
        caller: &AccountAddress,
        action: Action,
        now: u64,
    ) -> Result<ActionGate, ServiceError> {
        let garden = self.garden.read();
        let plant = garden.get(id).ok_or(ServiceError::UnknownPlant(id))?;
        let gate = self.engine.check_action(plant, caller, action, now)?;
        if let ActionGate::Rejected(reason) = gate {
            debug!("[lg-02] {} on plant {} rejected: {}", action.abi_function(), id, reason);
        }
        Ok(gate)
    }

    /// Project every tracked plant at `now` and surface advisories.
    ///
    /// Plants whose snapshot is newer than `now` (local clock behind the
    /// chain) are skipped for this tick.
    pub fn tick(&self, now: u64) -> Vec<PlantProjection> {
        let projections: Vec<PlantProjection> = {
            let garden = self.garden.read();
            garden
                .plants()
                .filter_map(|plant| match self.engine.project(plant, now) {
                    Ok(projection) => Some(projection),
                    Err(e) => {
                        warn!("[lg-02] Skipping plant {}: {}", plant.id, e);
                        None
                    }
                })
                .collect()
        };

        for projection in &projections {
            for notification in algorithms::advise(projection, &self.thresholds) {
                self.notifier.notify(&notification);
            }
        }
        projections
    }
}
