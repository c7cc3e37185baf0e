//! In-Memory Plant Reader Adapter
//!
//! Implements `PlantReader` from a seeded snapshot table. Stands in for
//! the chain-reading layer in tests, demos and offline tooling.

use crate::domain::ServiceError;
use crate::ports::outbound::PlantReader;
use async_trait::async_trait;
use lg_01_contract_model::{AccountAddress, Plant, PlantId};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::debug;

/// Snapshot table keyed by plant id.
pub struct InMemoryPlantReader {
    plants: RwLock<BTreeMap<PlantId, Plant>>,
    should_fail: RwLock<bool>,
}

impl InMemoryPlantReader {
    /// Empty ledger.
    pub fn new() -> Self {
        Self {
            plants: RwLock::new(BTreeMap::new()),
            should_fail: RwLock::new(false),
        }
    }

    /// Ledger pre-loaded with `plants`.
    pub fn with_plants(plants: impl IntoIterator<Item = Plant>) -> Self {
        let reader = Self::new();
        for plant in plants {
            reader.put(plant);
        }
        reader
    }

    /// Insert or replace a snapshot, as a confirmed transaction would.
    pub fn put(&self, plant: Plant) {
        self.plants.write().insert(plant.id, plant);
    }

    /// Make every read fail, simulating an unreachable node.
    pub fn set_failing(&self, failing: bool) {
        *self.should_fail.write() = failing;
    }

    fn check_reachable(&self) -> Result<(), ServiceError> {
        if *self.should_fail.read() {
            return Err(ServiceError::Reader("node unreachable".to_string()));
        }
        Ok(())
    }
}

impl Default for InMemoryPlantReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlantReader for InMemoryPlantReader {
    async fn get_plant(&self, id: PlantId) -> Result<Plant, ServiceError> {
        self.check_reachable()?;
        debug!("[lg-02] getPlant({})", id);
        Ok(self
            .plants
            .read()
            .get(&id)
            .cloned()
            .unwrap_or_else(|| Plant::missing(id)))
    }

    async fn get_user_plants(&self, owner: AccountAddress) -> Result<Vec<PlantId>, ServiceError> {
        self.check_reachable()?;
        debug!("[lg-02] getUserPlants({})", owner);
        // The ledger keeps harvested ids in the owner's list.
        Ok(self
            .plants
            .read()
            .values()
            .filter(|p| p.owner == owner)
            .map(|p| p.id)
            .collect())
    }
}
