//! # Garden Working Set
//!
//! The client's active plant list for one owner. Snapshots are replaced
//! wholesale; the latest fetch always wins and nothing is merged.

use lg_01_contract_model::{AccountAddress, LedgerEvent, Plant, PlantId};
use std::collections::BTreeMap;

/// What applying a ledger event did to the working set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// Plant left the active list (harvested).
    Removed(PlantId),
    /// Stored snapshot is stale; re-fetch it.
    RefreshRequired(PlantId),
    /// Event concerns a plant this garden does not track.
    Ignored,
}

/// Active plants of one owner, keyed by id.
#[derive(Clone, Debug)]
pub struct Garden {
    owner: AccountAddress,
    plants: BTreeMap<PlantId, Plant>,
}

impl Garden {
    /// Empty garden for `owner`.
    pub fn new(owner: AccountAddress) -> Self {
        Self {
            owner,
            plants: BTreeMap::new(),
        }
    }

    /// Owner whose plants are tracked.
    pub fn owner(&self) -> AccountAddress {
        self.owner
    }

    /// Store a fetched snapshot.
    ///
    /// Returns whether the plant is tracked afterwards. Non-existent
    /// plants and plants owned by someone else are dropped.
    pub fn apply_snapshot(&mut self, plant: Plant) -> bool {
        if !plant.exists || plant.owner != self.owner {
            self.plants.remove(&plant.id);
            return false;
        }
        self.plants.insert(plant.id, plant);
        true
    }

    /// Replace the whole working set with a fresh owner listing.
    pub fn replace_all(&mut self, plants: impl IntoIterator<Item = Plant>) {
        self.plants.clear();
        for plant in plants {
            self.apply_snapshot(plant);
        }
    }

    /// React to a confirmed ledger event.
    pub fn apply_event(&mut self, event: &LedgerEvent) -> EventOutcome {
        let id = event.plant_id();
        match event {
            LedgerEvent::PlantSeeded { owner, .. } if *owner == self.owner => {
                EventOutcome::RefreshRequired(id)
            }
            LedgerEvent::PlantSeeded { .. } => EventOutcome::Ignored,
            LedgerEvent::PlantHarvested { .. } => match self.plants.remove(&id) {
                Some(_) => EventOutcome::Removed(id),
                None => EventOutcome::Ignored,
            },
            LedgerEvent::PlantWatered { .. }
            | LedgerEvent::StageAdvanced { .. }
            | LedgerEvent::PlantDied { .. } => {
                if self.plants.contains_key(&id) {
                    EventOutcome::RefreshRequired(id)
                } else {
                    EventOutcome::Ignored
                }
            }
        }
    }

    /// Snapshot for `id`.
    pub fn get(&self, id: PlantId) -> Option<&Plant> {
        self.plants.get(&id)
    }

    /// Tracked snapshots in id order.
    pub fn plants(&self) -> impl Iterator<Item = &Plant> {
        self.plants.values()
    }

    /// Tracked ids in order.
    pub fn ids(&self) -> Vec<PlantId> {
        self.plants.keys().copied().collect()
    }

    /// Number of tracked plants.
    pub fn len(&self) -> usize {
        self.plants.len()
    }

    /// No tracked plants.
    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}
