//! # Ledger Events
//!
//! Decoded LiskGarden logs. The chain-reading layer produces these; the
//! working set uses them to decide which snapshots are stale.

use crate::domain::{AccountAddress, GrowthStage, PlantId};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// A confirmed ledger event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "PascalCase")]
pub enum LedgerEvent {
    /// `PlantSeeded(owner, plantId)`.
    PlantSeeded {
        /// New owner.
        owner: AccountAddress,
        /// New plant.
        plant_id: PlantId,
    },
    /// `PlantWatered(plantId, newWaterLevel)`.
    PlantWatered {
        /// Watered plant.
        plant_id: PlantId,
        /// Level after watering.
        new_water_level: u8,
    },
    /// `StageAdvanced(plantId, newStage)`.
    StageAdvanced {
        /// Advanced plant.
        plant_id: PlantId,
        /// Stage after the advance.
        new_stage: GrowthStage,
    },
    /// `PlantHarvested(plantId, owner, reward)`.
    PlantHarvested {
        /// Harvested plant.
        plant_id: PlantId,
        /// Owner paid.
        owner: AccountAddress,
        /// Reward paid, in wei.
        reward: U256,
    },
    /// `PlantDied(plantId)`.
    PlantDied {
        /// Dead plant.
        plant_id: PlantId,
    },
}

impl LedgerEvent {
    /// Plant the event refers to.
    pub fn plant_id(&self) -> PlantId {
        match self {
            Self::PlantSeeded { plant_id, .. }
            | Self::PlantWatered { plant_id, .. }
            | Self::StageAdvanced { plant_id, .. }
            | Self::PlantHarvested { plant_id, .. }
            | Self::PlantDied { plant_id } => *plant_id,
        }
    }

    /// ABI event name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PlantSeeded { .. } => "PlantSeeded",
            Self::PlantWatered { .. } => "PlantWatered",
            Self::StageAdvanced { .. } => "StageAdvanced",
            Self::PlantHarvested { .. } => "PlantHarvested",
            Self::PlantDied { .. } => "PlantDied",
        }
    }
}
