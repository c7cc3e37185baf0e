//! # Domain Entities
//!
//! The plant snapshot as returned by the ledger's `getPlant`.

use super::constants::MAX_WATER_LEVEL;
use super::errors::ModelError;
use super::value_objects::{AccountAddress, GrowthStage, PlantId};
use serde::{Deserialize, Serialize};

/// A plant as last confirmed on the ledger.
///
/// The chain-reading layer is the only writer. Everything else treats a
/// snapshot as an immutable value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    /// Ledger-assigned id.
    pub id: PlantId,
    /// Owner account; fixed at creation.
    pub owner: AccountAddress,
    /// Stage as last confirmed.
    pub stage: GrowthStage,
    /// Creation time, seconds since epoch.
    pub planted_date: u64,
    /// Last confirmed watering, seconds since epoch.
    pub last_watered: u64,
    /// Water level as last confirmed, 0..=100.
    pub water_level: u8,
    /// False means "no such id"; every other field is meaningless.
    pub exists: bool,
    /// Death recorded by the ledger. Terminal.
    pub is_dead: bool,
    /// When the current stage was entered, if the reader knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_started_at: Option<u64>,
}

impl Plant {
    /// A freshly seeded plant, as the ledger stores it after `plantSeed`.
    pub fn seeded(id: PlantId, owner: AccountAddress, planted_at: u64) -> Self {
        Self {
            id,
            owner,
            stage: GrowthStage::Seed,
            planted_date: planted_at,
            last_watered: planted_at,
            water_level: MAX_WATER_LEVEL,
            exists: true,
            is_dead: false,
            stage_started_at: Some(planted_at),
        }
    }

    /// The zeroed struct the ledger returns for an unknown or harvested id.
    pub fn missing(id: PlantId) -> Self {
        Self {
            id,
            owner: AccountAddress::ZERO,
            stage: GrowthStage::Seed,
            planted_date: 0,
            last_watered: 0,
            water_level: 0,
            exists: false,
            is_dead: false,
            stage_started_at: None,
        }
    }

    /// Start of the clock for the current stage, if known.
    ///
    /// A Seed entered its stage at planting. Past Seed, the start is
    /// unknown unless the reader supplied a transition timestamp.
    pub fn stage_clock_start(&self) -> Option<u64> {
        self.stage_started_at
            .or((self.stage == GrowthStage::Seed).then_some(self.planted_date))
    }

    /// Check the invariants a snapshot can be checked against on its own.
    pub fn validate(&self) -> Result<(), ModelError> {
        if !self.exists {
            return Ok(());
        }
        if self.water_level > MAX_WATER_LEVEL {
            return Err(ModelError::WaterLevelOutOfRange(self.water_level));
        }
        if self.last_watered < self.planted_date {
            return Err(ModelError::TimestampBeforePlanting {
                field: "last_watered",
                value: self.last_watered,
                planted_date: self.planted_date,
            });
        }
        if let Some(started) = self.stage_started_at {
            if started < self.planted_date {
                return Err(ModelError::TimestampBeforePlanting {
                    field: "stage_started_at",
                    value: started,
                    planted_date: self.planted_date,
                });
            }
        }
        Ok(())
    }
}
