//! # Domain Value Objects
//!
//! Results produced by the projection engine.

use lg_01_contract_model::{GrowthStage, PlantId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Alive/dead status as the engine is allowed to state it.
///
/// The ledger has no grace window: it records death on the first
/// state-changing call after water reaches zero. Until then the plant is
/// legally alive, so a dry plant is `Wilting`, never `Dead`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vitality {
    /// Projected water above zero.
    Alive,
    /// Projected water is zero; death is pending ledger confirmation.
    Wilting,
    /// Ledger recorded the death.
    Dead,
}

impl Vitality {
    /// Wilting or dead.
    pub fn is_doomed(self) -> bool {
        !matches!(self, Self::Alive)
    }
}

/// Everything a render tick needs, computed from one `(plant, now)` pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantProjection {
    /// Projected plant.
    pub plant_id: PlantId,
    /// Query time.
    pub at: u64,
    /// Projected water, 0..=100.
    pub water_level: u8,
    /// Alive, wilting or dead.
    pub vitality: Vitality,
    /// Stage as last confirmed.
    pub confirmed_stage: GrowthStage,
    /// Stage the ledger would store after a stage update at `at`.
    pub projected_stage: GrowthStage,
    /// A stage-advance action would advance the plant now.
    pub stage_eligible: bool,
    /// Confirmed Blooming and not dead.
    pub harvestable: bool,
    /// Countdown to the next water drop.
    pub next_water_drop: Duration,
    /// Countdown to an empty tank; `None` if water never drains.
    pub until_dry: Option<Duration>,
    /// Countdown to the next stage window; `None` if it will never open.
    pub until_stage_eligible: Option<Duration>,
}

/// A state-changing ledger action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// `waterPlant`.
    Water,
    /// `updatePlantStage`.
    AdvanceStage,
    /// `harvestPlant`.
    Harvest,
}

impl Action {
    /// ABI function the action submits.
    pub fn abi_function(self) -> &'static str {
        match self {
            Self::Water => "waterPlant",
            Self::AdvanceStage => "updatePlantStage",
            Self::Harvest => "harvestPlant",
        }
    }
}

/// Why a pre-submission check refused an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Caller is not the owner.
    NotOwner,
    /// Ledger recorded the death.
    Dead,
    /// Water is projected at zero; the next update records death.
    Starved,
    /// Already Blooming.
    FullyGrown,
    /// Stage window not yet open.
    NotYetDue {
        /// Seconds until it opens.
        remaining_secs: u64,
    },
    /// Not Blooming.
    NotBlooming,
    /// Current stage's start time is unknown; refresh the snapshot.
    StageClockUnknown,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotOwner => f.write_str("Not your plant"),
            Self::Dead => f.write_str("Plant is dead"),
            Self::Starved => f.write_str("Plant has no water left"),
            Self::FullyGrown => f.write_str("Plant is already fully grown"),
            Self::NotYetDue { remaining_secs } => {
                write!(f, "Plant can grow in {}s", remaining_secs)
            }
            Self::NotBlooming => f.write_str("Plant is not ready to harvest"),
            Self::StageClockUnknown => f.write_str("Stage start time unknown"),
        }
    }
}

/// Outcome of a pre-submission check. The ledger remains authoritative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionGate {
    /// Submitting is expected to succeed.
    Allowed,
    /// Submitting would waste a transaction.
    Rejected(RejectReason),
}

impl ActionGate {
    /// True when allowed.
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }
}
