//! # Domain Value Objects
//!
//! Immutable value types shared with the ledger.

use super::errors::ModelError;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;

/// Plant identifier assigned by the ledger's `plantCounter`.
///
/// Ids start at 1; 0 never denotes a plant, including on decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct PlantId(u64);

impl PlantId {
    /// Create a plant id, rejecting 0.
    pub fn new(id: u64) -> Result<Self, ModelError> {
        if id == 0 {
            return Err(ModelError::ZeroPlantId);
        }
        Ok(Self(id))
    }

    /// Raw id value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for PlantId {
    type Error = ModelError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlantId> for u64 {
    fn from(id: PlantId) -> Self {
        id.0
    }
}

/// 20-byte ledger account address.
///
/// Text form is `0x`-prefixed hex; parsing accepts either case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct AccountAddress([u8; 20]);

impl AccountAddress {
    /// The zero address, used by the ledger for missing plants.
    pub const ZERO: Self = Self([0u8; 20]);

    /// Wrap raw address bytes.
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Raw address bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// True for the zero address.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for AccountAddress {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| ModelError::InvalidAddress(s.to_string()))?;
        Ok(Self(bytes))
    }
}

/// Plant growth stage.
///
/// Ordered: a plant only ever moves forward through these values.
/// Discriminants match the ledger's `uint8` encoding. Serialized as the
/// lowercase label; decoding also accepts the raw `uint8`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", try_from = "StageRepr")]
pub enum GrowthStage {
    /// Freshly planted.
    #[default]
    Seed = 0,
    /// First growth.
    Sprout = 1,
    /// Growing.
    Growing = 2,
    /// Fully grown, harvestable.
    Blooming = 3,
}

impl GrowthStage {
    /// Every stage in lifecycle order.
    pub const ALL: [GrowthStage; 4] = [
        GrowthStage::Seed,
        GrowthStage::Sprout,
        GrowthStage::Growing,
        GrowthStage::Blooming,
    ];

    /// Position in the lifecycle (Seed = 0).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// The stage after this one, `None` for Blooming.
    pub fn next(self) -> Option<GrowthStage> {
        match self {
            Self::Seed => Some(Self::Sprout),
            Self::Sprout => Some(Self::Growing),
            Self::Growing => Some(Self::Blooming),
            Self::Blooming => None,
        }
    }

    /// Canonical lowercase label used for display and for keying
    /// stage-indexed behaviour.
    pub fn label(self) -> &'static str {
        match self {
            Self::Seed => "seed",
            Self::Sprout => "sprout",
            Self::Growing => "growing",
            Self::Blooming => "blooming",
        }
    }

    /// Blooming is the last stage.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Blooming)
    }
}

impl fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for GrowthStage {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Seed),
            1 => Ok(Self::Sprout),
            2 => Ok(Self::Growing),
            3 => Ok(Self::Blooming),
            other => Err(ModelError::UnknownGrowthStage(other)),
        }
    }
}

impl FromStr for GrowthStage {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.label() == s)
            .ok_or_else(|| ModelError::UnknownStageLabel(s.to_string()))
    }
}

/// Wire forms a stage may arrive in.
#[derive(Deserialize)]
#[serde(untagged)]
enum StageRepr {
    Index(u8),
    Label(String),
}

impl TryFrom<StageRepr> for GrowthStage {
    type Error = ModelError;

    fn try_from(repr: StageRepr) -> Result<Self, Self::Error> {
        match repr {
            StageRepr::Index(index) => Self::try_from(index),
            StageRepr::Label(label) => label.parse(),
        }
    }
}

/// Which clock the stage-advance rule reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageTiming {
    /// Stage k+1 is due once `k+1` stage durations have passed since
    /// planting. This is the deployed ledger's rule.
    #[default]
    Cumulative,
    /// The next stage is due once one stage duration has passed since
    /// the current stage began.
    PerStage,
}

impl FromStr for StageTiming {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cumulative" => Ok(Self::Cumulative),
            "per_stage" | "per-stage" => Ok(Self::PerStage),
            _ => Err(ModelError::InvalidConfig {
                key: "LG_STAGE_TIMING",
                value: s.to_string(),
                reason: "expected cumulative or per_stage".to_string(),
            }),
        }
    }
}
