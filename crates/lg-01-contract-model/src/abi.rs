//! # Contract ABI
//!
//! The LiskGarden ledger interface as read-only metadata. Nothing here
//! encodes calls; it only describes them so adapters and tooling share one
//! versioned source.

use serde_json::{json, Value};

/// ABI revision this table describes.
pub const ABI_VERSION: &str = "lisk-garden-1";

/// Solidity state mutability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateMutability {
    /// Read-only, no state access beyond storage reads.
    View,
    /// Pure computation.
    Pure,
    /// State-changing, rejects value.
    NonPayable,
    /// State-changing, accepts value.
    Payable,
}

impl StateMutability {
    /// ABI JSON spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Pure => "pure",
            Self::NonPayable => "nonpayable",
            Self::Payable => "payable",
        }
    }

    /// Whether calling it costs a transaction.
    pub fn is_transaction(self) -> bool {
        matches!(self, Self::NonPayable | Self::Payable)
    }
}

/// A typed input, output or event field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AbiParam {
    /// Parameter name (may be empty).
    pub name: &'static str,
    /// Canonical ABI type.
    pub kind: &'static str,
    /// Solidity-side type.
    pub internal_type: &'static str,
    /// Indexed event topic.
    pub indexed: bool,
    /// Tuple members.
    pub components: &'static [AbiParam],
}

impl AbiParam {
    const fn new(name: &'static str, kind: &'static str, internal_type: &'static str) -> Self {
        Self {
            name,
            kind,
            internal_type,
            indexed: false,
            components: &[],
        }
    }

    const fn indexed(name: &'static str, kind: &'static str, internal_type: &'static str) -> Self {
        Self {
            name,
            kind,
            internal_type,
            indexed: true,
            components: &[],
        }
    }

    fn to_json(self, with_indexed: bool) -> Value {
        let mut value = json!({
            "internalType": self.internal_type,
            "name": self.name,
            "type": self.kind,
        });
        if with_indexed {
            value["indexed"] = json!(self.indexed);
        }
        if !self.components.is_empty() {
            value["components"] = Value::Array(
                self.components
                    .iter()
                    .map(|c| c.to_json(false))
                    .collect(),
            );
        }
        value
    }
}

/// A contract function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AbiFunction {
    /// Function name.
    pub name: &'static str,
    /// Inputs in call order.
    pub inputs: &'static [AbiParam],
    /// Outputs in return order.
    pub outputs: &'static [AbiParam],
    /// Mutability.
    pub mutability: StateMutability,
}

impl AbiFunction {
    /// Canonical signature, e.g. `waterPlant(uint256)`.
    pub fn signature(&self) -> String {
        let inputs: Vec<_> = self.inputs.iter().map(|p| p.kind).collect();
        format!("{}({})", self.name, inputs.join(","))
    }
}

/// A contract event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AbiEvent {
    /// Event name.
    pub name: &'static str,
    /// Fields in log order.
    pub inputs: &'static [AbiParam],
}

impl AbiEvent {
    /// Canonical signature, e.g. `PlantDied(uint256)`.
    pub fn signature(&self) -> String {
        let inputs: Vec<_> = self.inputs.iter().map(|p| p.kind).collect();
        format!("{}({})", self.name, inputs.join(","))
    }
}

const PLANT_ID: AbiParam = AbiParam::new("plantId", "uint256", "uint256");
const UINT256_OUT: AbiParam = AbiParam::new("", "uint256", "uint256");
const UINT8_OUT: AbiParam = AbiParam::new("", "uint8", "uint8");

const PLANT_COMPONENTS: &[AbiParam] = &[
    AbiParam::new("id", "uint256", "uint256"),
    AbiParam::new("owner", "address", "address"),
    AbiParam::new("stage", "uint8", "enum LiskGarden.GrowthStage"),
    AbiParam::new("plantedDate", "uint256", "uint256"),
    AbiParam::new("lastWatered", "uint256", "uint256"),
    AbiParam::new("waterLevel", "uint8", "uint8"),
    AbiParam::new("exists", "bool", "bool"),
    AbiParam::new("isDead", "bool", "bool"),
];

const PLANT_TUPLE: AbiParam = AbiParam {
    name: "",
    kind: "tuple",
    internal_type: "struct LiskGarden.Plant",
    indexed: false,
    components: PLANT_COMPONENTS,
};

/// Every LiskGarden function.
pub const FUNCTIONS: &[AbiFunction] = &[
    AbiFunction {
        name: "HARVEST_REWARD",
        inputs: &[],
        outputs: &[UINT256_OUT],
        mutability: StateMutability::View,
    },
    AbiFunction {
        name: "PLANT_PRICE",
        inputs: &[],
        outputs: &[UINT256_OUT],
        mutability: StateMutability::View,
    },
    AbiFunction {
        name: "STAGE_DURATION",
        inputs: &[],
        outputs: &[UINT256_OUT],
        mutability: StateMutability::View,
    },
    AbiFunction {
        name: "WATER_DEPLETION_RATE",
        inputs: &[],
        outputs: &[UINT8_OUT],
        mutability: StateMutability::View,
    },
    AbiFunction {
        name: "WATER_DEPLETION_TIME",
        inputs: &[],
        outputs: &[UINT256_OUT],
        mutability: StateMutability::View,
    },
    AbiFunction {
        name: "calculateWaterLevel",
        inputs: &[PLANT_ID],
        outputs: &[UINT8_OUT],
        mutability: StateMutability::View,
    },
    AbiFunction {
        name: "getPlant",
        inputs: &[PLANT_ID],
        outputs: &[PLANT_TUPLE],
        mutability: StateMutability::View,
    },
    AbiFunction {
        name: "getUserPlants",
        inputs: &[AbiParam::new("user", "address", "address")],
        outputs: &[AbiParam::new("", "uint256[]", "uint256[]")],
        mutability: StateMutability::View,
    },
    AbiFunction {
        name: "plantCounter",
        inputs: &[],
        outputs: &[UINT256_OUT],
        mutability: StateMutability::View,
    },
    AbiFunction {
        name: "plantSeed",
        inputs: &[],
        outputs: &[UINT256_OUT],
        mutability: StateMutability::Payable,
    },
    AbiFunction {
        name: "waterPlant",
        inputs: &[PLANT_ID],
        outputs: &[],
        mutability: StateMutability::NonPayable,
    },
    AbiFunction {
        name: "updatePlantStage",
        inputs: &[PLANT_ID],
        outputs: &[],
        mutability: StateMutability::NonPayable,
    },
    AbiFunction {
        name: "harvestPlant",
        inputs: &[PLANT_ID],
        outputs: &[],
        mutability: StateMutability::NonPayable,
    },
];

/// Every LiskGarden event.
pub const EVENTS: &[AbiEvent] = &[
    AbiEvent {
        name: "PlantDied",
        inputs: &[AbiParam::indexed("plantId", "uint256", "uint256")],
    },
    AbiEvent {
        name: "PlantHarvested",
        inputs: &[
            AbiParam::indexed("plantId", "uint256", "uint256"),
            AbiParam::indexed("owner", "address", "address"),
            AbiParam::new("reward", "uint256", "uint256"),
        ],
    },
    AbiEvent {
        name: "PlantSeeded",
        inputs: &[
            AbiParam::indexed("owner", "address", "address"),
            AbiParam::indexed("plantId", "uint256", "uint256"),
        ],
    },
    AbiEvent {
        name: "PlantWatered",
        inputs: &[
            AbiParam::indexed("plantId", "uint256", "uint256"),
            AbiParam::new("newWaterLevel", "uint8", "uint8"),
        ],
    },
    AbiEvent {
        name: "StageAdvanced",
        inputs: &[
            AbiParam::indexed("plantId", "uint256", "uint256"),
            AbiParam::new("newStage", "uint8", "enum LiskGarden.GrowthStage"),
        ],
    },
];

/// Look up a function by name.
pub fn function(name: &str) -> Option<&'static AbiFunction> {
    FUNCTIONS.iter().find(|f| f.name == name)
}

/// Look up an event by name.
pub fn event(name: &str) -> Option<&'static AbiEvent> {
    EVENTS.iter().find(|e| e.name == name)
}

/// The ABI as the standard Ethereum JSON array.
pub fn abi_json() -> Value {
    let mut entries = vec![json!({
        "inputs": [],
        "stateMutability": "nonpayable",
        "type": "constructor",
    })];

    entries.extend(EVENTS.iter().map(|e| {
        json!({
            "anonymous": false,
            "inputs": e.inputs.iter().map(|p| p.to_json(true)).collect::<Vec<_>>(),
            "name": e.name,
            "type": "event",
        })
    }));

    entries.extend(FUNCTIONS.iter().map(|f| {
        json!({
            "inputs": f.inputs.iter().map(|p| p.to_json(false)).collect::<Vec<_>>(),
            "name": f.name,
            "outputs": f.outputs.iter().map(|p| p.to_json(false)).collect::<Vec<_>>(),
            "stateMutability": f.mutability.as_str(),
            "type": "function",
        })
    }));

    Value::Array(entries)
}
