//! # LG-01 Contract Data Model
//!
//! Shared vocabulary between the LiskGarden ledger and the client.
//!
//! **Subsystem ID:** 01
//! **Architecture:** Pure data, no behaviour beyond validation
//!
//! ## Purpose
//!
//! - `Plant` snapshot and `GrowthStage` exactly as the ledger stores them
//! - Lifecycle constants mirrored from the deployed contract
//! - Deployment configuration with a single source for every constant
//! - ABI metadata and decoded ledger events
//!
//! ## Module Structure
//!
//! ```text
//! lg-01-contract-model/
//! ├── domain/     # Plant, GrowthStage, PlantId, constants, errors
//! ├── config      # ConfigOption, DeploymentConfig
//! ├── abi         # Read-only ledger interface description
//! └── events      # LedgerEvent
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod abi;
pub mod config;
pub mod domain;
pub mod events;

// Re-exports
pub use config::{ConfigOption, DeploymentConfig};
pub use domain::{
    format_ether, AccountAddress, GrowthStage, LifecycleConstants, ModelError, Plant, PlantId,
    StageTiming, MAX_WATER_LEVEL,
};
pub use events::LedgerEvent;
pub use primitive_types::U256;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
