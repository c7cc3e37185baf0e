//! # LG-02 Lifecycle Projection
//!
//! Predicts a plant's state between confirmed ledger reads.
//!
//! **Subsystem ID:** 02
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! The ledger only recomputes water and growth when a transaction touches
//! a plant. Between reads the client projects, from the last snapshot and
//! the current time, what the ledger would compute:
//! - staircase water depletion and time to the next drop
//! - alive / wilting / dead
//! - stage-advance and harvest eligibility
//! - action gating and user advisories
//!
//! Projections are pure in `(plant, now)` and never mutate a snapshot.
//! The ledger stays authoritative.
//!
//! ## Module Structure
//!
//! ```text
//! lg-02-lifecycle-projection/
//! ├── domain/          # Projection results, config, errors, garden
//! ├── algorithms/      # Water, vitality, growth, gating, advisories
//! ├── ports/           # LifecycleProjectionApi, PlantReader, Notifier
//! ├── adapters/        # In-memory reader, notifiers
//! └── service          # ProjectionEngine, GardenService
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{InMemoryPlantReader, RecordingNotifier, TracingNotifier};
pub use algorithms::{
    advise, check_action, is_projected_dead, project, project_harvest_eligibility,
    project_stage, project_stage_eligibility, project_vitality, project_water_level,
    time_to_next_water_drop, time_to_stage_eligibility, time_until_dry,
};
pub use domain::{
    Action, ActionGate, AdvisoryThresholds, EventOutcome, Garden, InvalidInput, Notification,
    PlantProjection, ProjectionConfig, ProjectionError, RejectReason, ServiceError, Vitality,
};
pub use ports::{LifecycleProjectionApi, Notifier, PlantReader};
pub use service::{GardenService, ProjectionEngine};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
