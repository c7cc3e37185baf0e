//! # Domain Module
//!
//! Errors, invariants, results and the working set of the projection engine.

pub mod config;
pub mod errors;
pub mod garden;
pub mod invariants;
pub mod notification;
pub mod value_objects;

pub use config::ProjectionConfig;
pub use errors::*;
pub use garden::{EventOutcome, Garden};
pub use invariants::*;
pub use notification::{AdvisoryThresholds, Notification};
pub use value_objects::*;
