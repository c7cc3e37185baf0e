//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits.

mod notifier;
mod plant_reader;

pub use notifier::{RecordingNotifier, TracingNotifier};
pub use plant_reader::InMemoryPlantReader;
