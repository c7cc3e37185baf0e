//! # Algorithms Module
//!
//! Pure projection functions. No I/O, no shared state: the same
//! `(config, plant, now)` always yields the same result.

pub mod advisory;
pub mod gating;
pub mod growth;
pub mod projection;
pub mod vitality;
pub mod water;

pub use advisory::advise;
pub use gating::check_action;
pub use growth::{
    project_harvest_eligibility, project_stage, project_stage_eligibility,
    time_to_stage_eligibility,
};
pub use projection::project;
pub use vitality::{is_projected_dead, project_vitality};
pub use water::{project_water_level, time_to_next_water_drop, time_until_dry};
