//! # Domain Module
//!
//! Plant entity, growth stages and the ledger's lifecycle constants.

pub mod constants;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use constants::*;
pub use entities::*;
pub use errors::*;
pub use value_objects::*;
