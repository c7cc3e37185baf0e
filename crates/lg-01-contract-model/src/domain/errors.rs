//! # Domain Errors
//!
//! Error types for decoding and validating contract data.

use thiserror::Error;

/// Contract data model errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The ledger encodes `GrowthStage` as `uint8`; only 0..=3 are defined.
    #[error("Unknown growth stage: {0}")]
    UnknownGrowthStage(u8),

    /// Label did not match any canonical stage label.
    #[error("Unknown growth stage label: {0}")]
    UnknownStageLabel(String),

    /// Plant ids start at 1.
    #[error("Invalid plant id: 0")]
    ZeroPlantId,

    /// Address was not 20 bytes of hex.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Water level outside [0, 100].
    #[error("Water level out of range: {0}")]
    WaterLevelOutOfRange(u8),

    /// A snapshot timestamp precedes the planting time.
    #[error("Timestamp {field}={value} precedes planted_date={planted_date}")]
    TimestampBeforePlanting {
        /// Offending field.
        field: &'static str,
        /// Offending value.
        value: u64,
        /// Planting time.
        planted_date: u64,
    },

    /// Lifecycle constants that the depletion or growth rule cannot use.
    #[error("Invalid lifecycle constant {name}: {reason}")]
    InvalidConstant {
        /// Constant name.
        name: &'static str,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A deployment configuration value could not be parsed.
    #[error("Invalid config {key}={value}: {reason}")]
    InvalidConfig {
        /// Environment key.
        key: &'static str,
        /// Raw value.
        value: String,
        /// Parse failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_stage_error() {
        let err = ModelError::UnknownGrowthStage(7);
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_timestamp_before_planting_error() {
        let err = ModelError::TimestampBeforePlanting {
            field: "last_watered",
            value: 10,
            planted_date: 20,
        };
        assert_eq!(
            err.to_string(),
            "Timestamp last_watered=10 precedes planted_date=20"
        );
    }

    #[test]
    fn test_invalid_config_error() {
        let err = ModelError::InvalidConfig {
            key: "LG_STAGE_DURATION_SECS",
            value: "abc".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert!(err.to_string().contains("LG_STAGE_DURATION_SECS=abc"));
    }
}
