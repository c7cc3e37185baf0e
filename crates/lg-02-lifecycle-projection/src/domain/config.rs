//! Projection configuration.

use lg_01_contract_model::{DeploymentConfig, LifecycleConstants, ModelError, StageTiming};

/// Rules the engine mirrors. Constructed only through validation, so the
/// depletion interval and stage duration are never zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectionConfig {
    constants: LifecycleConstants,
    stage_timing: StageTiming,
}

impl ProjectionConfig {
    /// Validate and wrap the ledger constants.
    pub fn new(constants: LifecycleConstants, stage_timing: StageTiming) -> Result<Self, ModelError> {
        constants.validate()?;
        Ok(Self {
            constants,
            stage_timing,
        })
    }

    /// Build from the deployment configuration.
    pub fn from_deployment(deployment: &DeploymentConfig) -> Result<Self, ModelError> {
        Self::new(deployment.constants.clone(), deployment.stage_timing)
    }

    /// Ledger constants.
    pub fn constants(&self) -> &LifecycleConstants {
        &self.constants
    }

    /// Stage-advance clock.
    pub fn stage_timing(&self) -> StageTiming {
        self.stage_timing
    }

    pub(crate) fn interval_secs(&self) -> u64 {
        self.constants.water_depletion_interval_secs
    }

    pub(crate) fn rate_percent(&self) -> u64 {
        u64::from(self.constants.water_depletion_rate_percent)
    }

    pub(crate) fn stage_duration_secs(&self) -> u64 {
        self.constants.stage_duration_secs
    }
}
