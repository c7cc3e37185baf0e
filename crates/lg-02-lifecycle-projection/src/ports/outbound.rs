//! # Outbound Ports
//!
//! Collaborators the subsystem depends on but does not own.

use crate::domain::{Notification, ServiceError};
use async_trait::async_trait;
use lg_01_contract_model::{AccountAddress, Plant, PlantId};

/// Chain-reading collaborator - outbound port.
///
/// The sole writer of snapshot state. Mirrors the ledger's `getPlant` and
/// `getUserPlants` views.
#[async_trait]
pub trait PlantReader: Send + Sync {
    /// Snapshot for `id`. Unknown ids come back with `exists == false`.
    async fn get_plant(&self, id: PlantId) -> Result<Plant, ServiceError>;

    /// Ids the ledger lists for `owner`.
    async fn get_user_plants(&self, owner: AccountAddress) -> Result<Vec<PlantId>, ServiceError>;
}

/// Notification collaborator - outbound port.
///
/// Receives message content only; queueing and deduplication are the
/// implementor's concern.
pub trait Notifier: Send + Sync {
    /// Surface one notification.
    fn notify(&self, notification: &Notification);
}
