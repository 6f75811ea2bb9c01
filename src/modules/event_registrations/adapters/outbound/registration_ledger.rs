use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::event_registrations::adapters::outbound::store_error::StoreError;
use crate::modules::event_registrations::core::admission::Admission;
use crate::modules::event_registrations::core::registration::Registration;
use crate::modules::event_registrations::core::stats::Occupancy;

#[async_trait]
pub trait RegistrationLedger: Send + Sync {
    async fn count_for(&self, event_id: Uuid) -> Result<u32, StoreError>;

    async fn exists(&self, participant_id: &str, event_id: Uuid) -> Result<bool, StoreError>;

    /// Unconditional insert. Fails with `Duplicate` on a second insert of the same pair
    /// and with `NotFound` when the event does not exist.
    async fn insert(
        &self,
        participant_id: &str,
        event_id: Uuid,
        created_at: DateTime<Utc>,
    ) -> Result<Registration, StoreError>;

    async fn delete(&self, participant_id: &str, event_id: Uuid) -> Result<(), StoreError>;

    /// Registrations for one event, oldest first.
    async fn registrants(&self, event_id: Uuid) -> Result<Vec<Registration>, StoreError>;

    /// Insert iff the event has not occurred, a seat is left and the participant is not
    /// registered yet. Check and insert form one atomic unit against concurrent admits.
    async fn admit(
        &self,
        event_id: Uuid,
        participant_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Admission, StoreError>;

    /// Capacity and count of one event taken from a single snapshot.
    async fn occupancy(&self, event_id: Uuid) -> Result<Occupancy, StoreError>;
}
