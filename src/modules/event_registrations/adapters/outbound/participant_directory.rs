use async_trait::async_trait;

use crate::modules::event_registrations::adapters::outbound::store_error::StoreError;
use crate::modules::event_registrations::core::participant::Participant;

/// Read access to participants owned by the user directory.
#[async_trait]
pub trait ParticipantDirectory: Send + Sync {
    /// Unknown ids are left out of the result.
    async fn find_many(&self, ids: &[String]) -> Result<Vec<Participant>, StoreError>;
}
