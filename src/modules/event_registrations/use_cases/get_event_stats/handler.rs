use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::event_registrations::adapters::outbound::registration_ledger::RegistrationLedger;
use crate::modules::event_registrations::core::stats::EventStats;
use crate::modules::event_registrations::use_cases::application_error::ApplicationError;

pub struct GetEventStatsHandler<TLedger>
where
    TLedger: RegistrationLedger + ?Sized,
{
    ledger: Arc<TLedger>,
}

impl<TLedger> GetEventStatsHandler<TLedger>
where
    TLedger: RegistrationLedger + ?Sized,
{
    pub fn new(ledger: Arc<TLedger>) -> Self {
        Self { ledger }
    }

    /// Capacity and count come from one read, never two racing ones.
    #[instrument(skip(self))]
    pub async fn handle(&self, event_id: Uuid) -> Result<EventStats, ApplicationError> {
        let occupancy = self
            .ledger
            .occupancy(event_id)
            .await
            .map_err(|e| ApplicationError::from_store(e, "event"))?;
        Ok(EventStats::from(occupancy))
    }
}
