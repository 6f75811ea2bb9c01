use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::event_registrations::adapters::outbound::event_store::EventStore;
use crate::modules::event_registrations::adapters::outbound::participant_directory::ParticipantDirectory;
use crate::modules::event_registrations::adapters::outbound::registration_ledger::RegistrationLedger;
use crate::modules::event_registrations::core::event::Event;
use crate::modules::event_registrations::core::participant::Participant;
use crate::modules::event_registrations::use_cases::application_error::ApplicationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    pub event: Event,
    /// In registration order. Participants unknown to the directory are left out.
    #[serde(rename = "registeredUsers")]
    pub registrants: Vec<Participant>,
}

pub struct GetEventHandler<TEventStore, TLedger, TDirectory>
where
    TEventStore: EventStore + ?Sized,
    TLedger: RegistrationLedger + ?Sized,
    TDirectory: ParticipantDirectory + ?Sized,
{
    event_store: Arc<TEventStore>,
    ledger: Arc<TLedger>,
    directory: Arc<TDirectory>,
}

impl<TEventStore, TLedger, TDirectory> GetEventHandler<TEventStore, TLedger, TDirectory>
where
    TEventStore: EventStore + ?Sized,
    TLedger: RegistrationLedger + ?Sized,
    TDirectory: ParticipantDirectory + ?Sized,
{
    pub fn new(
        event_store: Arc<TEventStore>,
        ledger: Arc<TLedger>,
        directory: Arc<TDirectory>,
    ) -> Self {
        Self {
            event_store,
            ledger,
            directory,
        }
    }

    #[instrument(skip(self))]
    pub async fn handle(&self, event_id: Uuid) -> Result<EventDetails, ApplicationError> {
        let event = self
            .event_store
            .get_by_id(event_id)
            .await
            .map_err(|e| ApplicationError::from_store(e, "event"))?;
        let participant_ids: Vec<String> = self
            .ledger
            .registrants(event_id)
            .await
            .map_err(|e| ApplicationError::from_store(e, "event"))?
            .into_iter()
            .map(|registration| registration.participant_id)
            .collect();
        let registrants = self
            .directory
            .find_many(&participant_ids)
            .await
            .map_err(|e| ApplicationError::from_store(e, "participant"))?;
        Ok(EventDetails { event, registrants })
    }
}
