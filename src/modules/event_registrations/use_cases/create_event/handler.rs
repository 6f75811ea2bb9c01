use std::sync::Arc;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::modules::event_registrations::adapters::outbound::event_store::EventStore;
use crate::modules::event_registrations::adapters::outbound::store_error::StoreError;
use crate::modules::event_registrations::core::event::{Event, EventDraft};
use crate::modules::event_registrations::use_cases::application_error::ApplicationError;

pub struct CreateEventHandler<TEventStore>
where
    TEventStore: EventStore + ?Sized,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> CreateEventHandler<TEventStore>
where
    TEventStore: EventStore + ?Sized,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    /// Validates before touching the store.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn handle(&self, draft: EventDraft) -> Result<Event, ApplicationError> {
        let event = draft.validate(Uuid::now_v7())?;
        self.event_store
            .insert(&event)
            .await
            .map_err(|e| match e {
                StoreError::Duplicate => {
                    error!(event_id = %event.id, "event id already taken");
                    ApplicationError::Internal
                }
                other => ApplicationError::from_store(other, "event"),
            })?;
        info!(event_id = %event.id, capacity = event.capacity, "event created");
        Ok(event)
    }
}
