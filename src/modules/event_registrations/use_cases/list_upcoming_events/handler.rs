use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::instrument;

use crate::modules::event_registrations::adapters::outbound::event_store::EventStore;
use crate::modules::event_registrations::core::event::Event;
use crate::modules::event_registrations::use_cases::application_error::ApplicationError;

pub struct ListUpcomingEventsHandler<TEventStore>
where
    TEventStore: EventStore + ?Sized,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> ListUpcomingEventsHandler<TEventStore>
where
    TEventStore: EventStore + ?Sized,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    #[instrument(skip(self))]
    pub async fn handle(&self, now: DateTime<Utc>) -> Result<Vec<Event>, ApplicationError> {
        self.event_store
            .list_upcoming(now)
            .await
            .map_err(|e| ApplicationError::from_store(e, "event"))
    }
}
