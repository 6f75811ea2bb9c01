use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::event_registrations::adapters::outbound::store_error::StoreError;
use crate::modules::event_registrations::core::event::Event;

#[async_trait]
pub trait EventStore: Send + Sync {
    async fn insert(&self, event: &Event) -> Result<(), StoreError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Event, StoreError>;

    /// Events strictly after `now`, ordered by scheduled time and then location.
    async fn list_upcoming(&self, now: DateTime<Utc>) -> Result<Vec<Event>, StoreError>;
}
