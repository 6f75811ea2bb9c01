use async_graphql::{ErrorExtensions, ID, SimpleObject};
use chrono::{DateTime, Utc};

use crate::modules::event_registrations::core::event::Event;
use crate::modules::event_registrations::core::participant::Participant;
use crate::modules::event_registrations::use_cases::application_error::ApplicationError;

#[derive(SimpleObject, Debug, Clone)]
pub struct GqlEvent {
    pub id: ID,
    pub title: String,
    pub scheduled_time: DateTime<Utc>,
    pub location: String,
    pub capacity: u32,
}

impl From<Event> for GqlEvent {
    fn from(event: Event) -> Self {
        Self {
            id: ID(event.id.to_string()),
            title: event.title,
            scheduled_time: event.scheduled_time,
            location: event.location,
            capacity: event.capacity,
        }
    }
}

#[derive(SimpleObject, Debug, Clone)]
pub struct GqlParticipant {
    pub id: ID,
    pub name: String,
    pub email: String,
}

impl From<Participant> for GqlParticipant {
    fn from(participant: Participant) -> Self {
        Self {
            id: ID(participant.id),
            name: participant.name,
            email: participant.email,
        }
    }
}

/// GraphQL error carrying the application error kind under `extensions.code`.
pub fn gql_error(err: ApplicationError) -> async_graphql::Error {
    let code = err.code();
    async_graphql::Error::new(err.to_string()).extend_with(|_, extensions| extensions.set("code", code))
}
