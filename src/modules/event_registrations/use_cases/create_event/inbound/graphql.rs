use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::event_registrations::adapters::inbound::graphql::gql_error;
use crate::modules::event_registrations::core::event::EventDraft;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateEventMutation;

#[Object]
impl CreateEventMutation {
    async fn create_event(
        &self,
        context: &Context<'_>,
        title: String,
        scheduled_time: String,
        location: String,
        capacity: i64,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let draft = EventDraft {
            title,
            scheduled_time,
            location,
            capacity,
        };
        let event = state.create_event.handle(draft).await.map_err(gql_error)?;
        Ok(ID(event.id.to_string()))
    }
}
