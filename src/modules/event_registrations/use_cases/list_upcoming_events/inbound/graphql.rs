use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::event_registrations::adapters::inbound::graphql::{GqlEvent, gql_error};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ListUpcomingEventsQuery;

#[Object]
impl ListUpcomingEventsQuery {
    async fn upcoming_events(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let events = state
            .list_upcoming_events
            .handle(Utc::now())
            .await
            .map_err(gql_error)?;
        Ok(events.into_iter().map(Into::into).collect())
    }
}
