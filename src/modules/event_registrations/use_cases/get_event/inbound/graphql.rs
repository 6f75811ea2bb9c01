use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::event_registrations::adapters::inbound::graphql::{
    GqlEvent, GqlParticipant, gql_error,
};
use crate::modules::event_registrations::adapters::inbound::http::event_id_from_path;
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct GqlEventDetails {
    pub event: GqlEvent,
    pub registered_users: Vec<GqlParticipant>,
}

#[derive(Default)]
pub struct GetEventQuery;

#[Object]
impl GetEventQuery {
    async fn event(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlEventDetails> {
        let state = context.data_unchecked::<AppState>();
        let event_id = event_id_from_path(&id).map_err(gql_error)?;
        let details = state.get_event.handle(event_id).await.map_err(gql_error)?;
        Ok(GqlEventDetails {
            event: details.event.into(),
            registered_users: details.registrants.into_iter().map(Into::into).collect(),
        })
    }
}
