use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::event_registrations::adapters::inbound::graphql::gql_error;
use crate::modules::event_registrations::adapters::inbound::http::event_id_from_path;
use crate::modules::event_registrations::use_cases::register_participant::command::RegisterParticipant;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RegisterParticipantMutation;

#[Object]
impl RegisterParticipantMutation {
    async fn register_participant(
        &self,
        context: &Context<'_>,
        event_id: ID,
        user_id: ID,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let command = RegisterParticipant {
            event_id: event_id_from_path(&event_id).map_err(gql_error)?,
            participant_id: user_id.0,
            now: Utc::now(),
        };
        state
            .register_participant
            .handle(command)
            .await
            .map_err(gql_error)?;
        Ok(true)
    }
}
