use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::event_registrations::adapters::inbound::graphql::gql_error;
use crate::modules::event_registrations::adapters::inbound::http::event_id_from_path;
use crate::modules::event_registrations::core::stats::EventStats;
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct GqlEventStats {
    pub total_registrations: u32,
    pub remaining_capacity: u32,
    pub percentage_used: String,
}

impl From<EventStats> for GqlEventStats {
    fn from(stats: EventStats) -> Self {
        Self {
            total_registrations: stats.total_registrations,
            remaining_capacity: stats.remaining_capacity,
            percentage_used: stats.percentage_used,
        }
    }
}

#[derive(Default)]
pub struct GetEventStatsQuery;

#[Object]
impl GetEventStatsQuery {
    async fn event_stats(&self, context: &Context<'_>, event_id: ID) -> GqlResult<GqlEventStats> {
        let state = context.data_unchecked::<AppState>();
        let event_id = event_id_from_path(&event_id).map_err(gql_error)?;
        let stats = state
            .get_event_stats
            .handle(event_id)
            .await
            .map_err(gql_error)?;
        Ok(stats.into())
    }
}
