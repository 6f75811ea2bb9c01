use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    response::Html,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::event_registrations::use_cases::cancel_registration::inbound::http as cancel_http;
use crate::modules::event_registrations::use_cases::create_event::inbound::http as create_http;
use crate::modules::event_registrations::use_cases::get_event::inbound::http as get_http;
use crate::modules::event_registrations::use_cases::get_event_stats::inbound::http as stats_http;
use crate::modules::event_registrations::use_cases::list_upcoming_events::inbound::http as upcoming_http;
use crate::modules::event_registrations::use_cases::register_participant::inbound::http as register_http;
use crate::shell::graphql::{AppSchema, build_schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/events", post(create_http::handle))
        // Static segment wins over the `{id}` capture.
        .route("/events/upcoming", get(upcoming_http::handle))
        .route("/events/{id}", get(get_http::handle))
        .route("/events/{id}/register", post(register_http::handle))
        .route("/events/{id}/cancel", delete(cancel_http::handle))
        .route("/events/{id}/stats", get(stats_http::handle))
        .with_state(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
