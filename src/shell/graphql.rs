use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::event_registrations::use_cases::cancel_registration::inbound::graphql::CancelRegistrationMutation;
use crate::modules::event_registrations::use_cases::create_event::inbound::graphql::CreateEventMutation;
use crate::modules::event_registrations::use_cases::get_event::inbound::graphql::GetEventQuery;
use crate::modules::event_registrations::use_cases::get_event_stats::inbound::graphql::GetEventStatsQuery;
use crate::modules::event_registrations::use_cases::list_upcoming_events::inbound::graphql::ListUpcomingEventsQuery;
use crate::modules::event_registrations::use_cases::register_participant::inbound::graphql::RegisterParticipantMutation;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(GetEventQuery, ListUpcomingEventsQuery, GetEventStatsQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    CreateEventMutation,
    RegisterParticipantMutation,
    CancelRegistrationMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

#[cfg(test)]
mod graphql_schema_tests {
    use super::*;
    use crate::tests::fixtures::state::make_test_state;
    use serde_json::json;

    async fn execute(schema: &AppSchema, query: &str) -> serde_json::Value {
        let response = schema.execute(query).await;
        serde_json::to_value(&response).unwrap()
    }

    #[tokio::test]
    async fn it_should_create_register_and_report_stats() {
        let (state, _) = make_test_state();
        let schema = build_schema(state);

        let created = execute(
            &schema,
            r#"mutation { createEvent(title: "Rust Meetup", scheduledTime: "2999-01-01T10:00:00Z", location: "Amsterdam", capacity: 4) }"#,
        )
        .await;
        let event_id = created["data"]["createEvent"].as_str().unwrap().to_string();

        let registered = execute(
            &schema,
            &format!(r#"mutation {{ registerParticipant(eventId: "{event_id}", userId: "u-1") }}"#),
        )
        .await;
        assert_eq!(registered["data"]["registerParticipant"], json!(true));

        let stats = execute(
            &schema,
            &format!(
                r#"{{ eventStats(eventId: "{event_id}") {{ totalRegistrations remainingCapacity percentageUsed }} }}"#
            ),
        )
        .await;
        assert_eq!(
            stats["data"]["eventStats"],
            json!({"totalRegistrations": 1, "remainingCapacity": 3, "percentageUsed": "25.00%"})
        );
    }

    #[tokio::test]
    async fn it_should_report_conflicts_with_an_error_code() {
        let (state, _) = make_test_state();
        let schema = build_schema(state);
        let created = execute(
            &schema,
            r#"mutation { createEvent(title: "Rust Meetup", scheduledTime: "2999-01-01T10:00:00Z", location: "Amsterdam", capacity: 1) }"#,
        )
        .await;
        let event_id = created["data"]["createEvent"].as_str().unwrap().to_string();
        let register = |user: &str| {
            format!(r#"mutation {{ registerParticipant(eventId: "{event_id}", userId: "{user}") }}"#)
        };
        execute(&schema, &register("u-1")).await;

        let full = execute(&schema, &register("u-2")).await;

        assert_eq!(full["errors"][0]["message"], "event is full");
        assert_eq!(full["errors"][0]["extensions"]["code"], "CONFLICT");
    }

    #[tokio::test]
    async fn it_should_list_upcoming_events() {
        let (state, _) = make_test_state();
        let schema = build_schema(state);
        for location in ["NY", "LA"] {
            execute(
                &schema,
                &format!(
                    r#"mutation {{ createEvent(title: "Meetup", scheduledTime: "2999-01-01T10:00:00Z", location: "{location}", capacity: 2) }}"#
                ),
            )
            .await;
        }

        let listed = execute(&schema, "{ upcomingEvents { location } }").await;

        assert_eq!(
            listed["data"]["upcomingEvents"],
            json!([{"location": "LA"}, {"location": "NY"}])
        );
    }
}
