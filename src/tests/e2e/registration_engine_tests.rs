// End to end scenarios through the wired application state, on a
// multi-threaded runtime so registrations really race.

use chrono::Duration;
use std::sync::Arc;
use tokio::task::JoinSet;
use uuid::Uuid;

use crate::modules::event_registrations::adapters::outbound::in_memory::InMemoryEventRegistrations;
use crate::modules::event_registrations::adapters::outbound::registration_ledger::RegistrationLedger;
use crate::modules::event_registrations::core::registration::Registration;
use crate::modules::event_registrations::use_cases::application_error::{
    ApplicationError, ConflictReason,
};
use crate::modules::event_registrations::use_cases::cancel_registration::command::CancelRegistration;
use crate::modules::event_registrations::use_cases::register_participant::command::RegisterParticipant;
use crate::modules::event_registrations::use_cases::register_participant::retry_policy::RetryPolicy;
use crate::shell::state::AppState;
use crate::tests::fixtures::commands::create_event::EventDraftBuilder;
use crate::tests::fixtures::events::fixed_now;

fn setup() -> (AppState, Arc<InMemoryEventRegistrations>) {
    let store = Arc::new(InMemoryEventRegistrations::new());
    store.set_admission_delay_ms(1);
    (AppState::new(store.clone(), RetryPolicy::default()), store)
}

async fn create_event(state: &AppState, capacity: i64) -> Uuid {
    state
        .create_event
        .handle(EventDraftBuilder::new().capacity(capacity).build())
        .await
        .expect("create failed")
        .id
}

async fn register_concurrently(
    state: &AppState,
    event_id: Uuid,
    participant_ids: Vec<String>,
) -> Vec<Result<Registration, ApplicationError>> {
    let mut tasks = JoinSet::new();
    for participant_id in participant_ids {
        let state = state.clone();
        tasks.spawn(async move {
            state
                .register_participant
                .handle(RegisterParticipant {
                    event_id,
                    participant_id,
                    now: fixed_now(),
                })
                .await
        });
    }
    let mut results = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        results.push(joined.expect("register task panicked"));
    }
    results
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn it_should_admit_exactly_capacity_out_of_many_concurrent_registrations() {
    let (state, store) = setup();
    let capacity = 5;
    let event_id = create_event(&state, capacity).await;
    let participants = (0..25).map(|n| format!("user-{n}")).collect();

    let results = register_concurrently(&state, event_id, participants).await;

    let admitted = results.iter().filter(|result| result.is_ok()).count();
    assert_eq!(admitted, 5);
    assert!(
        results
            .iter()
            .filter_map(|result| result.as_ref().err())
            .all(|err| *err == ApplicationError::Conflict(ConflictReason::EventFull))
    );
    assert_eq!(store.count_for(event_id).await.unwrap(), 5);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn it_should_admit_one_of_two_concurrent_duplicates() {
    let (state, store) = setup();
    let event_id = create_event(&state, 10).await;

    let results =
        register_concurrently(&state, event_id, vec!["user-1".into(), "user-1".into()]).await;

    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
    assert!(results.iter().any(|result| {
        *result == Err(ApplicationError::Conflict(ConflictReason::AlreadyRegistered))
    }));
    assert_eq!(store.count_for(event_id).await.unwrap(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn it_should_fill_a_two_seat_event_from_three_participants() {
    let (state, store) = setup();
    let event_id = create_event(&state, 2).await;

    let results = register_concurrently(
        &state,
        event_id,
        vec!["user-1".into(), "user-2".into(), "user-3".into()],
    )
    .await;

    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 2);
    assert_eq!(
        results
            .iter()
            .filter(|result| matches!(result, Err(ApplicationError::Conflict(_))))
            .count(),
        1
    );
    assert_eq!(store.count_for(event_id).await.unwrap(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn it_should_survive_transient_conflicts_under_contention() {
    let (state, store) = setup();
    let event_id = create_event(&state, 3).await;
    store.fail_next_admissions(2);

    let results = register_concurrently(
        &state,
        event_id,
        (0..6).map(|n| format!("user-{n}")).collect(),
    )
    .await;

    // Each task gets three attempts, so two injected conflicts never exhaust one.
    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 3);
    assert_eq!(store.count_for(event_id).await.unwrap(), 3);
}

#[tokio::test]
async fn it_should_report_stats_for_three_of_ten_seats() {
    let (state, _) = setup();
    let event_id = create_event(&state, 10).await;
    for participant in ["a", "b", "c"] {
        state
            .register_participant
            .handle(RegisterParticipant {
                event_id,
                participant_id: participant.into(),
                now: fixed_now(),
            })
            .await
            .unwrap();
    }

    let stats = state.get_event_stats.handle(event_id).await.unwrap();

    assert_eq!(stats.total_registrations, 3);
    assert_eq!(stats.remaining_capacity, 7);
    assert_eq!(stats.percentage_used, "30.00%");
}

#[tokio::test]
async fn it_should_list_upcoming_events_by_time_then_location() {
    let (state, _) = setup();
    let in_one_hour = (fixed_now() + Duration::hours(1)).to_rfc3339();
    let an_hour_ago = (fixed_now() - Duration::hours(1)).to_rfc3339();
    let mut ids = Vec::new();
    for (when, location) in [
        (&in_one_hour, "NY"),
        (&in_one_hour, "LA"),
        (&an_hour_ago, "Anywhere"),
    ] {
        let event = state
            .create_event
            .handle(
                EventDraftBuilder::new()
                    .scheduled_time(when.as_str())
                    .location(location)
                    .build(),
            )
            .await
            .unwrap();
        ids.push(event.id);
    }

    let upcoming = state.list_upcoming_events.handle(fixed_now()).await.unwrap();

    let listed: Vec<Uuid> = upcoming.iter().map(|event| event.id).collect();
    assert_eq!(listed, vec![ids[1], ids[0]]);
}

#[tokio::test]
async fn it_should_leave_the_ledger_alone_when_cancelling_a_missing_registration() {
    let (state, store) = setup();
    let event_id = create_event(&state, 4).await;
    state
        .register_participant
        .handle(RegisterParticipant {
            event_id,
            participant_id: "user-1".into(),
            now: fixed_now(),
        })
        .await
        .unwrap();

    let result = state
        .cancel_registration
        .handle(CancelRegistration {
            event_id,
            participant_id: "user-2".into(),
        })
        .await;

    assert_eq!(result, Err(ApplicationError::NotFound("registration")));
    assert_eq!(store.count_for(event_id).await.unwrap(), 1);
}

#[tokio::test]
async fn it_should_refuse_a_past_event_even_with_seats_left() {
    let (state, store) = setup();
    let event_id = create_event(&state, 1000).await;

    let result = state
        .register_participant
        .handle(RegisterParticipant {
            event_id,
            participant_id: "user-1".into(),
            now: fixed_now() + Duration::days(1),
        })
        .await;

    assert_eq!(
        result,
        Err(ApplicationError::Conflict(ConflictReason::EventAlreadyOccurred))
    );
    assert_eq!(store.count_for(event_id).await.unwrap(), 0);
}

#[tokio::test]
async fn it_should_let_a_cancelled_participant_register_again() {
    let (state, _) = setup();
    let event_id = create_event(&state, 1).await;
    let register = || RegisterParticipant {
        event_id,
        participant_id: "user-1".into(),
        now: fixed_now(),
    };
    state.register_participant.handle(register()).await.unwrap();

    state
        .cancel_registration
        .handle(CancelRegistration {
            event_id,
            participant_id: "user-1".into(),
        })
        .await
        .unwrap();

    assert!(state.register_participant.handle(register()).await.is_ok());
}
