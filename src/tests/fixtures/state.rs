use std::sync::Arc;

use crate::modules::event_registrations::adapters::outbound::in_memory::InMemoryEventRegistrations;
use crate::modules::event_registrations::use_cases::register_participant::retry_policy::RetryPolicy;
use crate::shell::state::AppState;

pub fn make_test_state() -> (AppState, Arc<InMemoryEventRegistrations>) {
    let store = Arc::new(InMemoryEventRegistrations::new());
    (
        AppState::new(store.clone(), RetryPolicy::no_backoff(3)),
        store,
    )
}

pub fn make_offline_state() -> AppState {
    let mut store = InMemoryEventRegistrations::new();
    store.toggle_offline();
    AppState::new(Arc::new(store), RetryPolicy::no_backoff(3))
}
