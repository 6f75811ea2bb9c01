use std::sync::Arc;

use crate::modules::event_registrations::adapters::outbound::event_store::EventStore;
use crate::modules::event_registrations::adapters::outbound::participant_directory::ParticipantDirectory;
use crate::modules::event_registrations::adapters::outbound::registration_ledger::RegistrationLedger;
use crate::modules::event_registrations::use_cases::cancel_registration::handler::CancelRegistrationHandler;
use crate::modules::event_registrations::use_cases::create_event::handler::CreateEventHandler;
use crate::modules::event_registrations::use_cases::get_event::handler::GetEventHandler;
use crate::modules::event_registrations::use_cases::get_event_stats::handler::GetEventStatsHandler;
use crate::modules::event_registrations::use_cases::list_upcoming_events::handler::ListUpcomingEventsHandler;
use crate::modules::event_registrations::use_cases::register_participant::handler::RegisterParticipantHandler;
use crate::modules::event_registrations::use_cases::register_participant::retry_policy::RetryPolicy;

#[derive(Clone)]
pub struct AppState {
    pub create_event: Arc<CreateEventHandler<dyn EventStore>>,
    pub get_event:
        Arc<GetEventHandler<dyn EventStore, dyn RegistrationLedger, dyn ParticipantDirectory>>,
    pub register_participant: Arc<RegisterParticipantHandler<dyn RegistrationLedger>>,
    pub cancel_registration: Arc<CancelRegistrationHandler<dyn RegistrationLedger>>,
    pub list_upcoming_events: Arc<ListUpcomingEventsHandler<dyn EventStore>>,
    pub get_event_stats: Arc<GetEventStatsHandler<dyn RegistrationLedger>>,
}

impl AppState {
    /// Wire every handler to one backend that serves all three ports.
    pub fn new<TStore>(store: Arc<TStore>, retry_policy: RetryPolicy) -> Self
    where
        TStore: EventStore + RegistrationLedger + ParticipantDirectory + 'static,
    {
        let events: Arc<dyn EventStore> = store.clone();
        let ledger: Arc<dyn RegistrationLedger> = store.clone();
        let directory: Arc<dyn ParticipantDirectory> = store;
        Self {
            create_event: Arc::new(CreateEventHandler::new(events.clone())),
            get_event: Arc::new(GetEventHandler::new(
                events.clone(),
                ledger.clone(),
                directory,
            )),
            register_participant: Arc::new(RegisterParticipantHandler::new(
                ledger.clone(),
                retry_policy,
            )),
            cancel_registration: Arc::new(CancelRegistrationHandler::new(ledger.clone())),
            list_upcoming_events: Arc::new(ListUpcomingEventsHandler::new(events)),
            get_event_stats: Arc::new(GetEventStatsHandler::new(ledger)),
        }
    }
}
