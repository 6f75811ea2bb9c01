use uuid::Uuid;

use crate::modules::event_registrations::use_cases::register_participant::command::RegisterParticipant;
use crate::tests::fixtures::events::fixed_now;

pub fn register(event_id: Uuid, participant_id: &str) -> RegisterParticipant {
    RegisterParticipant {
        event_id,
        participant_id: participant_id.to_string(),
        now: fixed_now(),
    }
}
