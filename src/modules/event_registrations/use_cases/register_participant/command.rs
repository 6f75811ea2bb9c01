use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterParticipant {
    pub event_id: Uuid,
    pub participant_id: String,
    pub now: DateTime<Utc>,
}
