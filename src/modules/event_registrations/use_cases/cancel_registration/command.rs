use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelRegistration {
    pub event_id: Uuid,
    pub participant_id: String,
}
