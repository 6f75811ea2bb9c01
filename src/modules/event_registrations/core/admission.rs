// Pure admission decision.
//
// Adapters call decide_admission inside their atomic unit, after reading the
// current count and the duplicate flag under the same lock or transaction.

use chrono::{DateTime, Utc};

use crate::modules::event_registrations::core::event::Event;
use crate::modules::event_registrations::core::registration::Registration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AdmissionRejection {
    #[error("event already occurred")]
    EventAlreadyOccurred,

    #[error("event is full")]
    EventFull,

    #[error("participant is already registered")]
    AlreadyRegistered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Admit,
    Reject(AdmissionRejection),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    Admitted(Registration),
    Rejected(AdmissionRejection),
}

pub fn decide_admission(
    event: &Event,
    registered: u32,
    already_registered: bool,
    now: DateTime<Utc>,
) -> Decision {
    if event.has_occurred(now) {
        return Decision::Reject(AdmissionRejection::EventAlreadyOccurred);
    }
    if registered >= event.capacity {
        return Decision::Reject(AdmissionRejection::EventFull);
    }
    if already_registered {
        return Decision::Reject(AdmissionRejection::AlreadyRegistered);
    }
    Decision::Admit
}
