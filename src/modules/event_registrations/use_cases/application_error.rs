use thiserror::Error;
use tracing::error;

use crate::modules::event_registrations::adapters::outbound::store_error::StoreError;
use crate::modules::event_registrations::core::admission::AdmissionRejection;
use crate::modules::event_registrations::core::event::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConflictReason {
    #[error("event already occurred")]
    EventAlreadyOccurred,

    #[error("event is full")]
    EventFull,

    #[error("participant is already registered for this event")]
    AlreadyRegistered,

    #[error("registration is busy, try again later")]
    Busy,
}

impl From<AdmissionRejection> for ConflictReason {
    fn from(rejection: AdmissionRejection) -> Self {
        match rejection {
            AdmissionRejection::EventAlreadyOccurred => Self::EventAlreadyOccurred,
            AdmissionRejection::EventFull => Self::EventFull,
            AdmissionRejection::AlreadyRegistered => Self::AlreadyRegistered,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error(transparent)]
    Conflict(#[from] ConflictReason),

    /// Store detail is logged where the error is created and never carried outward.
    #[error("internal error")]
    Internal,
}

impl ApplicationError {
    /// Map a store failure. `missing` names the record a `NotFound` refers to,
    /// and `Duplicate` is read as a ledger duplicate.
    pub fn from_store(err: StoreError, missing: &'static str) -> Self {
        match err {
            StoreError::NotFound => Self::NotFound(missing),
            StoreError::Duplicate => Self::Conflict(ConflictReason::AlreadyRegistered),
            StoreError::SerializationConflict(_) => Self::Conflict(ConflictReason::Busy),
            StoreError::Backend(detail) => {
                error!(%detail, "store failure");
                Self::Internal
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}
