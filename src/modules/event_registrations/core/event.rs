use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::core::primitives::parse_timestamp;

pub const MIN_CAPACITY: i64 = 1;
pub const MAX_CAPACITY: i64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub scheduled_time: DateTime<Utc>,
    pub location: String,
    pub capacity: u32,
}

impl Event {
    /// An event scheduled exactly at `now` counts as occurred.
    pub fn has_occurred(&self, now: DateTime<Utc>) -> bool {
        self.scheduled_time <= now
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("location must not be empty")]
    EmptyLocation,

    #[error("scheduled time `{0}` is not a valid timestamp")]
    UnparsableScheduledTime(String),

    #[error("capacity must be between 1 and 1000, got {0}")]
    CapacityOutOfRange(i64),

    #[error("`{0}` is not a valid event id")]
    InvalidEventId(String),

    #[error("participant id must not be empty")]
    EmptyParticipantId,
}

/// Unvalidated input for a new event, as received from a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub scheduled_time: String,
    pub location: String,
    pub capacity: i64,
}

impl EventDraft {
    pub fn validate(self, id: Uuid) -> Result<Event, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let location = self.location.trim();
        if location.is_empty() {
            return Err(ValidationError::EmptyLocation);
        }
        let scheduled_time = parse_timestamp(&self.scheduled_time)
            .map_err(|_| ValidationError::UnparsableScheduledTime(self.scheduled_time.clone()))?;
        if !(MIN_CAPACITY..=MAX_CAPACITY).contains(&self.capacity) {
            return Err(ValidationError::CapacityOutOfRange(self.capacity));
        }
        let capacity = u32::try_from(self.capacity)
            .map_err(|_| ValidationError::CapacityOutOfRange(self.capacity))?;

        Ok(Event {
            id,
            title: title.to_string(),
            scheduled_time,
            location: location.to_string(),
            capacity,
        })
    }
}

pub fn parse_event_id(raw: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ValidationError::InvalidEventId(raw.to_string()))
}

pub fn validate_participant_id(raw: &str) -> Result<String, ValidationError> {
    let participant_id = raw.trim();
    if participant_id.is_empty() {
        return Err(ValidationError::EmptyParticipantId);
    }
    Ok(participant_id.to_string())
}
