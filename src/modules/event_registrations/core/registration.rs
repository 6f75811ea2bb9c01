use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fact binding one participant to one event. Cancelling deletes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub participant_id: String,
    pub event_id: Uuid,
    pub created_at: DateTime<Utc>,
}
