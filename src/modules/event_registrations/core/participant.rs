use serde::{Deserialize, Serialize};

/// Participant as known by the user directory. Never written by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub email: String,
}
