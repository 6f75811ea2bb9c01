use serde::{Deserialize, Serialize};

/// Capacity and registration count read together in one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupancy {
    pub capacity: u32,
    pub registered: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStats {
    pub total_registrations: u32,
    pub remaining_capacity: u32,
    pub percentage_used: String,
}

impl From<Occupancy> for EventStats {
    fn from(occupancy: Occupancy) -> Self {
        let Occupancy {
            capacity,
            registered,
        } = occupancy;
        Self {
            total_registrations: registered,
            remaining_capacity: capacity.saturating_sub(registered),
            percentage_used: percentage_used(registered, capacity),
        }
    }
}

/// Two decimals, rounding exact halves up.
fn percentage_used(registered: u32, capacity: u32) -> String {
    if capacity == 0 {
        return "0.00%".to_string();
    }
    let capacity = u64::from(capacity);
    let hundredths = (u64::from(registered) * 20_000 + capacity) / (2 * capacity);
    format!("{}.{:02}%", hundredths / 100, hundredths % 100)
}
