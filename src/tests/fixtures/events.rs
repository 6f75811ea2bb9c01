// Canonical domain values for tests. The clock is pinned one hour before the
// default draft's scheduled time.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::modules::event_registrations::core::event::Event;
use crate::modules::event_registrations::core::participant::Participant;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn make_event(capacity: u32, scheduled_time: DateTime<Utc>) -> Event {
    Event {
        id: Uuid::now_v7(),
        title: "Rust Meetup".to_string(),
        scheduled_time,
        location: "Amsterdam".to_string(),
        capacity,
    }
}

pub fn make_event_at(scheduled_time: DateTime<Utc>, location: &str) -> Event {
    Event {
        location: location.to_string(),
        ..make_event(10, scheduled_time)
    }
}

pub fn make_participant(id: &str, name: &str) -> Participant {
    Participant {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
    }
}
