// Shared test fixture for the create event draft.

use serde::Deserialize;

use crate::modules::event_registrations::core::event::EventDraft;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventDto {
    pub title: String,
    pub scheduled_time: String,
    pub location: String,
    pub capacity: i64,
}

pub struct EventDraftBuilder {
    inner: EventDraft,
}

impl Default for EventDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventDraftBuilder {
    pub fn new() -> Self {
        let dto: CreateEventDto = serde_json::from_str(include_str!("json/create_event.json"))
            .expect("create_event.json is not a valid draft");
        Self {
            inner: EventDraft {
                title: dto.title,
                scheduled_time: dto.scheduled_time,
                location: dto.location,
                capacity: dto.capacity,
            },
        }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn scheduled_time(mut self, v: impl Into<String>) -> Self {
        self.inner.scheduled_time = v.into();
        self
    }

    pub fn location(mut self, v: impl Into<String>) -> Self {
        self.inner.location = v.into();
        self
    }

    pub fn capacity(mut self, v: i64) -> Self {
        self.inner.capacity = v;
        self
    }

    pub fn build(self) -> EventDraft {
        self.inner
    }
}

#[cfg(test)]
mod event_draft_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_load_the_defaults_from_json() {
        let draft = EventDraftBuilder::new().build();
        assert_eq!(draft.title, "Rust Meetup");
        assert_eq!(draft.location, "Amsterdam");
        assert_eq!(draft.capacity, 10);
        assert_eq!(draft.scheduled_time, "2030-01-01T01:00:00Z");
    }

    #[rstest]
    fn it_should_override_fields() {
        let draft = EventDraftBuilder::new().title("Other").capacity(3).build();
        assert_eq!(draft.title, "Other");
        assert_eq!(draft.capacity, 3);
    }
}
