// In memory implementation of the EventStore, RegistrationLedger and ParticipantDirectory ports.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep events and registrations behind one mutex so admit() is a single critical section.
// - Offer knobs to simulate an offline backend, slow admissions and transient conflicts.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::modules::event_registrations::adapters::outbound::event_store::EventStore;
use crate::modules::event_registrations::adapters::outbound::participant_directory::ParticipantDirectory;
use crate::modules::event_registrations::adapters::outbound::registration_ledger::RegistrationLedger;
use crate::modules::event_registrations::adapters::outbound::store_error::StoreError;
use crate::modules::event_registrations::core::admission::{Admission, Decision, decide_admission};
use crate::modules::event_registrations::core::event::Event;
use crate::modules::event_registrations::core::participant::Participant;
use crate::modules::event_registrations::core::registration::Registration;
use crate::modules::event_registrations::core::stats::Occupancy;

#[derive(Default)]
struct Tables {
    events: HashMap<Uuid, Event>,
    // (event_id, participant_id) -> created_at
    registrations: BTreeMap<(Uuid, String), DateTime<Utc>>,
}

impl Tables {
    fn registrations_for(
        &self,
        event_id: Uuid,
    ) -> impl Iterator<Item = (&(Uuid, String), &DateTime<Utc>)> + '_ {
        self.registrations
            .range((event_id, String::new())..)
            .take_while(move |((registered_for, _), _)| *registered_for == event_id)
    }

    fn count_for(&self, event_id: Uuid) -> u32 {
        u32::try_from(self.registrations_for(event_id).count()).unwrap_or(u32::MAX)
    }

    fn contains(&self, participant_id: &str, event_id: Uuid) -> bool {
        self.registrations
            .contains_key(&(event_id, participant_id.to_string()))
    }

    fn insert(
        &mut self,
        participant_id: &str,
        event_id: Uuid,
        created_at: DateTime<Utc>,
    ) -> Registration {
        self.registrations
            .insert((event_id, participant_id.to_string()), created_at);
        Registration {
            participant_id: participant_id.to_string(),
            event_id,
            created_at,
        }
    }
}

#[derive(Default)]
pub struct InMemoryEventRegistrations {
    tables: Mutex<Tables>,
    participants: RwLock<HashMap<String, Participant>>,
    is_offline: bool,
    admission_delay_ms: AtomicU64,
    pending_conflicts: AtomicU32,
}

impl InMemoryEventRegistrations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Hold the admission lock this long between reading and writing.
    pub fn set_admission_delay_ms(&self, delay_ms: u64) {
        self.admission_delay_ms.store(delay_ms, Ordering::SeqCst);
    }

    /// Make the next `count` admissions fail with a serialization conflict.
    pub fn fail_next_admissions(&self, count: u32) {
        self.pending_conflicts.store(count, Ordering::SeqCst);
    }

    pub async fn add_participant(&self, participant: Participant) {
        self.participants
            .write()
            .await
            .insert(participant.id.clone(), participant);
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Event registrations store offline".into()));
        }
        Ok(())
    }

    fn take_pending_conflict(&self) -> bool {
        self.pending_conflicts
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl EventStore for InMemoryEventRegistrations {
    async fn insert(&self, event: &Event) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.lock().await;
        if tables.events.contains_key(&event.id) {
            return Err(StoreError::Duplicate);
        }
        tables.events.insert(event.id, event.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Event, StoreError> {
        self.ensure_online()?;
        self.tables
            .lock()
            .await
            .events
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn list_upcoming(&self, now: DateTime<Utc>) -> Result<Vec<Event>, StoreError> {
        self.ensure_online()?;
        let tables = self.tables.lock().await;
        let mut upcoming: Vec<Event> = tables
            .events
            .values()
            .filter(|event| event.scheduled_time > now)
            .cloned()
            .collect();
        upcoming.sort_by(|left, right| {
            left.scheduled_time
                .cmp(&right.scheduled_time)
                .then_with(|| left.location.cmp(&right.location))
        });
        Ok(upcoming)
    }
}

#[async_trait]
impl RegistrationLedger for InMemoryEventRegistrations {
    async fn count_for(&self, event_id: Uuid) -> Result<u32, StoreError> {
        self.ensure_online()?;
        Ok(self.tables.lock().await.count_for(event_id))
    }

    async fn exists(&self, participant_id: &str, event_id: Uuid) -> Result<bool, StoreError> {
        self.ensure_online()?;
        Ok(self.tables.lock().await.contains(participant_id, event_id))
    }

    async fn insert(
        &self,
        participant_id: &str,
        event_id: Uuid,
        created_at: DateTime<Utc>,
    ) -> Result<Registration, StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.lock().await;
        if !tables.events.contains_key(&event_id) {
            return Err(StoreError::NotFound);
        }
        if tables.contains(participant_id, event_id) {
            return Err(StoreError::Duplicate);
        }
        Ok(tables.insert(participant_id, event_id, created_at))
    }

    async fn delete(&self, participant_id: &str, event_id: Uuid) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.tables
            .lock()
            .await
            .registrations
            .remove(&(event_id, participant_id.to_string()))
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    async fn registrants(&self, event_id: Uuid) -> Result<Vec<Registration>, StoreError> {
        self.ensure_online()?;
        let tables = self.tables.lock().await;
        let mut registrations: Vec<Registration> = tables
            .registrations_for(event_id)
            .map(|((event_id, participant_id), created_at)| Registration {
                participant_id: participant_id.clone(),
                event_id: *event_id,
                created_at: *created_at,
            })
            .collect();
        registrations.sort_by(|left, right| {
            left.created_at
                .cmp(&right.created_at)
                .then_with(|| left.participant_id.cmp(&right.participant_id))
        });
        Ok(registrations)
    }

    async fn admit(
        &self,
        event_id: Uuid,
        participant_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Admission, StoreError> {
        self.ensure_online()?;
        if self.take_pending_conflict() {
            return Err(StoreError::SerializationConflict(
                "could not serialize access due to concurrent update".into(),
            ));
        }

        let mut tables = self.tables.lock().await;
        let event = tables
            .events
            .get(&event_id)
            .cloned()
            .ok_or(StoreError::NotFound)?;
        let registered = tables.count_for(event_id);
        let already_registered = tables.contains(participant_id, event_id);

        let delay_ms = self.admission_delay_ms.load(Ordering::SeqCst);
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }

        match decide_admission(&event, registered, already_registered, now) {
            Decision::Admit => Ok(Admission::Admitted(tables.insert(
                participant_id,
                event_id,
                now,
            ))),
            Decision::Reject(reason) => Ok(Admission::Rejected(reason)),
        }
    }

    async fn occupancy(&self, event_id: Uuid) -> Result<Occupancy, StoreError> {
        self.ensure_online()?;
        let tables = self.tables.lock().await;
        let event = tables.events.get(&event_id).ok_or(StoreError::NotFound)?;
        Ok(Occupancy {
            capacity: event.capacity,
            registered: tables.count_for(event_id),
        })
    }
}

#[async_trait]
impl ParticipantDirectory for InMemoryEventRegistrations {
    async fn find_many(&self, ids: &[String]) -> Result<Vec<Participant>, StoreError> {
        self.ensure_online()?;
        let participants = self.participants.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| participants.get(id).cloned())
            .collect())
    }
}
