// PostgreSQL implementation of the EventStore, RegistrationLedger and ParticipantDirectory ports.
//
// Admission
// - admit() runs in one transaction: the event row is locked FOR UPDATE, so concurrent
//   admits for the same event queue behind each other while other events proceed.
// - The (participant_id, event_id) primary key backs the duplicate rule even for
//   plain insert().

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, Row, Transaction};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::modules::event_registrations::adapters::outbound::event_store::EventStore;
use crate::modules::event_registrations::adapters::outbound::participant_directory::ParticipantDirectory;
use crate::modules::event_registrations::adapters::outbound::registration_ledger::RegistrationLedger;
use crate::modules::event_registrations::adapters::outbound::store_error::StoreError;
use crate::modules::event_registrations::core::admission::{
    Admission, AdmissionRejection, Decision, decide_admission,
};
use crate::modules::event_registrations::core::event::Event;
use crate::modules::event_registrations::core::participant::Participant;
use crate::modules::event_registrations::core::registration::Registration;
use crate::modules::event_registrations::core::stats::Occupancy;

#[derive(Debug, Clone)]
pub struct PostgresEventRegistrations {
    pool: PgPool,
}

impl PostgresEventRegistrations {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_sqlx_error(operation: &'static str, err: sqlx::Error) -> StoreError {
    if let sqlx::Error::RowNotFound = err {
        return StoreError::NotFound;
    }
    if let Some(db) = err.as_database_error() {
        match db.code().as_deref() {
            Some("23505") => return StoreError::Duplicate,
            Some("23503") => return StoreError::NotFound,
            Some("40001") | Some("40P01") => {
                return StoreError::SerializationConflict(format!("{operation}: {db}"));
            }
            _ => {}
        }
    }
    StoreError::Backend(format!("{operation}: {err}"))
}

fn to_count(operation: &'static str, raw: i64) -> Result<u32, StoreError> {
    u32::try_from(raw).map_err(|_| StoreError::Backend(format!("{operation}: count {raw} out of range")))
}

fn event_from_row(row: &PgRow) -> Result<Event, StoreError> {
    let capacity: i32 = row
        .try_get("capacity")
        .map_err(|e| map_sqlx_error("decode event", e))?;
    Ok(Event {
        id: row.try_get("id").map_err(|e| map_sqlx_error("decode event", e))?,
        title: row
            .try_get("title")
            .map_err(|e| map_sqlx_error("decode event", e))?,
        scheduled_time: row
            .try_get("scheduled_time")
            .map_err(|e| map_sqlx_error("decode event", e))?,
        location: row
            .try_get("location")
            .map_err(|e| map_sqlx_error("decode event", e))?,
        capacity: u32::try_from(capacity)
            .map_err(|_| StoreError::Backend(format!("decode event: capacity {capacity}")))?,
    })
}

fn registration_from_row(row: &PgRow) -> Result<Registration, StoreError> {
    Ok(Registration {
        participant_id: row
            .try_get("participant_id")
            .map_err(|e| map_sqlx_error("decode registration", e))?,
        event_id: row
            .try_get("event_id")
            .map_err(|e| map_sqlx_error("decode registration", e))?,
        created_at: row
            .try_get("created_at")
            .map_err(|e| map_sqlx_error("decode registration", e))?,
    })
}

async fn admit_in(
    tx: &mut Transaction<'_, Postgres>,
    event_id: Uuid,
    participant_id: &str,
    now: DateTime<Utc>,
) -> Result<Admission, StoreError> {
    let row = sqlx::query(
        "SELECT id, title, scheduled_time, location, capacity FROM events WHERE id = $1 FOR UPDATE",
    )
    .bind(event_id)
    .fetch_optional(&mut **tx)
    .await
    .map_err(|e| map_sqlx_error("lock event", e))?
    .ok_or(StoreError::NotFound)?;
    let event = event_from_row(&row)?;

    let registered: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM registrations WHERE event_id = $1")
        .bind(event_id)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| map_sqlx_error("count registrations", e))?;
    let already_registered: bool = sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM registrations WHERE participant_id = $1 AND event_id = $2)",
    )
    .bind(participant_id)
    .bind(event_id)
    .fetch_one(&mut **tx)
    .await
    .map_err(|e| map_sqlx_error("check registration", e))?;

    match decide_admission(
        &event,
        to_count("count registrations", registered)?,
        already_registered,
        now,
    ) {
        Decision::Admit => {
            let inserted = sqlx::query(
                "INSERT INTO registrations (participant_id, event_id, created_at) VALUES ($1, $2, $3)",
            )
            .bind(participant_id)
            .bind(event_id)
            .bind(now)
            .execute(&mut **tx)
            .await
            .map_err(|e| map_sqlx_error("insert registration", e));
            match inserted {
                Ok(_) => Ok(Admission::Admitted(Registration {
                    participant_id: participant_id.to_string(),
                    event_id,
                    created_at: now,
                })),
                Err(StoreError::Duplicate) => {
                    Ok(Admission::Rejected(AdmissionRejection::AlreadyRegistered))
                }
                Err(err) => Err(err),
            }
        }
        Decision::Reject(reason) => Ok(Admission::Rejected(reason)),
    }
}

#[async_trait]
impl EventStore for PostgresEventRegistrations {
    #[instrument(skip(self, event), fields(event_id = %event.id))]
    async fn insert(&self, event: &Event) -> Result<(), StoreError> {
        let capacity = i32::try_from(event.capacity)
            .map_err(|_| StoreError::Backend(format!("insert event: capacity {}", event.capacity)))?;
        sqlx::query(
            "INSERT INTO events (id, title, scheduled_time, location, capacity) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(event.id)
        .bind(&event.title)
        .bind(event.scheduled_time)
        .bind(&event.location)
        .bind(capacity)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("insert event", e))?;
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Event, StoreError> {
        let row = sqlx::query(
            "SELECT id, title, scheduled_time, location, capacity FROM events WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("get event", e))?
        .ok_or(StoreError::NotFound)?;
        event_from_row(&row)
    }

    async fn list_upcoming(&self, now: DateTime<Utc>) -> Result<Vec<Event>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, scheduled_time, location, capacity
            FROM events
            WHERE scheduled_time > $1
            ORDER BY scheduled_time ASC, location ASC
            "#,
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("list upcoming events", e))?;
        rows.iter().map(event_from_row).collect()
    }
}

#[async_trait]
impl RegistrationLedger for PostgresEventRegistrations {
    async fn count_for(&self, event_id: Uuid) -> Result<u32, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM registrations WHERE event_id = $1")
            .bind(event_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("count registrations", e))?;
        to_count("count registrations", count)
    }

    async fn exists(&self, participant_id: &str, event_id: Uuid) -> Result<bool, StoreError> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM registrations WHERE participant_id = $1 AND event_id = $2)",
        )
        .bind(participant_id)
        .bind(event_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("check registration", e))
    }

    async fn insert(
        &self,
        participant_id: &str,
        event_id: Uuid,
        created_at: DateTime<Utc>,
    ) -> Result<Registration, StoreError> {
        sqlx::query(
            "INSERT INTO registrations (participant_id, event_id, created_at) VALUES ($1, $2, $3)",
        )
        .bind(participant_id)
        .bind(event_id)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("insert registration", e))?;
        Ok(Registration {
            participant_id: participant_id.to_string(),
            event_id,
            created_at,
        })
    }

    async fn delete(&self, participant_id: &str, event_id: Uuid) -> Result<(), StoreError> {
        let result =
            sqlx::query("DELETE FROM registrations WHERE participant_id = $1 AND event_id = $2")
                .bind(participant_id)
                .bind(event_id)
                .execute(&self.pool)
                .await
                .map_err(|e| map_sqlx_error("delete registration", e))?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn registrants(&self, event_id: Uuid) -> Result<Vec<Registration>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT participant_id, event_id, created_at
            FROM registrations
            WHERE event_id = $1
            ORDER BY created_at ASC, participant_id ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("list registrants", e))?;
        rows.iter().map(registration_from_row).collect()
    }

    #[instrument(skip(self))]
    async fn admit(
        &self,
        event_id: Uuid,
        participant_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Admission, StoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("begin admission", e))?;

        // Dropping the transaction on an early return rolls it back.
        let admission = admit_in(&mut tx, event_id, participant_id, now).await?;

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error("commit admission", e))?;
        debug!(?admission, "admission committed");
        Ok(admission)
    }

    async fn occupancy(&self, event_id: Uuid) -> Result<Occupancy, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT e.capacity,
                   (SELECT COUNT(*) FROM registrations r WHERE r.event_id = e.id) AS registered
            FROM events e
            WHERE e.id = $1
            "#,
        )
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("read occupancy", e))?
        .ok_or(StoreError::NotFound)?;

        let capacity: i32 = row
            .try_get("capacity")
            .map_err(|e| map_sqlx_error("decode occupancy", e))?;
        let registered: i64 = row
            .try_get("registered")
            .map_err(|e| map_sqlx_error("decode occupancy", e))?;
        Ok(Occupancy {
            capacity: u32::try_from(capacity)
                .map_err(|_| StoreError::Backend(format!("decode occupancy: capacity {capacity}")))?,
            registered: to_count("decode occupancy", registered)?,
        })
    }
}

#[async_trait]
impl ParticipantDirectory for PostgresEventRegistrations {
    async fn find_many(&self, ids: &[String]) -> Result<Vec<Participant>, StoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = sqlx::query("SELECT id, name, email FROM users WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("find participants", e))?;

        let mut found = rows
            .iter()
            .map(|row| {
                Ok(Participant {
                    id: row.try_get("id").map_err(|e| map_sqlx_error("decode user", e))?,
                    name: row
                        .try_get("name")
                        .map_err(|e| map_sqlx_error("decode user", e))?,
                    email: row
                        .try_get("email")
                        .map_err(|e| map_sqlx_error("decode user", e))?,
                })
            })
            .collect::<Result<Vec<Participant>, StoreError>>()?;
        // Keep the caller's order.
        found.sort_by_key(|participant| ids.iter().position(|id| *id == participant.id));
        Ok(found)
    }
}
