// Owned PostgreSQL handle.
//
// Lifecycle
// - connect() once at startup, migrate() before serving, close() after the server drained.
// - Adapters borrow the pool through pool(); nothing holds a global connection.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgresConfig {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

const SCHEMA: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS events (
        id UUID PRIMARY KEY,
        title TEXT NOT NULL,
        scheduled_time TIMESTAMPTZ NOT NULL,
        location TEXT NOT NULL,
        capacity INTEGER NOT NULL CHECK (capacity BETWEEN 1 AND 1000)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS registrations (
        participant_id TEXT NOT NULL,
        event_id UUID NOT NULL REFERENCES events (id) ON DELETE CASCADE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        PRIMARY KEY (participant_id, event_id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS registrations_event_id_idx ON registrations (event_id)",
];

#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub async fn connect(config: &PostgresConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .connect(&config.url)
            .await?;
        info!(
            max_connections = config.max_connections,
            "connected to postgres"
        );
        Ok(Self { pool })
    }

    /// Create the tables when they do not exist yet. Safe to run on every start.
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("postgres pool closed");
    }
}
