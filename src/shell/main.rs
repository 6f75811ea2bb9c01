use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use event_registrations::modules::event_registrations::adapters::outbound::in_memory::InMemoryEventRegistrations;
use event_registrations::modules::event_registrations::adapters::outbound::postgres::PostgresEventRegistrations;
use event_registrations::shared::infrastructure::postgres::PostgresStore;
use event_registrations::shell::config::Config;
use event_registrations::shell::http::router;
use event_registrations::shell::state::AppState;

const DEFAULT_LOG_FILTER: &str = "info,event_registrations=debug,sqlx=warn";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env()?;

    let (state, postgres) = match &config.postgres {
        Some(postgres_config) => {
            let store = PostgresStore::connect(postgres_config).await?;
            store.migrate().await?;
            let adapter = Arc::new(PostgresEventRegistrations::new(store.pool().clone()));
            (AppState::new(adapter, config.retry_policy), Some(store))
        }
        None => {
            info!("DATABASE_URL not set, using the in-memory store");
            let adapter = Arc::new(InMemoryEventRegistrations::new());
            (AppState::new(adapter, config.retry_policy), None)
        }
    };

    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    info!("listening on http://{}", listener.local_addr()?);
    info!("GraphQL endpoint: http://{}/gql", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    if let Some(store) = postgres {
        store.close().await;
    }
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received Ctrl+C"),
        () = terminate => info!("received SIGTERM"),
    }
}
