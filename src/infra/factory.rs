use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::services::consultation::ConsultationService;
use crate::infra::repositories::{
    postgres_profile_repo::PostgresProfileRepo, postgres_slot_repo::PostgresSlotRepo,
    postgres_booking_repo::PostgresBookingRepo,
    sqlite_profile_repo::SqliteProfileRepo, sqlite_slot_repo::SqliteSlotRepo,
    sqlite_booking_repo::SqliteBookingRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        let profile_repo = Arc::new(PostgresProfileRepo::new(pool.clone()));
        let slot_repo = Arc::new(PostgresSlotRepo::new(pool.clone()));
        let booking_repo = Arc::new(PostgresBookingRepo::new(pool.clone()));
        let consultation_service = Arc::new(ConsultationService::new(
            profile_repo.clone(),
            slot_repo.clone(),
            booking_repo.clone(),
            config.clone(),
        ));

        AppState {
            config: config.clone(),
            profile_repo,
            slot_repo,
            booking_repo,
            consultation_service,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        let profile_repo = Arc::new(SqliteProfileRepo::new(pool.clone()));
        let slot_repo = Arc::new(SqliteSlotRepo::new(pool.clone()));
        let booking_repo = Arc::new(SqliteBookingRepo::new(pool.clone()));
        let consultation_service = Arc::new(ConsultationService::new(
            profile_repo.clone(),
            slot_repo.clone(),
            booking_repo.clone(),
            config.clone(),
        ));

        AppState {
            config: config.clone(),
            profile_repo,
            slot_repo,
            booking_repo,
            consultation_service,
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
