use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::services::schedule::ScheduleService;
use crate::infra::rate_limit::ApiRateLimiter;
use crate::infra::repositories::{
    postgres_blog_repo::PostgresBlogRepo, postgres_booking_repo::PostgresBookingRepo,
    postgres_enquiry_repo::PostgresEnquiryRepo, postgres_exception_repo::PostgresExceptionRepo,
    postgres_location_repo::PostgresLocationRepo, postgres_session_repo::PostgresSessionRepo,
    sqlite_blog_repo::SqliteBlogRepo, sqlite_booking_repo::SqliteBookingRepo,
    sqlite_enquiry_repo::SqliteEnquiryRepo, sqlite_exception_repo::SqliteExceptionRepo,
    sqlite_location_repo::SqliteLocationRepo, sqlite_session_repo::SqliteSessionRepo,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    let rate_limiter = Arc::new(ApiRateLimiter::new(
        config.contact_quota_per_hour,
        config.booking_quota_per_hour,
    ));

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

        let location_repo = Arc::new(PostgresLocationRepo::new(pool.clone()));

        AppState {
            config: config.clone(),
            schedule_service: Arc::new(ScheduleService::new(location_repo.clone())),
            location_repo,
            exception_repo: Arc::new(PostgresExceptionRepo::new(pool.clone())),
            blog_repo: Arc::new(PostgresBlogRepo::new(pool.clone())),
            enquiry_repo: Arc::new(PostgresEnquiryRepo::new(pool.clone())),
            booking_repo: Arc::new(PostgresBookingRepo::new(pool.clone())),
            session_repo: Arc::new(PostgresSessionRepo::new(pool.clone())),
            rate_limiter,
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

        let location_repo = Arc::new(SqliteLocationRepo::new(pool.clone()));

        AppState {
            config: config.clone(),
            schedule_service: Arc::new(ScheduleService::new(location_repo.clone())),
            location_repo,
            exception_repo: Arc::new(SqliteExceptionRepo::new(pool.clone())),
            blog_repo: Arc::new(SqliteBlogRepo::new(pool.clone())),
            enquiry_repo: Arc::new(SqliteEnquiryRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            session_repo: Arc::new(SqliteSessionRepo::new(pool.clone())),
            rate_limiter,
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
