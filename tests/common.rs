use woodfired_backend::{
    api::extractors::auth::hash_token,
    api::router::create_router,
    config::Config,
    domain::services::schedule::ScheduleService,
    infra::rate_limit::ApiRateLimiter,
    infra::repositories::{
        sqlite_blog_repo::SqliteBlogRepo,
        sqlite_booking_repo::SqliteBookingRepo,
        sqlite_enquiry_repo::SqliteEnquiryRepo,
        sqlite_exception_repo::SqliteExceptionRepo,
        sqlite_location_repo::SqliteLocationRepo,
        sqlite_session_repo::SqliteSessionRepo,
    },
    state::AppState,
};
use axum::Router;
use chrono::{Duration, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        // Small quotas so the limiter is exhaustible inside a test.
        Self::with_quotas(3, 2).await
    }

    pub async fn with_quotas(contact_per_hour: u32, bookings_per_hour: u32) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            contact_quota_per_hour: contact_per_hour,
            booking_quota_per_hour: bookings_per_hour,
        };

        let location_repo = Arc::new(SqliteLocationRepo::new(pool.clone()));

        let state = Arc::new(AppState {
            config,
            location_repo: location_repo.clone(),
            exception_repo: Arc::new(SqliteExceptionRepo::new(pool.clone())),
            blog_repo: Arc::new(SqliteBlogRepo::new(pool.clone())),
            enquiry_repo: Arc::new(SqliteEnquiryRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            session_repo: Arc::new(SqliteSessionRepo::new(pool.clone())),
            schedule_service: Arc::new(ScheduleService::new(location_repo)),
            rate_limiter: Arc::new(ApiRateLimiter::new(contact_per_hour, bookings_per_hour)),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Inserts an admin user and a live session, returning the raw bearer token.
    pub async fn seed_admin(&self) -> String {
        self.seed_user("admin", false).await
    }

    #[allow(dead_code)]
    pub async fn seed_user(&self, role: &str, banned: bool) -> String {
        let user_id = Uuid::new_v4().to_string();
        let token = Uuid::new_v4().to_string();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO admin_users (id, name, email, role, banned, created_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&user_id)
        .bind("Test Admin")
        .bind(format!("{}@example.com", user_id))
        .bind(role)
        .bind(banned)
        .bind(now)
        .execute(&self.pool)
        .await
        .expect("Failed to seed admin user");

        sqlx::query(
            "INSERT INTO admin_sessions (token_hash, user_id, expires_at, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(hash_token(&token))
        .bind(&user_id)
        .bind(now + Duration::hours(12))
        .bind(now)
        .execute(&self.pool)
        .await
        .expect("Failed to seed admin session");

        token
    }

    /// Seeds a session that has already expired.
    #[allow(dead_code)]
    pub async fn seed_expired_session(&self) -> String {
        let user_id = Uuid::new_v4().to_string();
        let token = Uuid::new_v4().to_string();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO admin_users (id, name, email, role, banned, created_at) VALUES (?, ?, ?, 'admin', FALSE, ?)",
        )
        .bind(&user_id)
        .bind("Expired Admin")
        .bind(format!("{}@example.com", user_id))
        .bind(now)
        .execute(&self.pool)
        .await
        .expect("Failed to seed admin user");

        sqlx::query(
            "INSERT INTO admin_sessions (token_hash, user_id, expires_at, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(hash_token(&token))
        .bind(&user_id)
        .bind(now - Duration::hours(1))
        .bind(now)
        .execute(&self.pool)
        .await
        .expect("Failed to seed session");

        token
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
