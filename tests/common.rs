use consultation_backend::{
    api::router::create_router,
    config::Config,
    domain::services::consultation::ConsultationService,
    infra::repositories::{
        sqlite_profile_repo::SqliteProfileRepo,
        sqlite_slot_repo::SqliteSlotRepo,
        sqlite_booking_repo::SqliteBookingRepo,
    },
    state::AppState,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use tower::ServiceExt;
use serde_json::{json, Value};

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        Self::with_ownership(false).await
    }

    /// Same app, but with the stricter configuration that rejects status
    /// changes from faculty that do not own the slot.
    pub async fn with_ownership_enforcement() -> Self {
        Self::with_ownership(true).await
    }

    async fn with_ownership(enforce_slot_ownership: bool) -> Self {
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
            enforce_slot_ownership,
        };

        let profile_repo = Arc::new(SqliteProfileRepo::new(pool.clone()));
        let slot_repo = Arc::new(SqliteSlotRepo::new(pool.clone()));
        let booking_repo = Arc::new(SqliteBookingRepo::new(pool.clone()));
        let consultation_service = Arc::new(ConsultationService::new(
            profile_repo.clone(),
            slot_repo.clone(),
            booking_repo.clone(),
            config.clone(),
        ));

        let state = Arc::new(AppState {
            config,
            profile_repo,
            slot_repo,
            booking_repo,
            consultation_service,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn create_profile(&self, name: &str, role: &str) -> String {
        let res = self.router.clone().oneshot(
            Request::builder().method("POST").uri("/api/v1/profiles")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "name": name, "role": role }).to_string()))
                .unwrap()
        ).await.unwrap();

        if !res.status().is_success() {
            panic!("Profile creation failed in test helper: status {}", res.status());
        }

        let body = parse_body(res).await;
        body["id"].as_str().unwrap().to_string()
    }

    pub async fn create_slot(&self, faculty_id: &str) -> String {
        let payload = json!({
            "date": "2024-05-01",
            "start_time": "10:00",
            "end_time": "10:30",
            "course_code": "CSE110",
            "room": "R1",
            "days": ["MON", "WED"]
        });

        let res = self.router.clone().oneshot(
            Request::builder().method("POST").uri("/api/v1/consultations")
                .header(header::CONTENT_TYPE, "application/json")
                .header("X-Caller-Id", faculty_id)
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        if !res.status().is_success() {
            panic!("Slot creation failed in test helper: status {}", res.status());
        }

        let body = parse_body(res).await;
        body["slot_id"].as_str().unwrap().to_string()
    }

    pub async fn book_slot(&self, student_id: &str, slot_id: &str) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder().method("POST")
                .uri(format!("/api/v1/consultations/{}/book", slot_id))
                .header("X-Caller-Id", student_id)
                .body(Body::empty())
                .unwrap()
        ).await.unwrap()
    }

    pub async fn change_status(&self, caller_id: &str, slot_id: &str, student_id: &str, status: &str) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder().method("PUT")
                .uri(format!("/api/v1/consultations/{}/bookings/{}/status", slot_id, student_id))
                .header(header::CONTENT_TYPE, "application/json")
                .header("X-Caller-Id", caller_id)
                .body(Body::from(json!({ "status": status }).to_string()))
                .unwrap()
        ).await.unwrap()
    }

    pub async fn booking_count(&self, slot_id: &str) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bookings WHERE slot_id = ?")
            .bind(slot_id)
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}

pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
