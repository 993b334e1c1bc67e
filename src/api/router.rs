use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, profile, consultation};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Profiles (seeded by the authentication collaborator)
        .route("/api/v1/profiles", post(profile::create_profile))
        .route("/api/v1/profiles/{id}", get(profile::get_profile))

        // Consultation slots
        .route("/api/v1/consultations", post(consultation::create_slot).get(consultation::list_slots))
        .route("/api/v1/consultations/available", get(consultation::list_available_slots))
        .route("/api/v1/consultations/{slot_id}", get(consultation::get_slot).delete(consultation::delete_slot))

        // Booking workflow
        .route("/api/v1/consultations/{slot_id}/book", post(consultation::book_slot))
        .route("/api/v1/consultations/{slot_id}/bookings/{student_id}/status", put(consultation::change_booking_status))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        caller_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
