mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{parse_body, TestApp};
use serde_json::json;
use tower::ServiceExt;

// Full walk-through: faculty creates a slot, a student books it, the
// faculty confirms the request, then deletes the slot.
#[tokio::test]
async fn test_consultation_lifecycle_end_to_end() {
    let app = TestApp::new().await;
    let faculty = app.create_profile("Dr. Rahman", "FACULTY").await;
    let student = app.create_profile("Student X", "STUDENT").await;

    // Faculty creates slot S1.
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/consultations")
            .header(header::CONTENT_TYPE, "application/json")
            .header("X-Caller-Id", &faculty)
            .body(Body::from(json!({
                "date": "2024-05-01",
                "start_time": "10:00",
                "end_time": "10:30",
                "course_code": "CSE110",
                "room": "R1",
                "days": ["MON", "WED"]
            }).to_string()))
            .unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let slot_id = parse_body(res).await["slot_id"].as_str().unwrap().to_string();

    // Student X books S1: booking is pending, X appears in the student set.
    let res = app.book_slot(&student, &slot_id).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/consultations/{}", slot_id))
            .header("X-Caller-Id", &student)
            .body(Body::empty())
            .unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    assert_eq!(body["booking_status"], "pending");
    assert_eq!(body["students"][0]["id"], student.as_str());

    // Faculty confirms: status flips and the message says "accepted".
    let res = app.change_status(&faculty, &slot_id, &student, "confirmed").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert!(body["success"].as_str().unwrap().contains("accepted"));

    let status: String = sqlx::query_scalar("SELECT status FROM bookings WHERE slot_id = ? AND student_id = ?")
        .bind(&slot_id).bind(&student)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(status, "confirmed");

    // Faculty deletes S1: the booking and the slot are both gone.
    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE")
            .uri(format!("/api/v1/consultations/{}", slot_id))
            .header("X-Caller-Id", &faculty)
            .body(Body::empty())
            .unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    assert_eq!(app.booking_count(&slot_id).await, 0);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/consultations/{}", slot_id))
            .header("X-Caller-Id", &student)
            .body(Body::empty())
            .unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
