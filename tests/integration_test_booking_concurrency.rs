mod common;

use axum::http::StatusCode;
use common::TestApp;

#[tokio::test]
async fn test_same_student_concurrent_bookings_create_one_row() {
    let app = TestApp::new().await;
    let faculty = app.create_profile("Dr. Rahman", "FACULTY").await;
    let student = app.create_profile("Alice", "STUDENT").await;
    let slot_id = app.create_slot(&faculty).await;

    // Both requests can pass the existing-booking precheck; the composite
    // primary key must serialize them so exactly one row is created.
    let (first, second) = tokio::join!(
        app.book_slot(&student, &slot_id),
        app.book_slot(&student, &slot_id),
    );

    let statuses = [first.status(), second.status()];
    let successes = statuses.iter().filter(|s| **s == StatusCode::OK).count();
    let conflicts = statuses.iter().filter(|s| **s == StatusCode::CONFLICT).count();

    assert_eq!(successes, 1, "exactly one booking attempt should win: {:?}", statuses);
    assert_eq!(conflicts, 1, "the losing attempt should see a conflict: {:?}", statuses);

    assert_eq!(app.booking_count(&slot_id).await, 1);

    let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM slot_students WHERE slot_id = ?")
        .bind(&slot_id)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(links, 1, "booking row and student link must stay paired");
}

#[tokio::test]
async fn test_different_students_concurrent_bookings_both_succeed() {
    let app = TestApp::new().await;
    let faculty = app.create_profile("Dr. Rahman", "FACULTY").await;
    let alice = app.create_profile("Alice", "STUDENT").await;
    let bob = app.create_profile("Bob", "STUDENT").await;
    let slot_id = app.create_slot(&faculty).await;

    let (first, second) = tokio::join!(
        app.book_slot(&alice, &slot_id),
        app.book_slot(&bob, &slot_id),
    );

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(app.booking_count(&slot_id).await, 2);

    // No cross-contamination of status between the two rows.
    app.change_status(&faculty, &slot_id, &alice, "confirmed").await;

    let alice_status: String = sqlx::query_scalar("SELECT status FROM bookings WHERE slot_id = ? AND student_id = ?")
        .bind(&slot_id).bind(&alice)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    let bob_status: String = sqlx::query_scalar("SELECT status FROM bookings WHERE slot_id = ? AND student_id = ?")
        .bind(&slot_id).bind(&bob)
        .fetch_one(&app.pool)
        .await
        .unwrap();

    assert_eq!(alice_status, "confirmed");
    assert_eq!(bob_status, "pending");
}
