use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::caller::CallerId;
use crate::api::dtos::{
    requests::{ChangeStatusRequest, CreateSlotRequest},
    responses::SlotResponse,
};
use crate::domain::models::booking::STATUS_CONFIRMED;
use crate::domain::models::slot::NewSlotParams;
use crate::error::AppError;
use std::sync::Arc;
use chrono::NaiveDate;
use serde_json::json;

pub async fn create_slot(
    State(state): State<Arc<AppState>>,
    CallerId(caller_id): CallerId,
    Json(payload): Json<CreateSlotRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.date.trim().is_empty() {
        return Err(AppError::Validation("Please fill in all fields".into()));
    }
    let date = NaiveDate::parse_from_str(&payload.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;

    let created = state.consultation_service.create_slot(&caller_id, NewSlotParams {
        faculty_id: caller_id.clone(),
        course_code: payload.course_code,
        room: payload.room,
        date,
        start_time: payload.start_time,
        end_time: payload.end_time,
        days: payload.days,
    }).await?;

    Ok(Json(json!({
        "success": "Consultation slot created successfully",
        "slot_id": created.id,
    })))
}

pub async fn list_slots(
    State(state): State<Arc<AppState>>,
    CallerId(caller_id): CallerId,
) -> Result<impl IntoResponse, AppError> {
    let views = state.consultation_service.list_for_caller(&caller_id).await?;
    let slots: Vec<SlotResponse> = views.into_iter().map(SlotResponse::from).collect();
    Ok(Json(slots))
}

pub async fn list_available_slots(
    State(state): State<Arc<AppState>>,
    CallerId(caller_id): CallerId,
) -> Result<impl IntoResponse, AppError> {
    let views = state.consultation_service.list_available(&caller_id).await?;
    let slots: Vec<SlotResponse> = views.into_iter().map(SlotResponse::from).collect();
    Ok(Json(slots))
}

pub async fn get_slot(
    State(state): State<Arc<AppState>>,
    CallerId(caller_id): CallerId,
    Path(slot_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let view = state.consultation_service.get_slot(&caller_id, &slot_id).await?;
    Ok(Json(SlotResponse::from(view)))
}

pub async fn book_slot(
    State(state): State<Arc<AppState>>,
    CallerId(caller_id): CallerId,
    Path(slot_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.consultation_service.book_slot(&caller_id, &slot_id).await?;

    Ok(Json(json!({
        "success": "Consultation request sent successfully"
    })))
}

pub async fn change_booking_status(
    State(state): State<Arc<AppState>>,
    CallerId(caller_id): CallerId,
    Path((slot_id, student_id)): Path<(String, String)>,
    Json(payload): Json<ChangeStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state.consultation_service
        .change_booking_status(&caller_id, &slot_id, &student_id, &payload.status)
        .await?;

    let message = if updated.status == STATUS_CONFIRMED {
        "Request accepted successfully"
    } else {
        "Request rejected successfully"
    };

    Ok(Json(json!({ "success": message })))
}

pub async fn delete_slot(
    State(state): State<Arc<AppState>>,
    CallerId(caller_id): CallerId,
    Path(slot_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.consultation_service.delete_slot(&caller_id, &slot_id).await?;

    Ok(Json(json!({
        "success": "Consultation slot deleted successfully"
    })))
}
