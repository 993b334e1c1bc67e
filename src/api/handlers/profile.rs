use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::CreateProfileRequest;
use crate::domain::models::profile::{Profile, ROLE_FACULTY, ROLE_STUDENT};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_profile(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Name must not be empty".into()));
    }
    match payload.role.as_str() {
        ROLE_FACULTY | ROLE_STUDENT => {},
        _ => return Err(AppError::Validation("Role must be FACULTY or STUDENT".into())),
    }

    let profile = Profile::new(payload.name, payload.role);
    let created = state.profile_repo.create(&profile).await?;

    info!("Profile created: {} ({})", created.id, created.role);
    Ok(Json(created))
}

pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let profile = state.profile_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Profile not found".into()))?;

    Ok(Json(profile))
}
