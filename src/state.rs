use std::sync::Arc;
use crate::config::Config;
use crate::domain::ports::{BookingRepository, ProfileRepository, SlotRepository};
use crate::domain::services::consultation::ConsultationService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub profile_repo: Arc<dyn ProfileRepository>,
    pub slot_repo: Arc<dyn SlotRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub consultation_service: Arc<ConsultationService>,
}
