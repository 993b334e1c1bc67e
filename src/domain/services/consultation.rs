use std::sync::Arc;
use crate::config::Config;
use crate::domain::models::{
    booking::{Booking, STATUS_CONFIRMED, STATUS_REJECTED},
    profile::{Profile, ROLE_FACULTY, ROLE_STUDENT},
    slot::{ConsultationSlot, NewSlotParams},
};
use crate::domain::ports::{BookingRepository, ProfileRepository, SlotRepository};
use crate::error::AppError;
use tracing::info;

/// A slot joined with the data the consultation views need: the owning
/// faculty's display name, the linked students, and (for student callers)
/// the caller's own booking status.
pub struct SlotView {
    pub slot: ConsultationSlot,
    pub faculty_name: String,
    pub students: Vec<Profile>,
    pub caller_booking_status: Option<String>,
}

/// Orchestrates the consultation booking workflow: who may create, book,
/// approve/reject and delete, and which mutations must happen atomically.
/// The caller identity is always passed in explicitly; this service never
/// reads ambient session state.
pub struct ConsultationService {
    profile_repo: Arc<dyn ProfileRepository>,
    slot_repo: Arc<dyn SlotRepository>,
    booking_repo: Arc<dyn BookingRepository>,
    config: Config,
}

impl ConsultationService {
    pub fn new(
        profile_repo: Arc<dyn ProfileRepository>,
        slot_repo: Arc<dyn SlotRepository>,
        booking_repo: Arc<dyn BookingRepository>,
        config: Config,
    ) -> Self {
        Self { profile_repo, slot_repo, booking_repo, config }
    }

    pub async fn create_slot(&self, caller_id: &str, params: NewSlotParams) -> Result<ConsultationSlot, AppError> {
        // Field presence is checked before the caller's role; a missing
        // field reports as validation, not authorization.
        if params.course_code.trim().is_empty()
            || params.room.trim().is_empty()
            || params.start_time.trim().is_empty()
            || params.end_time.trim().is_empty()
        {
            return Err(AppError::Validation("Please fill in all fields".into()));
        }
        if params.days.is_empty() || params.days.len() > 2 || params.days.iter().any(|d| d.trim().is_empty()) {
            return Err(AppError::Validation("Select one or two weekdays".into()));
        }

        let faculty = self.profile_repo.find_by_id_and_role(caller_id, ROLE_FACULTY).await?
            .ok_or(AppError::Unauthorized)?;

        let slot = ConsultationSlot::new(NewSlotParams {
            faculty_id: faculty.id.clone(),
            ..params
        });

        let created = self.slot_repo.create(&slot).await?;
        info!("Consultation slot {} created by faculty {}", created.id, faculty.id);
        Ok(created)
    }

    pub async fn book_slot(&self, caller_id: &str, slot_id: &str) -> Result<Booking, AppError> {
        let student = self.profile_repo.find_by_id_and_role(caller_id, ROLE_STUDENT).await?
            .ok_or(AppError::Unauthorized)?;

        let slot = self.slot_repo.find_by_id(slot_id).await?
            .ok_or(AppError::NotFound("Consultation slot not found".into()))?;

        if let Some(existing) = self.booking_repo.find(&slot.id, &student.id).await? {
            return Err(AppError::Conflict(if existing.is_confirmed() {
                "You already have a confirmed booking for this slot".to_string()
            } else {
                "You already have a pending booking for this slot".to_string()
            }));
        }

        // Booking row and student link commit together; the composite
        // primary key serializes concurrent attempts by the same student.
        let booking = Booking::new(slot.id.clone(), student.id.clone());
        let created = self.booking_repo.create_with_link(&booking).await?;

        info!("Student {} booked slot {}", student.id, slot.id);
        Ok(created)
    }

    /// Updates a booking's status. Slot ownership is not checked unless
    /// `enforce_slot_ownership` is configured: by default any faculty
    /// member may change any booking once the slot exists.
    pub async fn change_booking_status(
        &self,
        caller_id: &str,
        slot_id: &str,
        student_id: &str,
        new_status: &str,
    ) -> Result<Booking, AppError> {
        let faculty = self.profile_repo.find_by_id_and_role(caller_id, ROLE_FACULTY).await?
            .ok_or(AppError::Unauthorized)?;

        if new_status != STATUS_CONFIRMED && new_status != STATUS_REJECTED {
            return Err(AppError::Validation("Status must be confirmed or rejected".into()));
        }

        let slot = self.slot_repo.find_by_id(slot_id).await?
            .ok_or(AppError::NotFound("Slot not found".into()))?;

        if self.config.enforce_slot_ownership && slot.faculty_id != faculty.id {
            return Err(AppError::Forbidden("You do not own this slot".into()));
        }

        let updated = self.booking_repo.update_status(&slot.id, student_id, new_status).await?;
        info!("Booking ({}, {}) set to {} by faculty {}", slot.id, student_id, new_status, faculty.id);
        Ok(updated)
    }

    pub async fn delete_slot(&self, caller_id: &str, slot_id: &str) -> Result<(), AppError> {
        let faculty = self.profile_repo.find_by_id_and_role(caller_id, ROLE_FACULTY).await?
            .ok_or(AppError::Unauthorized)?;

        self.slot_repo.delete_cascading(slot_id, &faculty.id).await?;
        info!("Consultation slot {} deleted by faculty {}", slot_id, faculty.id);
        Ok(())
    }

    pub async fn get_slot(&self, caller_id: &str, slot_id: &str) -> Result<SlotView, AppError> {
        let slot = self.slot_repo.find_by_id(slot_id).await?
            .ok_or(AppError::NotFound("Consultation slot not found".into()))?;
        self.build_view(caller_id, slot).await
    }

    /// Role-aware listing: faculty see the slots they own, students see the
    /// slots they have booked. Ordered by date ascending.
    pub async fn list_for_caller(&self, caller_id: &str) -> Result<Vec<SlotView>, AppError> {
        let profile = self.profile_repo.find_by_id(caller_id).await?
            .ok_or(AppError::Unauthorized)?;

        let slots = if profile.is_faculty() {
            self.slot_repo.list_by_faculty(&profile.id).await?
        } else {
            self.slot_repo.list_booked_by_student(&profile.id).await?
        };

        let mut views = Vec::with_capacity(slots.len());
        for slot in slots {
            views.push(self.build_view(caller_id, slot).await?);
        }
        Ok(views)
    }

    /// Slots the caller is not yet linked to, newest date first.
    pub async fn list_available(&self, caller_id: &str) -> Result<Vec<SlotView>, AppError> {
        let profile = self.profile_repo.find_by_id(caller_id).await?
            .ok_or(AppError::Unauthorized)?;

        let slots = self.slot_repo.list_available_for(&profile.id).await?;

        let mut views = Vec::with_capacity(slots.len());
        for slot in slots {
            views.push(self.build_view(caller_id, slot).await?);
        }
        Ok(views)
    }

    async fn build_view(&self, caller_id: &str, slot: ConsultationSlot) -> Result<SlotView, AppError> {
        let faculty_name = self.profile_repo.find_by_id(&slot.faculty_id).await?
            .map(|p| p.name)
            .unwrap_or_default();

        let students = self.slot_repo.list_students(&slot.id).await?;

        let caller_booking_status = self.booking_repo.find(&slot.id, caller_id).await?
            .map(|b| b.status);

        Ok(SlotView { slot, faculty_name, students, caller_booking_status })
    }
}
