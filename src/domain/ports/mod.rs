use crate::domain::models::{
    profile::Profile, slot::ConsultationSlot, booking::Booking,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn create(&self, profile: &Profile) -> Result<Profile, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Profile>, AppError>;
    async fn find_by_id_and_role(&self, id: &str, role: &str) -> Result<Option<Profile>, AppError>;
}

#[async_trait]
pub trait SlotRepository: Send + Sync {
    async fn create(&self, slot: &ConsultationSlot) -> Result<ConsultationSlot, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<ConsultationSlot>, AppError>;
    async fn list_by_faculty(&self, faculty_id: &str) -> Result<Vec<ConsultationSlot>, AppError>;
    async fn list_booked_by_student(&self, student_id: &str) -> Result<Vec<ConsultationSlot>, AppError>;
    async fn list_available_for(&self, profile_id: &str) -> Result<Vec<ConsultationSlot>, AppError>;
    async fn list_students(&self, slot_id: &str) -> Result<Vec<Profile>, AppError>;
    /// Removes the slot's bookings, its student links and then the slot
    /// itself inside one transaction. Fails with NotFound unless a slot
    /// with that id is owned by `faculty_id`.
    async fn delete_cascading(&self, slot_id: &str, faculty_id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Inserts the booking and attaches the student to the slot's student
    /// set inside one transaction. A duplicate (slot_id, student_id) pair
    /// surfaces as a database unique violation.
    async fn create_with_link(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn find(&self, slot_id: &str, student_id: &str) -> Result<Option<Booking>, AppError>;
    async fn update_status(&self, slot_id: &str, student_id: &str, status: &str) -> Result<Booking, AppError>;
}
