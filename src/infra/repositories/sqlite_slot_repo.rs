use crate::domain::{models::{profile::Profile, slot::ConsultationSlot}, ports::SlotRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteSlotRepo {
    pool: SqlitePool,
}

impl SqliteSlotRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlotRepository for SqliteSlotRepo {
    async fn create(&self, slot: &ConsultationSlot) -> Result<ConsultationSlot, AppError> {
        sqlx::query_as::<_, ConsultationSlot>(
            "INSERT INTO consultation_slots (id, faculty_id, course_code, room, date, start_time, end_time, days_json, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&slot.id).bind(&slot.faculty_id).bind(&slot.course_code).bind(&slot.room)
            .bind(slot.date).bind(&slot.start_time).bind(&slot.end_time).bind(&slot.days_json)
            .bind(slot.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<ConsultationSlot>, AppError> {
        sqlx::query_as::<_, ConsultationSlot>("SELECT * FROM consultation_slots WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_faculty(&self, faculty_id: &str) -> Result<Vec<ConsultationSlot>, AppError> {
        sqlx::query_as::<_, ConsultationSlot>("SELECT * FROM consultation_slots WHERE faculty_id = ? ORDER BY date ASC").bind(faculty_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_booked_by_student(&self, student_id: &str) -> Result<Vec<ConsultationSlot>, AppError> {
        sqlx::query_as::<_, ConsultationSlot>(
            "SELECT s.* FROM consultation_slots s
             JOIN slot_students l ON l.slot_id = s.id
             WHERE l.student_id = ? ORDER BY s.date ASC"
        ).bind(student_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_available_for(&self, profile_id: &str) -> Result<Vec<ConsultationSlot>, AppError> {
        sqlx::query_as::<_, ConsultationSlot>(
            "SELECT * FROM consultation_slots
             WHERE id NOT IN (SELECT slot_id FROM slot_students WHERE student_id = ?)
             ORDER BY date DESC"
        ).bind(profile_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_students(&self, slot_id: &str) -> Result<Vec<Profile>, AppError> {
        sqlx::query_as::<_, Profile>(
            "SELECT p.* FROM profiles p
             JOIN slot_students l ON l.student_id = p.id
             WHERE l.slot_id = ?"
        ).bind(slot_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn delete_cascading(&self, slot_id: &str, faculty_id: &str) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let owned = sqlx::query("SELECT id FROM consultation_slots WHERE id = ? AND faculty_id = ?")
            .bind(slot_id).bind(faculty_id)
            .fetch_optional(&mut *tx).await.map_err(AppError::Database)?;
        if owned.is_none() {
            return Err(AppError::NotFound("Slot not found or you don't have permission to delete it".into()));
        }

        sqlx::query("DELETE FROM bookings WHERE slot_id = ?").bind(slot_id).execute(&mut *tx).await.map_err(AppError::Database)?;
        sqlx::query("DELETE FROM slot_students WHERE slot_id = ?").bind(slot_id).execute(&mut *tx).await.map_err(AppError::Database)?;
        sqlx::query("DELETE FROM consultation_slots WHERE id = ?").bind(slot_id).execute(&mut *tx).await.map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(())
    }
}
