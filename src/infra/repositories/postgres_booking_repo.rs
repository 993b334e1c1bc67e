use crate::domain::{models::booking::Booking, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepo {
    async fn create_with_link(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (slot_id, student_id, status, created_at) VALUES ($1, $2, $3, $4) RETURNING *"
        )
            .bind(&booking.slot_id).bind(&booking.student_id).bind(&booking.status).bind(booking.created_at)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        sqlx::query("INSERT INTO slot_students (slot_id, student_id) VALUES ($1, $2)")
            .bind(&booking.slot_id).bind(&booking.student_id)
            .execute(&mut *tx).await.map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }
    async fn find(&self, slot_id: &str, student_id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE slot_id = $1 AND student_id = $2").bind(slot_id).bind(student_id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn update_status(&self, slot_id: &str, student_id: &str, status: &str) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $1 WHERE slot_id = $2 AND student_id = $3 RETURNING *"
        )
            .bind(status).bind(slot_id).bind(student_id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Booking not found".into()))
    }
}
