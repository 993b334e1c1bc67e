use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_CONFIRMED: &str = "confirmed";
pub const STATUS_REJECTED: &str = "rejected";

/// A student's request to meet during a slot. At most one booking exists
/// per (slot_id, student_id) pair, enforced by the composite primary key.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub slot_id: String,
    pub student_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(slot_id: String, student_id: String) -> Self {
        Self {
            slot_id,
            student_id,
            status: STATUS_PENDING.to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == STATUS_CONFIRMED
    }
}
