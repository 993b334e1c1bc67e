use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// A faculty-defined availability window. The weekday tags are stored as a
/// JSON array in `days_json` and are used for recurrence display only.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ConsultationSlot {
    pub id: String,
    pub faculty_id: String,
    pub course_code: String,
    pub room: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub days_json: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewSlotParams {
    pub faculty_id: String,
    pub course_code: String,
    pub room: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub days: Vec<String>,
}

impl ConsultationSlot {
    pub fn new(params: NewSlotParams) -> Self {
        let days_json = serde_json::to_string(&params.days).unwrap_or_else(|_| "[]".to_string());

        Self {
            id: Uuid::new_v4().to_string(),
            faculty_id: params.faculty_id,
            course_code: params.course_code,
            room: params.room,
            date: params.date,
            start_time: params.start_time,
            end_time: params.end_time,
            days_json,
            created_at: Utc::now(),
        }
    }

    pub fn days(&self) -> Vec<String> {
        serde_json::from_str(&self.days_json).unwrap_or_default()
    }
}
