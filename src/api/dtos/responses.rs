use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::services::consultation::SlotView;

#[derive(Serialize)]
pub struct StudentResponse {
    pub id: String,
    pub name: String,
}

#[derive(Serialize)]
pub struct SlotResponse {
    pub id: String,
    pub faculty_id: String,
    pub faculty_name: String,
    pub course_code: String,
    pub room: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub days: Vec<String>,
    pub students: Vec<StudentResponse>,
    pub booking_status: Option<String>,
}

impl From<SlotView> for SlotResponse {
    fn from(view: SlotView) -> Self {
        Self {
            days: view.slot.days(),
            id: view.slot.id,
            faculty_id: view.slot.faculty_id,
            faculty_name: view.faculty_name,
            course_code: view.slot.course_code,
            room: view.slot.room,
            date: view.slot.date,
            start_time: view.slot.start_time,
            end_time: view.slot.end_time,
            students: view.students.into_iter()
                .map(|p| StudentResponse { id: p.id, name: p.name })
                .collect(),
            booking_status: view.caller_booking_status,
        }
    }
}
