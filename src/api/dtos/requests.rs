use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateProfileRequest {
    pub name: String,
    pub role: String,
}

#[derive(Deserialize)]
pub struct CreateSlotRequest {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub course_code: String,
    pub room: String,
    pub days: Vec<String>,
}

#[derive(Deserialize)]
pub struct ChangeStatusRequest {
    pub status: String,
}
