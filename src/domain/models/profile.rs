use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const ROLE_FACULTY: &str = "FACULTY";
pub const ROLE_STUDENT: &str = "STUDENT";

/// Owned by the authentication collaborator; this service only reads
/// id and role to authorize workflow operations.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(name: String, role: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            role,
            created_at: Utc::now(),
        }
    }

    pub fn is_faculty(&self) -> bool {
        self.role == ROLE_FACULTY
    }

    pub fn is_student(&self) -> bool {
        self.role == ROLE_STUDENT
    }
}
