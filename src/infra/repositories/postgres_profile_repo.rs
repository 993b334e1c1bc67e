use crate::domain::{models::profile::Profile, ports::ProfileRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresProfileRepo {
    pool: PgPool,
}

impl PostgresProfileRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepo {
    async fn create(&self, profile: &Profile) -> Result<Profile, AppError> {
        sqlx::query_as::<_, Profile>(
            "INSERT INTO profiles (id, name, role, created_at) VALUES ($1, $2, $3, $4) RETURNING *"
        )
            .bind(&profile.id).bind(&profile.name).bind(&profile.role).bind(profile.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Profile>, AppError> {
        sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id_and_role(&self, id: &str, role: &str) -> Result<Option<Profile>, AppError> {
        sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = $1 AND role = $2").bind(id).bind(role).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
}
