use crate::domain::chirp::Chirp;
use crate::error::Result;
use crate::storage::records::ChirpRecord;
use crate::storage::{ChirpRepository, DbPool};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct PgChirpRepository {
    pool: DbPool,
}

impl PgChirpRepository {
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChirpRepository for PgChirpRepository {
    #[tracing::instrument(level = "debug", skip(self, body))]
    async fn create(&self, body: &str, user_id: Uuid) -> Result<Chirp> {
        let record = sqlx::query_as::<_, ChirpRecord>(
            r#"
            INSERT INTO chirps (body, user_id)
            VALUES ($1, $2)
            RETURNING id, body, user_id, created_at, updated_at
            "#,
        )
        .bind(body)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(record.into())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn list(&self) -> Result<Vec<Chirp>> {
        let records = sqlx::query_as::<_, ChirpRecord>(
            r#"
            SELECT id, body, user_id, created_at, updated_at
            FROM chirps
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chirp>> {
        let record = sqlx::query_as::<_, ChirpRecord>(
            r#"
            SELECT id, body, user_id, created_at, updated_at
            FROM chirps
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(Into::into))
    }
}
