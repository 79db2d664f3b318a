use crate::domain::chirp::Chirp;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
pub(crate) struct ChirpRecord {
    pub id: Uuid,
    pub body: String,
    pub user_id: Uuid,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<ChirpRecord> for Chirp {
    fn from(record: ChirpRecord) -> Self {
        Self {
            id: record.id,
            body: record.body,
            user_id: record.user_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
