use crate::domain::chirp::Chirp;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Missing fields decode as empty strings: an absent body is a valid empty
/// chirp and an absent author id fails identifier parsing.
#[derive(Deserialize)]
pub struct CreateChirp {
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct ChirpResponse {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub body: String,
    pub user_id: Uuid,
}

impl From<Chirp> for ChirpResponse {
    fn from(chirp: Chirp) -> Self {
        Self {
            id: chirp.id,
            created_at: chirp.created_at,
            updated_at: chirp.updated_at,
            body: chirp.body,
            user_id: chirp.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_chirp_response_shape() {
        let chirp = Chirp {
            id: Uuid::nil(),
            body: "hello".to_string(),
            user_id: Uuid::nil(),
            created_at: datetime!(2024-01-02 03:04:05 UTC),
            updated_at: datetime!(2024-01-02 03:04:05 UTC),
        };

        let json = serde_json::to_value(ChirpResponse::from(chirp)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "00000000-0000-0000-0000-000000000000",
                "created_at": "2024-01-02T03:04:05Z",
                "updated_at": "2024-01-02T03:04:05Z",
                "body": "hello",
                "user_id": "00000000-0000-0000-0000-000000000000",
            })
        );
    }

    #[test]
    fn test_create_chirp_defaults() {
        let payload: CreateChirp = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.body, "");
        assert_eq!(payload.user_id, "");
    }
}
