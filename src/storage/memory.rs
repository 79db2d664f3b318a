use crate::domain::chirp::Chirp;
use crate::domain::user::User;
use crate::error::{AppError, Result};
use crate::storage::{ChirpRepository, UserRepository};
use async_trait::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    chirps: Vec<Chirp>,
}

/// Process-local store with the same constraints as the relational schema:
/// unique emails, chirps must reference an existing user, and deleting users
/// cascades to their chirps. A dangling author fails as a storage error, like
/// the foreign key in PostgreSQL.
///
/// Clones share the same tables.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, email: &str, password_hash: &str) -> Result<User> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.email == email) {
            return Err(AppError::DuplicateEmail);
        }

        let now = OffsetDateTime::now_utc();
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: now,
            updated_at: now,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn delete_all(&self) -> Result<u64> {
        let mut tables = self.tables.write().await;
        let removed = tables.users.len() as u64;
        tables.users.clear();
        tables.chirps.clear();
        Ok(removed)
    }
}

#[async_trait]
impl ChirpRepository for MemoryStore {
    async fn create(&self, body: &str, user_id: Uuid) -> Result<Chirp> {
        let mut tables = self.tables.write().await;
        if !tables.users.iter().any(|u| u.id == user_id) {
            tracing::error!(%user_id, "Chirp author does not exist");
            return Err(AppError::Internal);
        }

        let now = OffsetDateTime::now_utc();
        let chirp = Chirp { id: Uuid::new_v4(), body: body.to_string(), user_id, created_at: now, updated_at: now };
        tables.chirps.push(chirp.clone());
        Ok(chirp)
    }

    async fn list(&self) -> Result<Vec<Chirp>> {
        Ok(self.tables.read().await.chirps.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chirp>> {
        let tables = self.tables.read().await;
        Ok(tables.chirps.iter().find(|c| c.id == id).cloned())
    }
}
