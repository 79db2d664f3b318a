use crate::config::DatabaseConfig;
use crate::domain::chirp::Chirp;
use crate::domain::user::User;
use crate::error::Result;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::fmt::Debug;
use std::time::Duration;
use uuid::Uuid;

pub mod chirp_repo;
pub mod memory;
pub mod records;
pub mod user_repo;

pub use chirp_repo::PgChirpRepository;
pub use memory::MemoryStore;
pub use user_repo::PgUserRepository;

pub type DbPool = Pool<Postgres>;

/// SQLSTATE raised on a `UNIQUE` constraint violation.
pub(crate) const UNIQUE_VIOLATION: &str = "23505";

/// Persistence for user accounts.
#[async_trait]
pub trait UserRepository: Debug + Send + Sync {
    /// Inserts a new user.
    ///
    /// # Errors
    /// Returns `AppError::DuplicateEmail` if the email is already registered.
    /// Returns `AppError::Database` if the insert fails for any other reason.
    async fn create(&self, email: &str, password_hash: &str) -> Result<User>;

    /// Looks a user up by their login email.
    ///
    /// # Errors
    /// Returns `AppError::Database` if the query fails.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Deletes every user, returning how many were removed. Owned chirps go with them.
    ///
    /// # Errors
    /// Returns `AppError::Database` if the deletion fails.
    async fn delete_all(&self) -> Result<u64>;
}

/// Persistence for chirps.
#[async_trait]
pub trait ChirpRepository: Debug + Send + Sync {
    /// Inserts a chirp whose body has already been validated and moderated.
    ///
    /// # Errors
    /// Returns `AppError::Database` if the insert fails, including when the
    /// author does not exist.
    async fn create(&self, body: &str, user_id: Uuid) -> Result<Chirp>;

    /// Returns every chirp, oldest first.
    ///
    /// # Errors
    /// Returns `AppError::Database` if the query fails.
    async fn list(&self) -> Result<Vec<Chirp>>;

    /// # Errors
    /// Returns `AppError::Database` if the query fails.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chirp>>;
}

/// Initializes the database connection pool.
///
/// # Errors
/// Returns `sqlx::Error` if the connection fails.
pub async fn init_pool(config: &DatabaseConfig, url: &str) -> std::result::Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect(url)
        .await
}
