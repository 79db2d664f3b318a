use crate::error::{AppError, Result};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand::rngs::OsRng;

/// Argon2id password hashing. Both operations run on the blocking pool.
#[derive(Clone, Debug, Default)]
pub struct CredentialService;

impl CredentialService {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Produces a PHC-formatted digest with a fresh random salt.
    ///
    /// # Errors
    /// Returns `AppError::Internal` if hashing fails or the blocking task panics.
    #[tracing::instrument(err, skip(self, password))]
    pub async fn hash_password(&self, password: &str) -> Result<String> {
        let password = password.to_string();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map_err(|_| AppError::Internal)
                .map(|h| h.to_string())
        })
        .await
        .map_err(|_| AppError::Internal)?
    }

    /// Checks `password` against a stored digest in constant time.
    ///
    /// A digest that cannot be parsed counts as a mismatch.
    ///
    /// # Errors
    /// Returns `AppError::Internal` if the blocking task panics.
    #[tracing::instrument(err, skip(self, password, password_hash))]
    pub async fn verify_password(&self, password: &str, password_hash: &str) -> Result<bool> {
        let password = password.to_string();
        let password_hash = password_hash.to_string();
        tokio::task::spawn_blocking(move || {
            let Ok(parsed_hash) = PasswordHash::new(&password_hash) else {
                tracing::warn!("Stored password hash is malformed");
                return false;
            };
            Argon2::default().verify_password(password.as_bytes(), &parsed_hash).is_ok()
        })
        .await
        .map_err(|_| AppError::Internal)
    }
}
