use crate::domain::user::User;
use crate::error::{AppError, Result};
use crate::services::credential_service::CredentialService;
use crate::storage::UserRepository;
use opentelemetry::{global, metrics::Counter};
use std::sync::Arc;

#[derive(Clone, Debug)]
struct Metrics {
    users_registered_total: Counter<u64>,
    login_failures_total: Counter<u64>,
}

impl Metrics {
    fn new() -> Self {
        let meter = global::meter("chirpy-server");
        Self {
            users_registered_total: meter
                .u64_counter("users_registered_total")
                .with_description("Total number of successful user registrations")
                .build(),
            login_failures_total: meter
                .u64_counter("auth_login_failures_total")
                .with_description("Total number of rejected login attempts")
                .build(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    credentials: CredentialService,
    metrics: Metrics,
}

impl UserService {
    #[must_use]
    pub fn new(users: Arc<dyn UserRepository>, credentials: CredentialService) -> Self {
        Self { users, credentials, metrics: Metrics::new() }
    }

    /// Creates an account with a hashed password.
    ///
    /// # Errors
    /// Returns `AppError::DuplicateEmail` if the email is taken.
    /// Returns `AppError::Internal` or `AppError::Database` on hashing or storage failure.
    #[tracing::instrument(
        skip(self, email, password),
        fields(user_id = tracing::field::Empty),
        err(level = "warn")
    )]
    pub async fn register(&self, email: String, password: String) -> Result<User> {
        let password_hash = self.credentials.hash_password(&password).await?;
        let user = self.users.create(&email, &password_hash).await?;

        tracing::Span::current().record("user_id", tracing::field::display(user.id));
        tracing::info!("User registered successfully");
        self.metrics.users_registered_total.add(1, &[]);

        Ok(user)
    }

    /// Checks an email/password pair.
    ///
    /// An unknown email and a wrong password fail identically.
    ///
    /// # Errors
    /// Returns `AppError::InvalidCredentials` if the pair does not match a user.
    #[tracing::instrument(
        skip(self, email, password),
        fields(user_id = tracing::field::Empty),
        err(level = "warn")
    )]
    pub async fn authenticate(&self, email: String, password: String) -> Result<User> {
        let Some(user) = self.users.find_by_email(&email).await? else {
            tracing::warn!("Login failed: user not found");
            self.metrics.login_failures_total.add(1, &[]);
            return Err(AppError::InvalidCredentials);
        };

        tracing::Span::current().record("user_id", tracing::field::display(user.id));

        if !self.credentials.verify_password(&password, &user.password_hash).await? {
            tracing::warn!("Login failed: invalid password");
            self.metrics.login_failures_total.add(1, &[]);
            return Err(AppError::InvalidCredentials);
        }

        tracing::info!("User logged in successfully");
        Ok(user)
    }

    /// Deletes every account. Callers are responsible for the dev-mode check.
    ///
    /// # Errors
    /// Returns `AppError::Database` if the deletion fails.
    #[tracing::instrument(skip(self), err)]
    pub async fn reset_all(&self) -> Result<()> {
        let removed = self.users.delete_all().await?;
        tracing::warn!(removed, "All users deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn setup_service() -> (UserService, MemoryStore) {
        let store = MemoryStore::new();
        let service = UserService::new(Arc::new(store.clone()), CredentialService::new());
        (service, store)
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let (service, store) = setup_service();
        let user = service.register("a@x.com".into(), "pw1".into()).await.unwrap();

        assert_eq!(user.email, "a@x.com");
        assert_ne!(user.password_hash, "pw1");
        let stored = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(stored.id, user.id);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let (service, store) = setup_service();
        let first = service.register("a@x.com".into(), "pw1".into()).await.unwrap();

        let err = service.register("a@x.com".into(), "pw2".into()).await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateEmail));

        // The first account and its password are untouched.
        let stored = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(stored.id, first.id);
        assert!(service.authenticate("a@x.com".into(), "pw1".into()).await.is_ok());
    }

    #[tokio::test]
    async fn test_authenticate() {
        let (service, _) = setup_service();
        let registered = service.register("a@x.com".into(), "pw1".into()).await.unwrap();

        let user = service.authenticate("a@x.com".into(), "pw1".into()).await.unwrap();
        assert_eq!(user.id, registered.id);
    }

    #[tokio::test]
    async fn test_authenticate_failures_are_indistinguishable() {
        let (service, _) = setup_service();
        service.register("a@x.com".into(), "pw1".into()).await.unwrap();

        let wrong_password = service.authenticate("a@x.com".into(), "nope".into()).await.unwrap_err();
        let unknown_email = service.authenticate("b@x.com".into(), "pw1".into()).await.unwrap_err();

        assert!(matches!(wrong_password, AppError::InvalidCredentials));
        assert!(matches!(unknown_email, AppError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_reset_all() {
        let (service, store) = setup_service();
        service.register("a@x.com".into(), "pw1".into()).await.unwrap();
        service.register("b@x.com".into(), "pw2".into()).await.unwrap();

        service.reset_all().await.unwrap();

        assert!(store.find_by_email("a@x.com").await.unwrap().is_none());
        assert!(store.find_by_email("b@x.com").await.unwrap().is_none());
        // Emails become available again.
        assert!(service.register("a@x.com".into(), "pw3".into()).await.is_ok());
    }
}
