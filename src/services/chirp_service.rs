use crate::domain::chirp::Chirp;
use crate::domain::moderation::moderate;
use crate::domain::validation::{parse_id, validate_chirp_body};
use crate::error::{AppError, Result};
use crate::storage::ChirpRepository;
use opentelemetry::{global, metrics::Counter};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Debug)]
struct Metrics {
    chirps_created_total: Counter<u64>,
}

impl Metrics {
    fn new() -> Self {
        let meter = global::meter("chirpy-server");
        Self {
            chirps_created_total: meter
                .u64_counter("chirps_created_total")
                .with_description("Total number of chirps stored")
                .build(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ChirpService {
    chirps: Arc<dyn ChirpRepository>,
    metrics: Metrics,
}

impl ChirpService {
    #[must_use]
    pub fn new(chirps: Arc<dyn ChirpRepository>) -> Self {
        Self { chirps, metrics: Metrics::new() }
    }

    /// Validates, moderates and stores a chirp.
    ///
    /// The author id is taken at face value. An id naming no user is rejected by
    /// the store and surfaces as a server error.
    ///
    /// # Errors
    /// Returns `AppError::TooLong` if the raw body exceeds the length limit.
    /// Returns `AppError::InvalidId` if `user_id` is not a UUID.
    /// Returns `AppError::Internal` or `AppError::Database` if the store rejects the insert.
    #[tracing::instrument(skip(self, body), fields(body_len = body.len()), err(level = "warn"))]
    pub async fn create(&self, body: String, user_id: &str) -> Result<Chirp> {
        validate_chirp_body(&body)?;
        let user_id = parse_id(user_id, "user")?;

        let cleaned = moderate(&body);
        let chirp = self.chirps.create(&cleaned, user_id).await?;

        tracing::debug!(chirp_id = %chirp.id, "Chirp created");
        self.metrics.chirps_created_total.add(1, &[]);

        Ok(chirp)
    }

    /// # Errors
    /// Returns `AppError::Database` if the query fails.
    #[tracing::instrument(skip(self), err)]
    pub async fn list(&self) -> Result<Vec<Chirp>> {
        self.chirps.list().await
    }

    /// # Errors
    /// Returns `AppError::NotFound` if no chirp has this id.
    #[tracing::instrument(skip(self), err(level = "debug"))]
    pub async fn get(&self, id: Uuid) -> Result<Chirp> {
        self.chirps.find_by_id(id).await?.ok_or(AppError::NotFound("Chirp"))
    }
}
