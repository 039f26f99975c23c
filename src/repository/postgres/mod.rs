//! PostgreSQL backend. Every call is bounded by the store's query timeout and binds all
//! caller-supplied values as parameters.

mod breed;
mod breeder;
mod cat;
mod dog;

pub use breeder::PgBreederRepository;
pub use cat::PgCatRepository;
pub use dog::PgDogRepository;

use crate::error::StorageError;
use sqlx::PgPool;
use std::future::Future;
use std::time::Duration;

/// Per-call limit applied when no other timeout is configured.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(3);

/// Pool handle shared by the three PostgreSQL repositories.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
    timeout: Duration,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self::with_timeout(pool, DEFAULT_QUERY_TIMEOUT)
    }

    pub fn with_timeout(pool: PgPool, timeout: Duration) -> Self {
        PgStore { pool, timeout }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn bounded<T, F>(&self, operation: &'static str, fut: F) -> Result<T, StorageError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        run_bounded(self.timeout, operation, fut).await
    }
}

/// Runs `fut` for at most `limit`. On expiry the future is dropped and `StorageError::Timeout` returned.
pub async fn run_bounded<T, F>(limit: Duration, operation: &'static str, fut: F) -> Result<T, StorageError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(res) => res.map_err(StorageError::from),
        Err(_) => {
            tracing::warn!("{} abandoned after {:?}", operation, limit);
            Err(StorageError::Timeout { operation, limit })
        }
    }
}
