//! Application context: one service per domain, all built over the same backend.

use crate::repository::{
    BreederRepository, CatRepository, DogRepository, FixtureBreederRepository, FixtureCatRepository,
    FixtureDogRepository, PgBreederRepository, PgCatRepository, PgDogRepository, PgStore,
};
use crate::service::{BreederService, CatService, DogService};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub dogs: DogService,
    pub cats: CatService,
    pub breeders: BreederService,
    /// Set for the PostgreSQL backend; used by the readiness probe.
    pub pool: Option<PgPool>,
}

impl AppState {
    pub fn postgres(store: PgStore) -> Self {
        let pool = store.pool().clone();
        let mut state = Self::from_repositories(
            Arc::new(PgDogRepository::new(store.clone())),
            Arc::new(PgCatRepository::new(store.clone())),
            Arc::new(PgBreederRepository::new(store)),
        );
        state.pool = Some(pool);
        state
    }

    pub fn fixture() -> Self {
        Self::from_repositories(
            Arc::new(FixtureDogRepository::new()),
            Arc::new(FixtureCatRepository::new()),
            Arc::new(FixtureBreederRepository::new()),
        )
    }

    pub fn from_repositories(
        dogs: Arc<dyn DogRepository>,
        cats: Arc<dyn CatRepository>,
        breeders: Arc<dyn BreederRepository>,
    ) -> Self {
        AppState {
            dogs: DogService::new(dogs),
            cats: CatService::new(cats),
            breeders: BreederService::new(breeders),
            pool: None,
        }
    }
}
