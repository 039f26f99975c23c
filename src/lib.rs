//! Pet breeder catalog: dog, cat and breeder domains, each a repository behind a service
//! behind JSON handlers. Repositories come in two interchangeable backends, PostgreSQL and
//! an in-memory fixture; the backend is chosen once when the `AppState` is built.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{AppConfig, Backend, PoolConfig};
pub use error::{AppError, ConfigError, StorageError};
pub use repository::{BreederRepository, CatRepository, DogRepository, PgStore};
pub use routes::app;
pub use service::{BreederService, CatService, DogService};
pub use state::AppState;
pub use store::{connect_pool, ensure_database_exists, ensure_tables};
