//! Persistence contracts per domain, with a PostgreSQL and an in-memory fixture backend.
//!
//! Both backends return the same shapes: lists ordered by name, `None` for a missing id,
//! and `average_weight` derived from the breed's weight bounds.

pub mod fixture;
pub mod postgres;

use crate::error::StorageError;
use crate::model::{Breed, Breeder, Cat, Dog};
use async_trait::async_trait;

pub use fixture::{FixtureBreederRepository, FixtureCatRepository, FixtureDogRepository, FIXTURE_INSERT_ID};
pub use postgres::{PgBreederRepository, PgCatRepository, PgDogRepository, PgStore};

#[async_trait]
pub trait DogRepository: Send + Sync {
    async fn all_breeds(&self) -> Result<Vec<Breed>, StorageError>;
    async fn breed_by_id(&self, id: i32) -> Result<Option<Breed>, StorageError>;

    async fn all_dogs(&self) -> Result<Vec<Dog>, StorageError>;
    async fn dog_by_id(&self, id: i32) -> Result<Option<Dog>, StorageError>;
    /// Ignores `dog.id`; returns the id assigned by storage.
    async fn insert_dog(&self, dog: &Dog) -> Result<i32, StorageError>;
    /// Replaces every field of the row keyed by `dog.id`. A missing row is not an error.
    async fn update_dog(&self, dog: &Dog) -> Result<(), StorageError>;
    async fn delete_dog(&self, id: i32) -> Result<(), StorageError>;
}

#[async_trait]
pub trait CatRepository: Send + Sync {
    async fn all_breeds(&self) -> Result<Vec<Breed>, StorageError>;
    async fn breed_by_id(&self, id: i32) -> Result<Option<Breed>, StorageError>;

    async fn all_cats(&self) -> Result<Vec<Cat>, StorageError>;
    async fn cat_by_id(&self, id: i32) -> Result<Option<Cat>, StorageError>;
    async fn insert_cat(&self, cat: &Cat) -> Result<i32, StorageError>;
    async fn update_cat(&self, cat: &Cat) -> Result<(), StorageError>;
    async fn delete_cat(&self, id: i32) -> Result<(), StorageError>;
}

#[async_trait]
pub trait BreederRepository: Send + Sync {
    async fn all_breeders(&self) -> Result<Vec<Breeder>, StorageError>;
    async fn breeder_by_id(&self, id: i32) -> Result<Option<Breeder>, StorageError>;
    async fn insert_breeder(&self, breeder: &Breeder) -> Result<i32, StorageError>;
    async fn update_breeder(&self, breeder: &Breeder) -> Result<(), StorageError>;
    async fn delete_breeder(&self, id: i32) -> Result<(), StorageError>;
}
