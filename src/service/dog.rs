use crate::error::StorageError;
use crate::model::{Breed, Dog};
use crate::repository::DogRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct DogService {
    repo: Arc<dyn DogRepository>,
}

impl DogService {
    pub fn new(repo: Arc<dyn DogRepository>) -> Self {
        DogService { repo }
    }

    pub async fn all_breeds(&self) -> Result<Vec<Breed>, StorageError> {
        self.repo.all_breeds().await
    }

    pub async fn breed_by_id(&self, id: i32) -> Result<Option<Breed>, StorageError> {
        self.repo.breed_by_id(id).await
    }

    pub async fn all_dogs(&self) -> Result<Vec<Dog>, StorageError> {
        self.repo.all_dogs().await
    }

    pub async fn dog_by_id(&self, id: i32) -> Result<Option<Dog>, StorageError> {
        self.repo.dog_by_id(id).await
    }

    /// Returns the id assigned by storage.
    pub async fn create_dog(&self, dog: &Dog) -> Result<i32, StorageError> {
        self.repo.insert_dog(dog).await
    }

    pub async fn update_dog(&self, dog: &Dog) -> Result<(), StorageError> {
        self.repo.update_dog(dog).await
    }

    pub async fn delete_dog(&self, id: i32) -> Result<(), StorageError> {
        self.repo.delete_dog(id).await
    }
}
