use crate::error::StorageError;
use crate::model::{Breed, Cat};
use crate::repository::CatRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct CatService {
    repo: Arc<dyn CatRepository>,
}

impl CatService {
    pub fn new(repo: Arc<dyn CatRepository>) -> Self {
        CatService { repo }
    }

    pub async fn all_breeds(&self) -> Result<Vec<Breed>, StorageError> {
        self.repo.all_breeds().await
    }

    pub async fn breed_by_id(&self, id: i32) -> Result<Option<Breed>, StorageError> {
        self.repo.breed_by_id(id).await
    }

    pub async fn all_cats(&self) -> Result<Vec<Cat>, StorageError> {
        self.repo.all_cats().await
    }

    pub async fn cat_by_id(&self, id: i32) -> Result<Option<Cat>, StorageError> {
        self.repo.cat_by_id(id).await
    }

    pub async fn create_cat(&self, cat: &Cat) -> Result<i32, StorageError> {
        self.repo.insert_cat(cat).await
    }

    pub async fn update_cat(&self, cat: &Cat) -> Result<(), StorageError> {
        self.repo.update_cat(cat).await
    }

    pub async fn delete_cat(&self, id: i32) -> Result<(), StorageError> {
        self.repo.delete_cat(id).await
    }
}
