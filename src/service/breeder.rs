use crate::error::StorageError;
use crate::model::Breeder;
use crate::repository::BreederRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct BreederService {
    repo: Arc<dyn BreederRepository>,
}

impl BreederService {
    pub fn new(repo: Arc<dyn BreederRepository>) -> Self {
        BreederService { repo }
    }

    pub async fn all_breeders(&self) -> Result<Vec<Breeder>, StorageError> {
        self.repo.all_breeders().await
    }

    pub async fn breeder_by_id(&self, id: i32) -> Result<Option<Breeder>, StorageError> {
        self.repo.breeder_by_id(id).await
    }

    pub async fn create_breeder(&self, breeder: &Breeder) -> Result<i32, StorageError> {
        self.repo.insert_breeder(breeder).await
    }

    pub async fn update_breeder(&self, breeder: &Breeder) -> Result<(), StorageError> {
        self.repo.update_breeder(breeder).await
    }

    pub async fn delete_breeder(&self, id: i32) -> Result<(), StorageError> {
        self.repo.delete_breeder(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{FixtureBreederRepository, FIXTURE_INSERT_ID};

    #[tokio::test]
    async fn forwards_to_the_injected_repository() {
        let svc = BreederService::new(Arc::new(FixtureBreederRepository::new()));
        assert_eq!(svc.all_breeders().await.unwrap().len(), 2);
        let happy = svc.breeder_by_id(1).await.unwrap().unwrap();
        assert_eq!(happy.breeder_name, "Happy Paws Breeders");
        assert!(svc.breeder_by_id(999).await.unwrap().is_none());
        assert_eq!(svc.create_breeder(&happy).await.unwrap(), FIXTURE_INSERT_ID);
        svc.update_breeder(&happy).await.unwrap();
        svc.delete_breeder(999).await.unwrap();
    }
}
