use super::breed::BreedQueries;
use super::PgStore;
use crate::error::StorageError;
use crate::model::{truncate_to_micros, Breed, Dog};
use crate::repository::DogRepository;
use async_trait::async_trait;

const SELECT_DOGS: &str = "SELECT id, dog_name, breed_id, breeder_id, color, \
     date_of_birth, spayed_neutered, description, weight FROM dogs ORDER BY dog_name, id";

const SELECT_DOG_BY_ID: &str = "SELECT id, dog_name, breed_id, breeder_id, color, \
     date_of_birth, spayed_neutered, description, weight FROM dogs WHERE id = $1";

const INSERT_DOG: &str = "INSERT INTO dogs (dog_name, breed_id, breeder_id, color, \
     date_of_birth, spayed_neutered, description, weight) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING id";

const UPDATE_DOG: &str = "UPDATE dogs SET dog_name = $1, breed_id = $2, breeder_id = $3, \
     color = $4, date_of_birth = $5, spayed_neutered = $6, description = $7, weight = $8 \
     WHERE id = $9";

const DELETE_DOG: &str = "DELETE FROM dogs WHERE id = $1";

pub struct PgDogRepository {
    store: PgStore,
    breeds: BreedQueries,
}

impl PgDogRepository {
    pub fn new(store: PgStore) -> Self {
        PgDogRepository {
            store,
            breeds: BreedQueries::for_table("dog_breeds"),
        }
    }
}

#[async_trait]
impl DogRepository for PgDogRepository {
    async fn all_breeds(&self) -> Result<Vec<Breed>, StorageError> {
        self.breeds.all(&self.store).await
    }

    async fn breed_by_id(&self, id: i32) -> Result<Option<Breed>, StorageError> {
        self.breeds.by_id(&self.store, id).await
    }

    async fn all_dogs(&self) -> Result<Vec<Dog>, StorageError> {
        self.store
            .bounded("all_dogs", sqlx::query_as::<_, Dog>(SELECT_DOGS).fetch_all(self.store.pool()))
            .await
    }

    async fn dog_by_id(&self, id: i32) -> Result<Option<Dog>, StorageError> {
        self.store
            .bounded(
                "dog_by_id",
                sqlx::query_as::<_, Dog>(SELECT_DOG_BY_ID).bind(id).fetch_optional(self.store.pool()),
            )
            .await
    }

    async fn insert_dog(&self, dog: &Dog) -> Result<i32, StorageError> {
        let q = sqlx::query_scalar::<_, i32>(INSERT_DOG)
            .bind(&dog.dog_name)
            .bind(dog.breed_id)
            .bind(dog.breeder_id)
            .bind(&dog.color)
            .bind(truncate_to_micros(dog.date_of_birth))
            .bind(dog.spayed_neutered)
            .bind(&dog.description)
            .bind(dog.weight);
        self.store.bounded("insert_dog", q.fetch_one(self.store.pool())).await
    }

    async fn update_dog(&self, dog: &Dog) -> Result<(), StorageError> {
        let q = sqlx::query(UPDATE_DOG)
            .bind(&dog.dog_name)
            .bind(dog.breed_id)
            .bind(dog.breeder_id)
            .bind(&dog.color)
            .bind(truncate_to_micros(dog.date_of_birth))
            .bind(dog.spayed_neutered)
            .bind(&dog.description)
            .bind(dog.weight)
            .bind(dog.id);
        let res = self.store.bounded("update_dog", q.execute(self.store.pool())).await?;
        tracing::debug!("update_dog {}: {} row(s)", dog.id, res.rows_affected());
        Ok(())
    }

    async fn delete_dog(&self, id: i32) -> Result<(), StorageError> {
        let q = sqlx::query(DELETE_DOG).bind(id);
        self.store.bounded("delete_dog", q.execute(self.store.pool())).await?;
        Ok(())
    }
}
