use super::breed::BreedQueries;
use super::PgStore;
use crate::error::StorageError;
use crate::model::{truncate_to_micros, Breed, Cat};
use crate::repository::CatRepository;
use async_trait::async_trait;

const SELECT_CATS: &str = "SELECT id, cat_name, breed_id, breeder_id, color, \
     date_of_birth, spayed_neutered, description, weight FROM cats ORDER BY cat_name, id";

const SELECT_CAT_BY_ID: &str = "SELECT id, cat_name, breed_id, breeder_id, color, \
     date_of_birth, spayed_neutered, description, weight FROM cats WHERE id = $1";

const INSERT_CAT: &str = "INSERT INTO cats (cat_name, breed_id, breeder_id, color, \
     date_of_birth, spayed_neutered, description, weight) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING id";

const UPDATE_CAT: &str = "UPDATE cats SET cat_name = $1, breed_id = $2, breeder_id = $3, \
     color = $4, date_of_birth = $5, spayed_neutered = $6, description = $7, weight = $8 \
     WHERE id = $9";

const DELETE_CAT: &str = "DELETE FROM cats WHERE id = $1";

pub struct PgCatRepository {
    store: PgStore,
    breeds: BreedQueries,
}

impl PgCatRepository {
    pub fn new(store: PgStore) -> Self {
        PgCatRepository {
            store,
            breeds: BreedQueries::for_table("cat_breeds"),
        }
    }
}

#[async_trait]
impl CatRepository for PgCatRepository {
    async fn all_breeds(&self) -> Result<Vec<Breed>, StorageError> {
        self.breeds.all(&self.store).await
    }

    async fn breed_by_id(&self, id: i32) -> Result<Option<Breed>, StorageError> {
        self.breeds.by_id(&self.store, id).await
    }

    async fn all_cats(&self) -> Result<Vec<Cat>, StorageError> {
        self.store
            .bounded("all_cats", sqlx::query_as::<_, Cat>(SELECT_CATS).fetch_all(self.store.pool()))
            .await
    }

    async fn cat_by_id(&self, id: i32) -> Result<Option<Cat>, StorageError> {
        self.store
            .bounded(
                "cat_by_id",
                sqlx::query_as::<_, Cat>(SELECT_CAT_BY_ID).bind(id).fetch_optional(self.store.pool()),
            )
            .await
    }

    async fn insert_cat(&self, cat: &Cat) -> Result<i32, StorageError> {
        let q = sqlx::query_scalar::<_, i32>(INSERT_CAT)
            .bind(&cat.cat_name)
            .bind(cat.breed_id)
            .bind(cat.breeder_id)
            .bind(&cat.color)
            .bind(truncate_to_micros(cat.date_of_birth))
            .bind(cat.spayed_neutered)
            .bind(&cat.description)
            .bind(cat.weight);
        self.store.bounded("insert_cat", q.fetch_one(self.store.pool())).await
    }

    async fn update_cat(&self, cat: &Cat) -> Result<(), StorageError> {
        let q = sqlx::query(UPDATE_CAT)
            .bind(&cat.cat_name)
            .bind(cat.breed_id)
            .bind(cat.breeder_id)
            .bind(&cat.color)
            .bind(truncate_to_micros(cat.date_of_birth))
            .bind(cat.spayed_neutered)
            .bind(&cat.description)
            .bind(cat.weight)
            .bind(cat.id);
        let res = self.store.bounded("update_cat", q.execute(self.store.pool())).await?;
        tracing::debug!("update_cat {}: {} row(s)", cat.id, res.rows_affected());
        Ok(())
    }

    async fn delete_cat(&self, id: i32) -> Result<(), StorageError> {
        let q = sqlx::query(DELETE_CAT).bind(id);
        self.store.bounded("delete_cat", q.execute(self.store.pool())).await?;
        Ok(())
    }
}
