use super::PgStore;
use crate::error::StorageError;
use crate::model::Breeder;
use crate::repository::BreederRepository;
use async_trait::async_trait;

const BREEDER_COLUMNS: &str =
    "id, breeder_name, address, city, prov_state, country, zip, phone, email, active";

const INSERT_BREEDER: &str = "INSERT INTO breeders (breeder_name, address, city, prov_state, \
     country, zip, phone, email, active) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING id";

const UPDATE_BREEDER: &str = "UPDATE breeders SET breeder_name = $1, address = $2, city = $3, \
     prov_state = $4, country = $5, zip = $6, phone = $7, email = $8, active = $9 \
     WHERE id = $10";

const DELETE_BREEDER: &str = "DELETE FROM breeders WHERE id = $1";

pub struct PgBreederRepository {
    store: PgStore,
    select_all: String,
    select_by_id: String,
}

impl PgBreederRepository {
    pub fn new(store: PgStore) -> Self {
        PgBreederRepository {
            store,
            select_all: format!("SELECT {} FROM breeders ORDER BY breeder_name, id", BREEDER_COLUMNS),
            select_by_id: format!("SELECT {} FROM breeders WHERE id = $1", BREEDER_COLUMNS),
        }
    }
}

#[async_trait]
impl BreederRepository for PgBreederRepository {
    async fn all_breeders(&self) -> Result<Vec<Breeder>, StorageError> {
        self.store
            .bounded(
                "all_breeders",
                sqlx::query_as::<_, Breeder>(&self.select_all).fetch_all(self.store.pool()),
            )
            .await
    }

    async fn breeder_by_id(&self, id: i32) -> Result<Option<Breeder>, StorageError> {
        self.store
            .bounded(
                "breeder_by_id",
                sqlx::query_as::<_, Breeder>(&self.select_by_id)
                    .bind(id)
                    .fetch_optional(self.store.pool()),
            )
            .await
    }

    async fn insert_breeder(&self, breeder: &Breeder) -> Result<i32, StorageError> {
        let q = sqlx::query_scalar::<_, i32>(INSERT_BREEDER)
            .bind(&breeder.breeder_name)
            .bind(&breeder.address)
            .bind(&breeder.city)
            .bind(&breeder.prov_state)
            .bind(&breeder.country)
            .bind(&breeder.zip)
            .bind(&breeder.phone)
            .bind(&breeder.email)
            .bind(breeder.active);
        self.store.bounded("insert_breeder", q.fetch_one(self.store.pool())).await
    }

    async fn update_breeder(&self, breeder: &Breeder) -> Result<(), StorageError> {
        let q = sqlx::query(UPDATE_BREEDER)
            .bind(&breeder.breeder_name)
            .bind(&breeder.address)
            .bind(&breeder.city)
            .bind(&breeder.prov_state)
            .bind(&breeder.country)
            .bind(&breeder.zip)
            .bind(&breeder.phone)
            .bind(&breeder.email)
            .bind(breeder.active)
            .bind(breeder.id);
        let res = self.store.bounded("update_breeder", q.execute(self.store.pool())).await?;
        tracing::debug!("update_breeder {}: {} row(s)", breeder.id, res.rows_affected());
        Ok(())
    }

    async fn delete_breeder(&self, id: i32) -> Result<(), StorageError> {
        let q = sqlx::query(DELETE_BREEDER).bind(id);
        self.store.bounded("delete_breeder", q.execute(self.store.pool())).await?;
        Ok(())
    }
}
