//! Read queries shared by `dog_breeds` and `cat_breeds`, which have identical columns.

use super::PgStore;
use crate::error::StorageError;
use crate::model::Breed;

/// `average_weight` is computed here, never stored. Same rounding as `model::average_weight`.
const BREED_COLUMNS: &str = "id, breed, weight_low_lbs, weight_high_lbs, \
     FLOOR((weight_low_lbs::bigint + weight_high_lbs + 1) / 2.0)::int AS average_weight, \
     lifespan, COALESCE(details, '') AS details, \
     COALESCE(alternate_names, '') AS alternate_names, \
     COALESCE(geographic_origin, '') AS geographic_origin";

pub(super) struct BreedQueries {
    all: String,
    by_id: String,
}

impl BreedQueries {
    /// `table` is a fixed identifier from this crate, never caller input.
    pub(super) fn for_table(table: &'static str) -> Self {
        BreedQueries {
            all: format!("SELECT {} FROM {} ORDER BY breed, id", BREED_COLUMNS, table),
            by_id: format!("SELECT {} FROM {} WHERE id = $1", BREED_COLUMNS, table),
        }
    }

    pub(super) async fn all(&self, store: &PgStore) -> Result<Vec<Breed>, StorageError> {
        store
            .bounded("all_breeds", sqlx::query_as::<_, Breed>(&self.all).fetch_all(store.pool()))
            .await
    }

    pub(super) async fn by_id(&self, store: &PgStore, id: i32) -> Result<Option<Breed>, StorageError> {
        store
            .bounded(
                "breed_by_id",
                sqlx::query_as::<_, Breed>(&self.by_id).bind(id).fetch_optional(store.pool()),
            )
            .await
    }
}
