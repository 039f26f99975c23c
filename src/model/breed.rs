use serde::{Deserialize, Serialize};

/// Mean of the weight bounds, halves rounded up. Matches the SQL in `repository::postgres::breed`.
/// Summed in i64; the mean of two i32 values always fits back into i32.
pub fn average_weight(low: i32, high: i32) -> i32 {
    (i64::from(low) + i64::from(high) + 1).div_euclid(2) as i32
}

/// A dog or cat breed. `average_weight` is derived from the bounds by the backend on every read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Breed {
    pub id: i32,
    #[serde(rename = "breed")]
    #[sqlx(rename = "breed")]
    pub name: String,
    pub weight_low_lbs: i32,
    pub weight_high_lbs: i32,
    pub average_weight: i32,
    #[serde(rename = "average_lifespan")]
    pub lifespan: i32,
    pub details: String,
    pub alternate_names: String,
    pub geographic_origin: String,
}

impl Breed {
    pub fn with_average_weight(mut self) -> Self {
        self.average_weight = average_weight(self.weight_low_lbs, self.weight_high_lbs);
        self
    }
}
