use chrono::{DateTime, Duration, DurationRound, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Drops sub-microsecond precision, which `TIMESTAMPTZ` cannot store.
pub fn truncate_to_micros(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.duration_trunc(Duration::microseconds(1)).unwrap_or(ts)
}

fn micros<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
    DateTime::<Utc>::deserialize(d).map(truncate_to_micros)
}

/// An individual dog. `breed_id` and `breeder_id` are foreign keys checked by storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Dog {
    #[serde(default)]
    pub id: i32,
    pub dog_name: String,
    pub breed_id: i32,
    pub breeder_id: i32,
    pub color: String,
    #[serde(deserialize_with = "micros")]
    pub date_of_birth: DateTime<Utc>,
    /// 0 or 1.
    pub spayed_neutered: i32,
    pub description: String,
    pub weight: i32,
}

/// An individual cat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Cat {
    #[serde(default)]
    pub id: i32,
    pub cat_name: String,
    pub breed_id: i32,
    pub breeder_id: i32,
    pub color: String,
    #[serde(deserialize_with = "micros")]
    pub date_of_birth: DateTime<Utc>,
    pub spayed_neutered: i32,
    pub description: String,
    pub weight: i32,
}
