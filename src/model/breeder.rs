use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Breeder {
    #[serde(default)]
    pub id: i32,
    pub breeder_name: String,
    pub address: String,
    pub city: String,
    pub prov_state: String,
    pub country: String,
    pub zip: String,
    pub phone: String,
    pub email: String,
    /// 0 or 1.
    pub active: i32,
}
