//! Deterministic in-memory backend. Reads mirror the PostgreSQL backend (name order,
//! derived `average_weight`, `None` for unknown ids); writes are accepted and discarded.

use super::{BreederRepository, CatRepository, DogRepository};
use crate::error::StorageError;
use crate::model::{Breed, Breeder, Cat, Dog};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

/// Id returned by every fixture insert. Nothing is persisted.
pub const FIXTURE_INSERT_ID: i32 = 999;

fn midnight_utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Name order with id as the tiebreaker, the same as the SQL `ORDER BY <name>, id`.
fn by_name<T: Clone>(rows: &[T], name: impl Fn(&T) -> &str, id: impl Fn(&T) -> i32) -> Vec<T> {
    let mut out = rows.to_vec();
    out.sort_by(|a, b| name(a).cmp(name(b)).then_with(|| id(a).cmp(&id(b))));
    out
}

fn find<T: Clone>(rows: &[T], pred: impl Fn(&T) -> bool) -> Option<T> {
    rows.iter().find(|r| pred(r)).cloned()
}

pub struct FixtureDogRepository {
    breeds: Vec<Breed>,
    dogs: Vec<Dog>,
}

impl FixtureDogRepository {
    pub fn new() -> Self {
        let breeds = vec![
            Breed {
                id: 1,
                name: "Chihuahua".into(),
                weight_low_lbs: 2,
                weight_high_lbs: 6,
                average_weight: 0,
                lifespan: 15,
                details: "Small, alert dog with sassy personality".into(),
                alternate_names: String::new(),
                geographic_origin: "Mexico".into(),
            },
            Breed {
                id: 2,
                name: "German Shepherd".into(),
                weight_low_lbs: 50,
                weight_high_lbs: 90,
                average_weight: 0,
                lifespan: 12,
                details: "Intelligent, loyal working dog".into(),
                alternate_names: "Alsatian".into(),
                geographic_origin: "Germany".into(),
            },
            Breed {
                id: 3,
                name: "Labrador Retriever".into(),
                weight_low_lbs: 55,
                weight_high_lbs: 80,
                average_weight: 0,
                lifespan: 12,
                details: "Friendly, outgoing, and active".into(),
                alternate_names: "Lab".into(),
                geographic_origin: "Canada".into(),
            },
        ];
        let dogs = vec![
            Dog {
                id: 1,
                dog_name: "Max".into(),
                breed_id: 2,
                breeder_id: 1,
                color: "Black and Tan".into(),
                date_of_birth: midnight_utc(2020, 1, 15),
                spayed_neutered: 0,
                description: "Friendly German Shepherd".into(),
                weight: 75,
            },
            Dog {
                id: 2,
                dog_name: "Bella".into(),
                breed_id: 1,
                breeder_id: 1,
                color: "Tan".into(),
                date_of_birth: midnight_utc(2021, 3, 20),
                spayed_neutered: 1,
                description: "Small but mighty Chihuahua".into(),
                weight: 5,
            },
        ];
        FixtureDogRepository {
            breeds: breeds.into_iter().map(Breed::with_average_weight).collect(),
            dogs,
        }
    }
}

impl Default for FixtureDogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DogRepository for FixtureDogRepository {
    async fn all_breeds(&self) -> Result<Vec<Breed>, StorageError> {
        Ok(by_name(&self.breeds, |b| b.name.as_str(), |b| b.id))
    }

    async fn breed_by_id(&self, id: i32) -> Result<Option<Breed>, StorageError> {
        Ok(find(&self.breeds, |b| b.id == id))
    }

    async fn all_dogs(&self) -> Result<Vec<Dog>, StorageError> {
        Ok(by_name(&self.dogs, |d| d.dog_name.as_str(), |d| d.id))
    }

    async fn dog_by_id(&self, id: i32) -> Result<Option<Dog>, StorageError> {
        Ok(find(&self.dogs, |d| d.id == id))
    }

    async fn insert_dog(&self, _dog: &Dog) -> Result<i32, StorageError> {
        Ok(FIXTURE_INSERT_ID)
    }

    async fn update_dog(&self, _dog: &Dog) -> Result<(), StorageError> {
        Ok(())
    }

    async fn delete_dog(&self, _id: i32) -> Result<(), StorageError> {
        Ok(())
    }
}

pub struct FixtureCatRepository {
    breeds: Vec<Breed>,
    cats: Vec<Cat>,
}

impl FixtureCatRepository {
    pub fn new() -> Self {
        let breeds = vec![
            Breed {
                id: 1,
                name: "Persian".into(),
                weight_low_lbs: 7,
                weight_high_lbs: 12,
                average_weight: 0,
                lifespan: 15,
                details: "Long-haired, gentle cat".into(),
                alternate_names: String::new(),
                geographic_origin: "Iran".into(),
            },
            Breed {
                id: 2,
                name: "Siamese".into(),
                weight_low_lbs: 8,
                weight_high_lbs: 12,
                average_weight: 0,
                lifespan: 15,
                details: "Vocal, social cat".into(),
                alternate_names: String::new(),
                geographic_origin: "Thailand".into(),
            },
        ];
        let cats = vec![
            Cat {
                id: 1,
                cat_name: "Whiskers".into(),
                breed_id: 1,
                breeder_id: 1,
                color: "Orange Tabby".into(),
                date_of_birth: midnight_utc(2021, 5, 10),
                spayed_neutered: 1,
                description: "Playful tabby cat".into(),
                weight: 12,
            },
            Cat {
                id: 2,
                cat_name: "Luna".into(),
                breed_id: 2,
                breeder_id: 1,
                color: "Seal Point".into(),
                date_of_birth: midnight_utc(2020, 8, 15),
                spayed_neutered: 1,
                description: "Talkative Siamese".into(),
                weight: 10,
            },
        ];
        FixtureCatRepository {
            breeds: breeds.into_iter().map(Breed::with_average_weight).collect(),
            cats,
        }
    }
}

impl Default for FixtureCatRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatRepository for FixtureCatRepository {
    async fn all_breeds(&self) -> Result<Vec<Breed>, StorageError> {
        Ok(by_name(&self.breeds, |b| b.name.as_str(), |b| b.id))
    }

    async fn breed_by_id(&self, id: i32) -> Result<Option<Breed>, StorageError> {
        Ok(find(&self.breeds, |b| b.id == id))
    }

    async fn all_cats(&self) -> Result<Vec<Cat>, StorageError> {
        Ok(by_name(&self.cats, |c| c.cat_name.as_str(), |c| c.id))
    }

    async fn cat_by_id(&self, id: i32) -> Result<Option<Cat>, StorageError> {
        Ok(find(&self.cats, |c| c.id == id))
    }

    async fn insert_cat(&self, _cat: &Cat) -> Result<i32, StorageError> {
        Ok(FIXTURE_INSERT_ID)
    }

    async fn update_cat(&self, _cat: &Cat) -> Result<(), StorageError> {
        Ok(())
    }

    async fn delete_cat(&self, _id: i32) -> Result<(), StorageError> {
        Ok(())
    }
}

pub struct FixtureBreederRepository {
    breeders: Vec<Breeder>,
}

impl FixtureBreederRepository {
    pub fn new() -> Self {
        FixtureBreederRepository {
            breeders: vec![
                Breeder {
                    id: 1,
                    breeder_name: "Happy Paws Breeders".into(),
                    address: "123 Main Street".into(),
                    city: "Portland".into(),
                    prov_state: "OR".into(),
                    country: "USA".into(),
                    zip: "97201".into(),
                    phone: "555-1234".into(),
                    email: "info@happypaws.com".into(),
                    active: 1,
                },
                Breeder {
                    id: 2,
                    breeder_name: "Furry Friends Inc".into(),
                    address: "456 Oak Avenue".into(),
                    city: "Seattle".into(),
                    prov_state: "WA".into(),
                    country: "USA".into(),
                    zip: "98101".into(),
                    phone: "555-5678".into(),
                    email: "contact@furryfriends.com".into(),
                    active: 1,
                },
            ],
        }
    }
}

impl Default for FixtureBreederRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BreederRepository for FixtureBreederRepository {
    async fn all_breeders(&self) -> Result<Vec<Breeder>, StorageError> {
        Ok(by_name(&self.breeders, |b| b.breeder_name.as_str(), |b| b.id))
    }

    async fn breeder_by_id(&self, id: i32) -> Result<Option<Breeder>, StorageError> {
        Ok(find(&self.breeders, |b| b.id == id))
    }

    async fn insert_breeder(&self, _breeder: &Breeder) -> Result<i32, StorageError> {
        Ok(FIXTURE_INSERT_ID)
    }

    async fn update_breeder(&self, _breeder: &Breeder) -> Result<(), StorageError> {
        Ok(())
    }

    async fn delete_breeder(&self, _id: i32) -> Result<(), StorageError> {
        Ok(())
    }
}
