//! PostgreSQL backend tests. Each test runs in its own schema of the database named by
//! `TEST_DATABASE_URL` and is skipped when that variable is unset.

use chrono::{TimeZone, Timelike, Utc};
use pet_breeders::model::{average_weight, truncate_to_micros, Breed, Breeder, Cat, Dog};
use pet_breeders::repository::{
    FixtureBreederRepository, FixtureCatRepository, FixtureDogRepository, PgBreederRepository,
    PgCatRepository, PgDogRepository,
};
use pet_breeders::store::{connect_pool_with, ensure_tables};
use pet_breeders::{AppState, BreederRepository, CatRepository, DogRepository, PgStore, PoolConfig, StorageError};
use sqlx::postgres::PgConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

struct TestDb {
    admin: PgPool,
    schema: String,
    store: PgStore,
}

impl TestDb {
    async fn open() -> Option<TestDb> {
        let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
            eprintln!("TEST_DATABASE_URL not set; skipping");
            return None;
        };
        let schema = format!("breeders_test_{}", uuid::Uuid::new_v4().simple());
        let admin = PgPool::connect(&url).await.unwrap();
        sqlx::query(&format!("CREATE SCHEMA {}", schema)).execute(&admin).await.unwrap();

        let opts = PgConnectOptions::from_str(&url)
            .unwrap()
            .options([("search_path", schema.as_str())]);
        let cfg = PoolConfig {
            max_connections: 5,
            ..PoolConfig::default()
        };
        let pool = connect_pool_with(opts, &cfg).await.unwrap();
        ensure_tables(&pool).await.unwrap();
        Some(TestDb {
            admin,
            schema,
            store: PgStore::new(pool),
        })
    }

    async fn close(self) {
        self.store.pool().close().await;
        sqlx::query(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .execute(&self.admin)
            .await
            .unwrap();
    }

    async fn seed_breeds(&self, table: &str, breeds: &[Breed]) {
        let mut breeds = breeds.to_vec();
        breeds.sort_by_key(|b| b.id);
        for b in breeds {
            sqlx::query(&format!(
                "INSERT INTO {} (breed, weight_low_lbs, weight_high_lbs, lifespan, details, alternate_names, geographic_origin) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7)",
                table
            ))
            .bind(&b.name)
            .bind(b.weight_low_lbs)
            .bind(b.weight_high_lbs)
            .bind(b.lifespan)
            .bind(&b.details)
            .bind(&b.alternate_names)
            .bind(&b.geographic_origin)
            .execute(self.store.pool())
            .await
            .unwrap();
        }
    }

    /// Loads the fixture data set so ids line up with the fixture backend.
    async fn seed_fixture_data(&self) {
        let fixture_dogs = FixtureDogRepository::new();
        let fixture_cats = FixtureCatRepository::new();
        let fixture_breeders = FixtureBreederRepository::new();

        let mut breeders = fixture_breeders.all_breeders().await.unwrap();
        breeders.sort_by_key(|b| b.id);
        let pg_breeders = PgBreederRepository::new(self.store.clone());
        for b in &breeders {
            assert_eq!(pg_breeders.insert_breeder(b).await.unwrap(), b.id);
        }

        self.seed_breeds("dog_breeds", &fixture_dogs.all_breeds().await.unwrap()).await;
        self.seed_breeds("cat_breeds", &fixture_cats.all_breeds().await.unwrap()).await;

        let mut dogs = fixture_dogs.all_dogs().await.unwrap();
        dogs.sort_by_key(|d| d.id);
        let pg_dogs = PgDogRepository::new(self.store.clone());
        for d in &dogs {
            assert_eq!(pg_dogs.insert_dog(d).await.unwrap(), d.id);
        }

        let mut cats = fixture_cats.all_cats().await.unwrap();
        cats.sort_by_key(|c| c.id);
        let pg_cats = PgCatRepository::new(self.store.clone());
        for c in &cats {
            assert_eq!(pg_cats.insert_cat(c).await.unwrap(), c.id);
        }
    }
}

fn json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap()
}

fn sample_breeder() -> Breeder {
    Breeder {
        id: 0,
        breeder_name: "Northern Kennels".into(),
        address: "9 Birch Road".into(),
        city: "Winnipeg".into(),
        prov_state: "MB".into(),
        country: "Canada".into(),
        zip: "R3C 0A1".into(),
        phone: "555-0000".into(),
        email: "hello@northern.example".into(),
        active: 1,
    }
}

fn sample_dog(breed_id: i32, breeder_id: i32) -> Dog {
    Dog {
        id: 0,
        dog_name: "Scout".into(),
        breed_id,
        breeder_id,
        color: "Yellow".into(),
        date_of_birth: Utc.with_ymd_and_hms(2023, 2, 14, 0, 0, 0).unwrap(),
        spayed_neutered: 1,
        description: "Loves water".into(),
        weight: 62,
    }
}

#[tokio::test]
async fn insert_then_get_round_trips_every_field() {
    let Some(db) = TestDb::open().await else { return };
    db.seed_fixture_data().await;
    let breeders = PgBreederRepository::new(db.store.clone());
    let dogs = PgDogRepository::new(db.store.clone());
    let cats = PgCatRepository::new(db.store.clone());

    let mut breeder = sample_breeder();
    breeder.id = 12345;
    let breeder_id = breeders.insert_breeder(&breeder).await.unwrap();
    assert!(breeder_id > 0);
    assert_ne!(breeder_id, 12345);
    breeder.id = breeder_id;
    assert_eq!(breeders.breeder_by_id(breeder_id).await.unwrap(), Some(breeder));

    let mut dog = sample_dog(3, breeder_id);
    dog.id = dogs.insert_dog(&dog).await.unwrap();
    assert_eq!(dogs.dog_by_id(dog.id).await.unwrap(), Some(dog));

    let mut cat = Cat {
        id: 0,
        cat_name: "Mochi".into(),
        breed_id: 2,
        breeder_id,
        color: "Cream".into(),
        date_of_birth: Utc.with_ymd_and_hms(2022, 11, 3, 0, 0, 0).unwrap(),
        spayed_neutered: 0,
        description: "Shy".into(),
        weight: 9,
    };
    cat.id = cats.insert_cat(&cat).await.unwrap();
    assert_eq!(cats.cat_by_id(cat.id).await.unwrap(), Some(cat));

    // Sub-second birth times: JSON input is cut to microseconds on decode.
    let mut pup: Dog = serde_json::from_value(serde_json::json!({
        "id": 0,
        "dog_name": "Pip",
        "breed_id": 1,
        "breeder_id": breeder_id,
        "color": "Tan",
        "date_of_birth": "2023-02-14T05:20:00.123456789Z",
        "spayed_neutered": 0,
        "description": "",
        "weight": 3
    }))
    .unwrap();
    assert_eq!(pup.date_of_birth.nanosecond(), 123_456_000);
    pup.id = dogs.insert_dog(&pup).await.unwrap();
    assert_eq!(dogs.dog_by_id(pup.id).await.unwrap(), Some(pup));

    // Values built in code are truncated on write.
    let mut kit = sample_dog(2, breeder_id);
    kit.date_of_birth = Utc.with_ymd_and_hms(2023, 2, 14, 5, 20, 0).unwrap() + chrono::Duration::nanoseconds(987_654_321);
    kit.id = dogs.insert_dog(&kit).await.unwrap();
    let stored = dogs.dog_by_id(kit.id).await.unwrap().unwrap();
    assert_eq!(stored.date_of_birth, truncate_to_micros(kit.date_of_birth));
    assert_eq!(stored.date_of_birth.nanosecond(), 987_654_000);

    db.close().await;
}

#[tokio::test]
async fn reads_match_the_fixture_backend_byte_for_byte() {
    let Some(db) = TestDb::open().await else { return };
    db.seed_fixture_data().await;
    let pg = AppState::postgres(db.store.clone());
    let fixture = AppState::fixture();

    assert_eq!(
        json(&pg.dogs.all_breeds().await.unwrap()),
        json(&fixture.dogs.all_breeds().await.unwrap())
    );
    assert_eq!(json(&pg.dogs.all_dogs().await.unwrap()), json(&fixture.dogs.all_dogs().await.unwrap()));
    assert_eq!(
        json(&pg.cats.all_breeds().await.unwrap()),
        json(&fixture.cats.all_breeds().await.unwrap())
    );
    assert_eq!(json(&pg.cats.all_cats().await.unwrap()), json(&fixture.cats.all_cats().await.unwrap()));
    assert_eq!(
        json(&pg.breeders.all_breeders().await.unwrap()),
        json(&fixture.breeders.all_breeders().await.unwrap())
    );
    for id in [1, 2, 999] {
        assert_eq!(
            json(&pg.breeders.breeder_by_id(id).await.unwrap()),
            json(&fixture.breeders.breeder_by_id(id).await.unwrap())
        );
        assert_eq!(
            json(&pg.dogs.breed_by_id(id).await.unwrap()),
            json(&fixture.dogs.breed_by_id(id).await.unwrap())
        );
    }

    db.close().await;
}

#[tokio::test]
async fn average_weight_is_derived_on_every_read() {
    let Some(db) = TestDb::open().await else { return };
    db.seed_fixture_data().await;
    let dogs = PgDogRepository::new(db.store.clone());

    let breeds = dogs.all_breeds().await.unwrap();
    let averages: Vec<_> = breeds.iter().map(|b| b.average_weight).collect();
    assert_eq!(averages, [4, 70, 68]);

    sqlx::query("UPDATE dog_breeds SET weight_high_lbs = 81 WHERE id = 3")
        .execute(db.store.pool())
        .await
        .unwrap();
    let lab = dogs.breed_by_id(3).await.unwrap().unwrap();
    assert_eq!(lab.average_weight, 68);
    assert_eq!(lab.average_weight, average_weight(lab.weight_low_lbs, lab.weight_high_lbs));

    for b in PgCatRepository::new(db.store.clone()).all_breeds().await.unwrap() {
        assert_eq!(b.average_weight, average_weight(b.weight_low_lbs, b.weight_high_lbs));
    }

    db.close().await;
}

#[tokio::test]
async fn average_weight_handles_extreme_bounds() {
    let Some(db) = TestDb::open().await else { return };
    let giant = Breed {
        id: 1,
        name: "Giant".into(),
        weight_low_lbs: i32::MAX,
        weight_high_lbs: i32::MAX,
        average_weight: 0,
        lifespan: 1,
        details: String::new(),
        alternate_names: String::new(),
        geographic_origin: String::new(),
    };
    let lopsided = Breed {
        id: 2,
        name: "Lopsided".into(),
        weight_low_lbs: i32::MAX - 1,
        ..giant.clone()
    };
    db.seed_breeds("dog_breeds", &[giant, lopsided]).await;
    let dogs = PgDogRepository::new(db.store.clone());

    let breeds = dogs.all_breeds().await.unwrap();
    assert_eq!(breeds.len(), 2);
    for b in &breeds {
        assert_eq!(b.average_weight, i32::MAX, "{}", b.name);
        assert_eq!(b.average_weight, average_weight(b.weight_low_lbs, b.weight_high_lbs));
    }
    assert_eq!(dogs.breed_by_id(1).await.unwrap().unwrap().average_weight, i32::MAX);

    db.close().await;
}

#[tokio::test]
async fn equal_names_list_in_id_order() {
    let Some(db) = TestDb::open().await else { return };
    let breeders = PgBreederRepository::new(db.store.clone());

    let mut ids = Vec::new();
    for city in ["Austin", "Boise", "Akron"] {
        let mut b = sample_breeder();
        b.city = city.into();
        ids.push(breeders.insert_breeder(&b).await.unwrap());
    }
    // Rewrite the first row so physical order no longer follows id.
    let mut first = breeders.breeder_by_id(ids[0]).await.unwrap().unwrap();
    first.phone = "555-1111".into();
    breeders.update_breeder(&first).await.unwrap();

    let listed: Vec<_> = breeders.all_breeders().await.unwrap().into_iter().map(|b| b.id).collect();
    let mut expected = ids.clone();
    expected.sort();
    assert_eq!(listed, expected);

    db.close().await;
}

#[tokio::test]
async fn missing_ids_read_as_none() {
    let Some(db) = TestDb::open().await else { return };
    assert_eq!(PgBreederRepository::new(db.store.clone()).breeder_by_id(999).await.unwrap(), None);
    assert_eq!(PgDogRepository::new(db.store.clone()).dog_by_id(999).await.unwrap(), None);
    assert_eq!(PgCatRepository::new(db.store.clone()).breed_by_id(999).await.unwrap(), None);
    db.close().await;
}

#[tokio::test]
async fn delete_is_idempotent() {
    let Some(db) = TestDb::open().await else { return };
    db.seed_fixture_data().await;
    let dogs = PgDogRepository::new(db.store.clone());

    dogs.delete_dog(2).await.unwrap();
    dogs.delete_dog(2).await.unwrap();
    dogs.delete_dog(424242).await.unwrap();
    assert_eq!(dogs.dog_by_id(2).await.unwrap(), None);
    let names: Vec<_> = dogs.all_dogs().await.unwrap().into_iter().map(|d| d.dog_name).collect();
    assert_eq!(names, ["Max"]);

    db.close().await;
}

#[tokio::test]
async fn update_replaces_the_full_record() {
    let Some(db) = TestDb::open().await else { return };
    db.seed_fixture_data().await;
    let breeders = PgBreederRepository::new(db.store.clone());

    let before = breeders.breeder_by_id(1).await.unwrap().unwrap();
    breeders.update_breeder(&before).await.unwrap();
    assert_eq!(breeders.breeder_by_id(1).await.unwrap(), Some(before.clone()));

    let mut moved = before.clone();
    moved.city = "Eugene".into();
    moved.active = 0;
    breeders.update_breeder(&moved).await.unwrap();
    assert_eq!(breeders.breeder_by_id(1).await.unwrap(), Some(moved));

    let mut ghost = sample_breeder();
    ghost.id = 777;
    breeders.update_breeder(&ghost).await.unwrap();
    assert_eq!(breeders.breeder_by_id(777).await.unwrap(), None);

    db.close().await;
}

#[tokio::test]
async fn foreign_key_violations_are_storage_errors() {
    let Some(db) = TestDb::open().await else { return };
    let dogs = PgDogRepository::new(db.store.clone());
    let err = dogs.insert_dog(&sample_dog(41, 42)).await.unwrap_err();
    assert!(matches!(err, StorageError::Database(_)), "{:?}", err);
    db.close().await;
}
