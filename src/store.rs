//! Database bootstrap: create the database if missing, build the bounded pool, create tables.

use crate::config::PoolConfig;
use crate::error::StorageError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Table DDL in foreign-key order. Idempotent; there is no versioning.
const TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS breeders (
        id SERIAL PRIMARY KEY,
        breeder_name TEXT NOT NULL,
        address TEXT NOT NULL DEFAULT '',
        city TEXT NOT NULL DEFAULT '',
        prov_state TEXT NOT NULL DEFAULT '',
        country TEXT NOT NULL DEFAULT '',
        zip TEXT NOT NULL DEFAULT '',
        phone TEXT NOT NULL DEFAULT '',
        email TEXT NOT NULL DEFAULT '',
        active INTEGER NOT NULL DEFAULT 1
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS dog_breeds (
        id SERIAL PRIMARY KEY,
        breed TEXT NOT NULL,
        weight_low_lbs INTEGER NOT NULL,
        weight_high_lbs INTEGER NOT NULL,
        lifespan INTEGER NOT NULL,
        details TEXT,
        alternate_names TEXT,
        geographic_origin TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS cat_breeds (
        id SERIAL PRIMARY KEY,
        breed TEXT NOT NULL,
        weight_low_lbs INTEGER NOT NULL,
        weight_high_lbs INTEGER NOT NULL,
        lifespan INTEGER NOT NULL,
        details TEXT,
        alternate_names TEXT,
        geographic_origin TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS dogs (
        id SERIAL PRIMARY KEY,
        dog_name TEXT NOT NULL,
        breed_id INTEGER NOT NULL REFERENCES dog_breeds (id),
        breeder_id INTEGER NOT NULL REFERENCES breeders (id),
        color TEXT NOT NULL DEFAULT '',
        date_of_birth TIMESTAMPTZ NOT NULL,
        spayed_neutered INTEGER NOT NULL DEFAULT 0,
        description TEXT NOT NULL DEFAULT '',
        weight INTEGER NOT NULL DEFAULT 0
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS cats (
        id SERIAL PRIMARY KEY,
        cat_name TEXT NOT NULL,
        breed_id INTEGER NOT NULL REFERENCES cat_breeds (id),
        breeder_id INTEGER NOT NULL REFERENCES breeders (id),
        color TEXT NOT NULL DEFAULT '',
        date_of_birth TIMESTAMPTZ NOT NULL,
        spayed_neutered INTEGER NOT NULL DEFAULT 0,
        description TEXT NOT NULL DEFAULT '',
        weight INTEGER NOT NULL DEFAULT 0
    )
    "#,
];

/// Create the catalog tables if they do not exist.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), StorageError> {
    for ddl in TABLES {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Open the bounded pool described by `cfg` and check it with a round trip.
pub async fn connect_pool(database_url: &str, cfg: &PoolConfig) -> Result<PgPool, StorageError> {
    let opts = PgConnectOptions::from_str(database_url)?;
    connect_pool_with(opts, cfg).await
}

pub async fn connect_pool_with(opts: PgConnectOptions, cfg: &PoolConfig) -> Result<PgPool, StorageError> {
    let pool = PgPoolOptions::new()
        .max_connections(cfg.max_connections)
        .max_lifetime(cfg.max_lifetime)
        .idle_timeout(cfg.idle_timeout)
        .acquire_timeout(cfg.acquire_timeout)
        .connect_with(opts)
        .await?;
    sqlx::query("SELECT 1").execute(&pool).await?;
    tracing::info!(
        "connected to database (max {} connections, lifetime {:?})",
        cfg.max_connections,
        cfg.max_lifetime
    );
    Ok(pool)
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), StorageError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = PgConnectOptions::from_str(&admin_url)?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!("created database {}", db_name);
    }
    Ok(())
}

/// Returns (admin url, database name). The admin url keeps the original query string (sslmode etc.).
fn parse_db_name_from_url(url: &str) -> Result<(String, String), StorageError> {
    let (location, query) = match url.split_once('?') {
        Some((location, query)) => (location, Some(query)),
        None => (url, None),
    };
    let path_start = location
        .rfind('/')
        .ok_or_else(|| sqlx::Error::Configuration("DATABASE_URL: no path".into()))?
        + 1;
    let db_name = location.get(path_start..).unwrap_or("").trim();
    let base = location.get(..path_start).unwrap_or(location);
    let admin_url = match query {
        Some(q) => format!("{}postgres?{}", base, q),
        None => format!("{}postgres", base),
    };
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
