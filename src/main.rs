//! Server binary: reads config from the environment, builds the chosen backend, serves the API.

use pet_breeders::{app, connect_pool, ensure_database_exists, ensure_tables, AppConfig, AppState, Backend, PgStore};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pet_breeders=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let state = match config.backend {
        Backend::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = connect_pool(&config.database_url, &config.pool).await?;
            ensure_tables(&pool).await?;
            AppState::postgres(PgStore::with_timeout(pool, config.query_timeout))
        }
        Backend::Fixture => {
            tracing::info!("using in-memory fixture data; writes are discarded");
            AppState::fixture()
        }
    };

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutting down");
    }
}
