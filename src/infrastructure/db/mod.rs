use std::time::Duration;

use sqlx::{Pool, Postgres};

pub type PgPool = Pool<Postgres>;

const MAX_CONNECTIONS: u32 = 10;

pub async fn connect_pool(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await?;
    Ok(pool)
}

pub async fn migrate(pool: &PgPool) -> anyhow::Result<()> {
    // Embedded at compile time from ./migrations
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Liveness check used by the health endpoint.
pub async fn ping(pool: &PgPool) -> bool {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .is_ok()
}

pub mod repositories;
