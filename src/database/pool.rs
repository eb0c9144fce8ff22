use crate::config::get_config;
use crate::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

pub async fn create_pool() -> Result<SqlitePool> {
    let config = get_config();
    connect(&config.database_url, config.database_max_connections).await
}

/// Opens a pool against `database_url`, creating the database file if needed.
///
/// Foreign keys are declared in the schema but not enforced: orders and offers hold weak
/// references, so neither inserts with dangling ids nor deletes of referenced rows fail.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(false);

    // An in-memory database lives and dies with its connection, so the pool must keep it.
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .acquire_timeout(std::time::Duration::from_secs(30))
        .idle_timeout(None::<std::time::Duration>)
        .max_lifetime(None::<std::time::Duration>)
        .connect_with(options)
        .await?;
    Ok(pool)
}
