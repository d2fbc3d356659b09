//! MySQL access layer for the catalog.
//!
//! Owns pool construction and the repositories that issue the parameterized
//! queries. Rows come back as loosely-typed [`models`] structs; shaping them
//! into view models is `catalog-core`'s job.

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::MySqlPool;

/// Build a bounded connection pool without touching the network.
///
/// The pool connects on first checkout, so a database that is down at
/// startup does not stop the process from serving (every route answers 500
/// until the database comes back).
pub fn connect_lazy(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<DbPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect_lazy(database_url)
}

/// Ping the database with `SELECT 1`.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
