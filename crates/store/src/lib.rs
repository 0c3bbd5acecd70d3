//! Persistence layer for the milestone planner.
//!
//! The [`port::MilestoneStore`] trait is the seam between the domain and
//! its storage. [`pg::PgMilestoneStore`] backs production with a Postgres
//! JSONB document table; [`memory::MemoryMilestoneStore`] is the drop-in
//! used by tests.

use sqlx::postgres::PgPoolOptions;

pub mod attachments;
pub mod demo;
pub mod files;
pub mod memory;
pub mod models;
pub mod pg;
pub mod port;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
