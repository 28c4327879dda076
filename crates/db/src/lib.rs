//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repository abstractions for data access
//! - The table definitions, applied by test fixtures and fresh deployments

pub mod entities;
pub mod repositories;
pub mod schema;

pub use repositories::{ActualRepository, BudgetRepository, ReportRepository};

use budgetplan_shared::DatabaseConfig;
use sea_orm::sqlx::ConnectOptions as _;
use sea_orm::sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sea_orm::{DatabaseConnection, DbErr, RuntimeErr, SqlxPostgresConnector};
use tracing::info;

/// Builds the Postgres connect options from individual settings.
///
/// Credentials are passed as-is, so they may contain characters that are
/// reserved in a connection URL.
#[must_use]
pub fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
        .disable_statement_logging()
}

/// Opens the connection pool and checks that the database answers.
///
/// # Errors
///
/// Returns an error if the pool cannot be created or the ping fails.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_with(connect_options(config))
        .await
        .map_err(|e| DbErr::Conn(RuntimeErr::SqlxError(e)))?;

    let db = SqlxPostgresConnector::from_sqlx_postgres_pool(pool);
    db.ping().await?;

    info!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        "Database connection established"
    );

    Ok(db)
}
