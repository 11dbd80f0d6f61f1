use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use tracing::{debug, info};

use crate::{
    config::Config,
    error::{CatalogError, CatalogResult},
};

const PRAGMAS: [&str; 3] =
    ["PRAGMA foreign_keys = ON", "PRAGMA journal_mode = WAL", "PRAGMA synchronous = NORMAL"];

pub async fn connect(config: &Config) -> CatalogResult<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    // A single connection keeps statements strictly sequential and keeps an
    // in-memory database alive for the lifetime of the pool.
    options.max_connections(1).min_connections(1).sqlx_logging(config.sql_log);

    let db = Database::connect(options).await.map_err(CatalogError::Connect)?;

    for pragma in PRAGMAS {
        db.execute(Statement::from_string(db.get_database_backend(), pragma.to_string()))
            .await
            .map_err(CatalogError::Connect)?;
    }

    debug!("database connection ready");
    Ok(db)
}

/// Brings the schema up to date. Safe to call on an already migrated database;
/// applied migrations are recorded and skipped.
pub async fn migrate(db: &DatabaseConnection) -> CatalogResult<()> {
    info!("applying schema migrations");
    Migrator::up(db, None).await.map_err(CatalogError::Schema)?;
    debug!("schema up to date");
    Ok(())
}
