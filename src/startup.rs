use std::sync::Arc;

use crate::config::{Config, StoreConfig};
use crate::error::AppError;
use crate::store::{database::DatabaseStore, file::FileStore, GiveawayStore};

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool using the configured connection string, then
/// runs all pending SeaORM migrations so the schema is up to date before the
/// store touches it.
///
/// # Arguments
/// - `url` - Database connection string
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(url: &str) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the giveaway store backend named by the configuration.
pub async fn init_store(config: &Config) -> Result<Arc<dyn GiveawayStore>, AppError> {
    match &config.store {
        StoreConfig::Database { url } => {
            let db = connect_to_database(url).await?;

            tracing::info!("Using database giveaway store");

            Ok(Arc::new(DatabaseStore::new(db)))
        }
        StoreConfig::File { path } => {
            tracing::info!("Using flat-file giveaway store at {}", path.display());

            Ok(Arc::new(FileStore::new(path.clone())))
        }
    }
}
