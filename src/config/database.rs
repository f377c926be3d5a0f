use sea_orm::{Database, DatabaseConnection};
use migration::{ItemMigrator, MigratorTrait};
use crate::config::BootstrapSettings;
use crate::errors::InternalError;
use crate::errors::internal::DatabaseError;

/// Open the item database connection
///
/// Connects only. Does NOT run migrations - call migrate_database() separately.
///
/// # Returns
/// * `Ok(DatabaseConnection)` - Connection established successfully
/// * `Err(InternalError)` - Connection failed
pub async fn init_database(bootstrap_settings: &BootstrapSettings) -> Result<DatabaseConnection, InternalError> {
    let database_url = bootstrap_settings.database_url();

    let db = Database::connect(database_url)
        .await
        .map_err(|source| DatabaseError::Connect { url: database_url.to_string(), source })?;

    tracing::debug!("Connected to item database: {}", database_url);

    Ok(db)
}

/// Run all pending migrations on the item database
///
/// Safe to call on every start; the items table is created only if missing.
pub async fn migrate_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    ItemMigrator::up(db, None)
        .await
        .map_err(|source| DatabaseError::Migration { source })?;

    tracing::debug!("Item database migrations completed");

    Ok(())
}
