use crate::config::{init_database, migrate_database, BootstrapSettings};

/// Run database migrations for the item database
///
/// Connects using the bootstrap settings and applies all pending migrations.
/// Does not build AppData.
pub async fn run_migrations(bootstrap_settings: &BootstrapSettings) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Connecting to item database...");
    let db = init_database(bootstrap_settings).await?;

    tracing::info!("Migrating item database...");
    migrate_database(&db).await?;

    tracing::info!("All migrations completed successfully");

    Ok(())
}
