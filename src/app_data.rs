use std::sync::Arc;
use sea_orm::DatabaseConnection;
use crate::stores::ItemStore;

/// Centralized application data following the main-owned stores pattern
///
/// The connection is opened and migrated once in main.rs, then handed here.
/// Everything that talks to the database receives it through this struct.
///
/// # Architecture
///
/// ```text
/// main.rs
///   ↓ init_database() + migrate_database()
/// AppData::init(db)
///   ↓ creates once
///   └─ item_store (Arc<ItemStore>, owns the connection)
///   ↓ wrapped in Arc<AppData>
///   └─ ItemsApi::new(app_data) → extracts item_store
/// ```
pub struct AppData {
    pub item_store: Arc<ItemStore>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The database connection should be migrated before calling this.
    pub fn init(db: DatabaseConnection) -> Self {
        tracing::debug!("Creating stores...");
        let item_store = Arc::new(ItemStore::new(db));
        tracing::info!("AppData initialization complete");

        Self { item_store }
    }
}
