// Test utilities shared across unit tests
// Only compiled when running tests

use sea_orm::{Database, DatabaseConnection};
use migration::{ItemMigrator, MigratorTrait};
use crate::stores::ItemStore;
use crate::types::internal::ItemFields;
use std::sync::Arc;

/// Creates an in-memory item database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    ItemMigrator::up(&db, None)
        .await
        .expect("Failed to run item migrations");

    db
}

/// Creates a test database and an item store over it
///
/// Callers can discard what they don't need:
/// ```rust
/// let (_db, item_store) = setup_test_item_store().await;
/// ```
pub async fn setup_test_item_store() -> (DatabaseConnection, Arc<ItemStore>) {
    let db = setup_test_db().await;
    let item_store = Arc::new(ItemStore::new(db.clone()));
    (db, item_store)
}

/// Field set for a plain item with no description and no offer
pub fn item_fields(name: &str, price: f64) -> ItemFields {
    ItemFields {
        name: name.to_string(),
        description: None,
        price,
        on_offer: false,
    }
}
