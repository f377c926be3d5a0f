// Common test utilities for integration tests

use migration::{ItemMigrator, MigratorTrait};
use poem::Endpoint;
use poem::test::TestClient;
use sea_orm::{Database, DatabaseConnection};
use shopping_list_backend::api::build_routes;
use shopping_list_backend::AppData;
use std::sync::Arc;

/// Creates a test item database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    ItemMigrator::up(&db, None)
        .await
        .expect("Failed to run item migrations");

    db
}

/// Creates a test client over the full route tree backed by a fresh database
pub async fn setup_test_client() -> TestClient<impl Endpoint> {
    let db = setup_test_db().await;
    let app_data = Arc::new(AppData::init(db));
    TestClient::new(build_routes(app_data, "http://localhost:8000"))
}
