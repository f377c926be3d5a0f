// API layer - HTTP endpoints
pub mod health;
pub mod items;

use std::sync::Arc;

pub use health::HealthApi;
pub use items::ItemsApi;

use poem::middleware::{NormalizePath, TrailingSlash};
use poem::{Endpoint, EndpointExt, Route};
use poem_openapi::OpenApiService;

use crate::AppData;

/// Compose the HTTP surface
///
/// API endpoints are served from the root and Swagger UI under `/swagger`.
/// Trailing slashes are trimmed before routing, so `/items/` and `/items`
/// reach the same operation.
pub fn build_routes(app_data: Arc<AppData>, server_url: &str) -> impl Endpoint {
    let items_api = ItemsApi::new(app_data);

    let api_service = OpenApiService::new((HealthApi, items_api), "Shopping List API", "1.0.0")
        .server(server_url);

    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/swagger", ui)
        .nest("/", api_service)
        .with(NormalizePath::new(TrailingSlash::Trim))
}
