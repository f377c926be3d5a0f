use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use crate::AppData;
use crate::errors::ItemApiError;
use crate::stores::ItemStore;
use crate::types::dto::items::{CreateItemApiResponse, Item, ItemApiResponse, ItemRequest};
use std::sync::Arc;

/// Item CRUD endpoints
pub struct ItemsApi {
    item_store: Arc<ItemStore>,
}

impl ItemsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            item_store: app_data.item_store.clone(),
        }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Item management endpoints
    Items,
}

#[OpenApi]
impl ItemsApi {
    /// Create a new item
    ///
    /// Returns the stored item including its generated ID
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create_item(
        &self,
        body: Json<ItemRequest>,
    ) -> Result<CreateItemApiResponse, ItemApiError> {
        let created = self.item_store.create_item(body.0.into()).await?;

        tracing::info!(item_id = %created.id, "Item created");

        Ok(CreateItemApiResponse::Created(Json(created.into())))
    }

    /// List items
    ///
    /// Returns at most 100 items
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn list_items(&self) -> Result<Json<Vec<Item>>, ItemApiError> {
        let items = self.item_store.list_items().await?;

        Ok(Json(items.into_iter().map(Item::from).collect()))
    }

    /// Get an item by ID
    #[oai(path = "/items/:item_id", method = "get", tag = "ApiTags::Items")]
    async fn get_item(&self, item_id: Path<String>) -> Result<ItemApiResponse, ItemApiError> {
        let item = self.item_store.get_item(&item_id.0).await?;

        Ok(ItemApiResponse::Ok(Json(item.into())))
    }

    /// Replace an item
    ///
    /// All fields are overwritten with the request body; omitted optional fields reset to their defaults
    #[oai(path = "/items/:item_id", method = "put", tag = "ApiTags::Items")]
    async fn update_item(
        &self,
        item_id: Path<String>,
        body: Json<ItemRequest>,
    ) -> Result<ItemApiResponse, ItemApiError> {
        let updated = self.item_store.update_item(&item_id.0, body.0.into()).await?;

        tracing::info!(item_id = %updated.id, "Item updated");

        Ok(ItemApiResponse::Ok(Json(updated.into())))
    }

    /// Delete an item
    ///
    /// Returns the item as it was before deletion
    #[oai(path = "/items/:item_id", method = "delete", tag = "ApiTags::Items")]
    async fn delete_item(&self, item_id: Path<String>) -> Result<ItemApiResponse, ItemApiError> {
        let deleted = self.item_store.delete_item(&item_id.0).await?;

        tracing::info!(item_id = %deleted.id, "Item deleted");

        Ok(ItemApiResponse::Ok(Json(deleted.into())))
    }
}
