use poem_openapi::{ApiResponse, Object};
use poem_openapi::payload::Json;
use serde::{Deserialize, Serialize};

use crate::errors::api::items::validation_error_body;
use crate::types::db::item;
use crate::types::dto::common::ErrorResponse;
use crate::types::internal::ItemFields;

/// Request model for creating or replacing an item
#[derive(Object, Debug, Clone)]
pub struct ItemRequest {
    /// Name of the item
    pub name: String,

    /// Optional description of the item
    pub description: Option<String>,

    /// Price of the item
    pub price: f64,

    /// Whether the item is currently on offer (defaults to false)
    #[oai(default)]
    pub on_offer: bool,
}

impl From<ItemRequest> for ItemFields {
    fn from(request: ItemRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            price: request.price,
            on_offer: request.on_offer,
        }
    }
}

/// Response model representing a stored item
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for the item
    pub id: String,

    /// Name of the item
    pub name: String,

    /// Description of the item, omitted when not provided
    #[oai(skip_serializing_if_is_none)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Price of the item
    pub price: f64,

    /// Whether the item is currently on offer
    pub on_offer: bool,
}

impl From<item::Model> for Item {
    fn from(model: item::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            on_offer: model.on_offer,
        }
    }
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "create_item_bad_request")]
pub enum CreateItemApiResponse {
    /// Item created, full record returned
    #[oai(status = 201)]
    Created(Json<Item>),

    /// Request body failed schema validation
    #[oai(status = 400)]
    ValidationError(Json<ErrorResponse>),
}

fn create_item_bad_request(err: poem::Error) -> CreateItemApiResponse {
    CreateItemApiResponse::ValidationError(validation_error_body(&err))
}

/// Single item returned by get, update and delete
#[derive(ApiResponse)]
#[oai(bad_request_handler = "item_bad_request")]
pub enum ItemApiResponse {
    /// The item as currently stored (or as it was, for delete)
    #[oai(status = 200)]
    Ok(Json<Item>),

    /// Request body failed schema validation
    #[oai(status = 400)]
    ValidationError(Json<ErrorResponse>),
}

fn item_bad_request(err: poem::Error) -> ItemApiResponse {
    ItemApiResponse::ValidationError(validation_error_body(&err))
}
