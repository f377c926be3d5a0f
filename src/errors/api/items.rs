use crate::errors::internal::{InternalError, ItemError};
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

/// Item endpoint error types
#[derive(ApiResponse, Debug)]
pub enum ItemApiError {
    /// Item identifier is malformed or no such item exists
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Body for a request rejected before reaching the handler
///
/// Used by the bad-request handlers of the item success responses, so a malformed
/// payload gets the same JSON shape as a 404 or 500.
pub fn validation_error_body(err: &poem::Error) -> Json<ErrorResponse> {
    tracing::debug!("Rejecting item request: {}", err);

    Json(ErrorResponse {
        error: "validation_error".to_string(),
        message: format!("Request validation failed: {}", err),
        status_code: 400,
    })
}

impl ItemApiError {
    /// Create a NotFound error
    pub fn not_found() -> Self {
        ItemApiError::NotFound(Json(ErrorResponse {
            error: "item_not_found".to_string(),
            message: "Item not found".to_string(),
            status_code: 404,
        }))
    }

    /// Convert InternalError to ItemApiError
    ///
    /// Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Item(ItemError::NotFound(item_id)) => {
                tracing::debug!("Item not found: {}", item_id);
                Self::not_found()
            }
            InternalError::Database(source) => {
                tracing::error!("Database error in item operation: {}", source);
                Self::internal_server_error()
            }
        }
    }

    fn internal_server_error() -> Self {
        ItemApiError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "An internal error occurred".to_string(),
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ItemApiError::NotFound(json) => json.0.message.clone(),
            ItemApiError::InternalError(json) => json.0.message.clone(),
        }
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        match self {
            ItemApiError::NotFound(json) => json.0.status_code,
            ItemApiError::InternalError(json) => json.0.status_code,
        }
    }
}

impl From<InternalError> for ItemApiError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for ItemApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
