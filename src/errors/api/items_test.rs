#[cfg(test)]
mod tests {
    use crate::errors::ItemApiError;
    use crate::errors::api::items::validation_error_body;
    use poem::http::StatusCode;
    use crate::errors::internal::{DatabaseError, InternalError, ItemError};
    use sea_orm::DbErr;

    #[test]
    fn test_item_not_found_converts_to_404() {
        let internal_err = InternalError::Item(ItemError::NotFound("missing".to_string()));
        let api_err = ItemApiError::from_internal_error(internal_err);

        assert_eq!(api_err.status_code(), 404);
        assert_eq!(api_err.message(), "Item not found");
    }

    #[test]
    fn test_database_error_converts_to_internal_server_error() {
        let internal_err = InternalError::database("find_item", DbErr::Custom("disk I/O error".to_string()));
        let api_err = ItemApiError::from_internal_error(internal_err);

        assert_eq!(api_err.status_code(), 500);
        assert_eq!(api_err.message(), "An internal error occurred");
    }

    #[test]
    fn test_transaction_error_does_not_leak_details() {
        let internal_err: InternalError = DatabaseError::TransactionCommit {
            source: DbErr::Custom("database is locked".to_string()),
        }
        .into();
        let api_err: ItemApiError = internal_err.into();

        assert_eq!(api_err.status_code(), 500);
        assert!(!api_err.message().contains("locked"));
    }

    #[test]
    fn test_validation_error_body_carries_reason() {
        let err = poem::Error::from_string("missing field `price`", StatusCode::BAD_REQUEST);
        let body = validation_error_body(&err);

        assert_eq!(body.0.error, "validation_error");
        assert_eq!(body.0.status_code, 400);
        assert!(body.0.message.contains("missing field `price`"));
    }
}
