#[cfg(test)]
mod tests {
    use crate::errors::internal::{DatabaseError, InternalError, ItemError};
    use sea_orm::DbErr;

    #[test]
    fn test_database_error_includes_operation() {
        let db_err = DbErr::RecordNotFound("test record".to_string());
        let error = InternalError::database("insert_item", db_err);

        let error_string = error.to_string();
        assert!(error_string.contains("insert_item"));
        assert!(error_string.contains("Database error"));
    }

    #[test]
    fn test_transaction_begin_error_is_transparent() {
        let error: InternalError = DatabaseError::TransactionBegin {
            source: DbErr::Custom("pool closed".to_string()),
        }
        .into();

        assert!(error.to_string().contains("Starting transaction failed"));
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_item_not_found_converts_via_from() {
        let error: InternalError = ItemError::NotFound("abc".to_string()).into();

        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "Item not found: abc");
    }
}
