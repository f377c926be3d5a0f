#[cfg(test)]
mod tests {
    use crate::errors::InternalError;
    use crate::errors::internal::ItemError;
    use crate::stores::ITEM_LIST_LIMIT;
    use crate::test::utils::{item_fields, setup_test_item_store};
    use crate::types::internal::{ItemFields, ItemId};

    const ABSENT_ID: &str = "00000000-0000-4000-8000-000000000000";

    fn assert_not_found<T: std::fmt::Debug>(result: Result<T, InternalError>) {
        match result {
            Err(InternalError::Item(ItemError::NotFound(_))) => {}
            other => panic!("Expected ItemError::NotFound, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_applies_defaults_and_assigns_id() {
        let (_db, store) = setup_test_item_store().await;

        let created = store.create_item(item_fields("Milk", 2.5)).await.unwrap();

        assert!(!created.id.is_empty());
        assert!(created.id.parse::<ItemId>().is_ok());
        assert_eq!(created.name, "Milk");
        assert_eq!(created.description, None);
        assert_eq!(created.price, 2.5);
        assert!(!created.on_offer);
    }

    #[tokio::test]
    async fn test_get_returns_created_record() {
        let (_db, store) = setup_test_item_store().await;

        let created = store
            .create_item(ItemFields {
                name: "Bread".to_string(),
                description: Some("Sourdough".to_string()),
                price: 4.0,
                on_offer: true,
            })
            .await
            .unwrap();

        let fetched = store.get_item(&created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_identical_fields_create_distinct_records() {
        let (_db, store) = setup_test_item_store().await;

        let first = store.create_item(item_fields("Eggs", 3.0)).await.unwrap();
        let second = store.create_item(item_fields("Eggs", 3.0)).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.list_items().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_absent_id_is_not_found_for_every_lookup() {
        let (_db, store) = setup_test_item_store().await;
        store.create_item(item_fields("Milk", 2.5)).await.unwrap();

        assert_not_found(store.get_item(ABSENT_ID).await);
        assert_not_found(store.update_item(ABSENT_ID, item_fields("Milk", 1.0)).await);
        assert_not_found(store.delete_item(ABSENT_ID).await);
    }

    #[tokio::test]
    async fn test_malformed_id_is_not_found_for_every_lookup() {
        let (_db, store) = setup_test_item_store().await;

        for bad_id in ["", "abc", "507f1f77bcf86cd799439011"] {
            assert_not_found(store.get_item(bad_id).await);
            assert_not_found(store.update_item(bad_id, item_fields("x", 1.0)).await);
            assert_not_found(store.delete_item(bad_id).await);
        }
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let (_db, store) = setup_test_item_store().await;

        let created = store
            .create_item(ItemFields {
                name: "Cheese".to_string(),
                description: Some("Aged cheddar".to_string()),
                price: 7.25,
                on_offer: true,
            })
            .await
            .unwrap();

        let updated = store
            .update_item(&created.id, item_fields("Cheddar", 6.0))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Cheddar");
        assert_eq!(updated.description, None);
        assert_eq!(updated.price, 6.0);
        assert!(!updated.on_offer);

        let fetched = store.get_item(&created.id).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_with_identical_values_succeeds() {
        let (_db, store) = setup_test_item_store().await;

        let created = store.create_item(item_fields("Milk", 2.5)).await.unwrap();
        let updated = store
            .update_item(&created.id, item_fields("Milk", 2.5))
            .await
            .unwrap();

        assert_eq!(updated, created);
    }

    #[tokio::test]
    async fn test_update_accepts_uppercase_form_of_id() {
        let (_db, store) = setup_test_item_store().await;

        let created = store.create_item(item_fields("Tea", 3.5)).await.unwrap();
        let updated = store
            .update_item(&created.id.to_uppercase(), item_fields("Green tea", 3.5))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Green tea");
    }

    #[tokio::test]
    async fn test_delete_returns_prior_record_and_is_irreversible() {
        let (_db, store) = setup_test_item_store().await;

        let created = store.create_item(item_fields("Milk", 2.5)).await.unwrap();

        let deleted = store.delete_item(&created.id).await.unwrap();
        assert_eq!(deleted, created);

        assert_not_found(store.get_item(&created.id).await);
        assert_not_found(store.delete_item(&created.id).await);
        assert!(store.list_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_is_capped() {
        let (_db, store) = setup_test_item_store().await;

        for i in 0..(ITEM_LIST_LIMIT + 5) {
            store
                .create_item(item_fields(&format!("item-{}", i), i as f64))
                .await
                .unwrap();
        }

        let items = store.list_items().await.unwrap();
        assert_eq!(items.len() as u64, ITEM_LIST_LIMIT);
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let (_db, store) = setup_test_item_store().await;

        assert!(store.list_items().await.unwrap().is_empty());
    }
}
