use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QuerySelect, Set,
    TransactionTrait,
};

use crate::errors::InternalError;
use crate::errors::internal::{DatabaseError, ItemError};
use crate::types::db::item::{self, ActiveModel, Entity as Item};
use crate::types::internal::{ItemFields, ItemId};

/// Maximum number of records returned by a single list call
pub const ITEM_LIST_LIMIT: u64 = 100;

/// ItemStore maps item records between their API form and the items table
///
/// Identifiers cross this boundary as strings and are decoded into `ItemId`
/// on every lookup. A string that does not decode is reported exactly like an
/// identifier with no stored record.
pub struct ItemStore {
    db: DatabaseConnection,
}

impl ItemStore {
    /// Create a new ItemStore over an already migrated connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn decode_id(item_id: &str) -> Result<ItemId, InternalError> {
        item_id.parse::<ItemId>().map_err(|e| {
            tracing::debug!("Rejecting malformed item id '{}': {}", item_id, e);
            ItemError::NotFound(item_id.to_string()).into()
        })
    }

    /// Insert a new item
    ///
    /// A fresh identifier is assigned here; identical field sets are allowed to coexist.
    ///
    /// # Returns
    /// * `Ok(Model)` - The stored record including its identifier
    /// * `Err(InternalError)` - Database error
    pub async fn create_item(&self, fields: ItemFields) -> Result<item::Model, InternalError> {
        let item_id = ItemId::new();

        let new_item = ActiveModel {
            id: Set(item_id.to_string()),
            name: Set(fields.name),
            description: Set(fields.description),
            price: Set(fields.price),
            on_offer: Set(fields.on_offer),
        };

        let created = new_item
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_item", e))?;

        tracing::debug!("Created item {}", created.id);

        Ok(created)
    }

    /// List stored items
    ///
    /// Returns at most `ITEM_LIST_LIMIT` records in the table's natural order.
    pub async fn list_items(&self) -> Result<Vec<item::Model>, InternalError> {
        Item::find()
            .limit(ITEM_LIST_LIMIT)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_items", e))
    }

    /// Fetch a single item
    ///
    /// # Returns
    /// * `Ok(Model)` - The stored record
    /// * `Err(InternalError::Item(ItemError::NotFound))` - Malformed id or no such item
    /// * `Err(InternalError)` - Database error
    pub async fn get_item(&self, item_id: &str) -> Result<item::Model, InternalError> {
        let id = Self::decode_id(item_id)?;

        Item::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_item", e))?
            .ok_or_else(|| ItemError::NotFound(item_id.to_string()).into())
    }

    /// Replace every field of an existing item
    ///
    /// Existence is checked inside the same transaction as the write, so an update
    /// whose values equal the stored ones still succeeds.
    ///
    /// # Returns
    /// * `Ok(Model)` - The record as stored after the write
    /// * `Err(InternalError::Item(ItemError::NotFound))` - Malformed id or no such item
    /// * `Err(InternalError)` - Database or transaction error
    pub async fn update_item(
        &self,
        item_id: &str,
        fields: ItemFields,
    ) -> Result<item::Model, InternalError> {
        let id = Self::decode_id(item_id)?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|source| DatabaseError::TransactionBegin { source })?;

        let existing = Item::find_by_id(id.to_string())
            .one(&txn)
            .await
            .map_err(|e| InternalError::database("find_item_for_update", e))?
            .ok_or_else(|| ItemError::NotFound(item_id.to_string()))?;

        let mut active_model: ActiveModel = existing.into();
        active_model.name = Set(fields.name);
        active_model.description = Set(fields.description);
        active_model.price = Set(fields.price);
        active_model.on_offer = Set(fields.on_offer);

        let updated = active_model
            .update(&txn)
            .await
            .map_err(|e| InternalError::database("update_item", e))?;

        txn.commit()
            .await
            .map_err(|source| DatabaseError::TransactionCommit { source })?;

        tracing::debug!("Updated item {}", updated.id);

        Ok(updated)
    }

    /// Remove an item and return what was stored
    ///
    /// Lookup and delete run in one transaction. Deletion is permanent.
    ///
    /// # Returns
    /// * `Ok(Model)` - The record as it was before removal
    /// * `Err(InternalError::Item(ItemError::NotFound))` - Malformed id or no such item
    /// * `Err(InternalError)` - Database or transaction error
    pub async fn delete_item(&self, item_id: &str) -> Result<item::Model, InternalError> {
        let id = Self::decode_id(item_id)?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|source| DatabaseError::TransactionBegin { source })?;

        let existing = Item::find_by_id(id.to_string())
            .one(&txn)
            .await
            .map_err(|e| InternalError::database("find_item_for_delete", e))?
            .ok_or_else(|| ItemError::NotFound(item_id.to_string()))?;

        existing
            .clone()
            .delete(&txn)
            .await
            .map_err(|e| InternalError::database("delete_item", e))?;

        txn.commit()
            .await
            .map_err(|source| DatabaseError::TransactionCommit { source })?;

        tracing::debug!("Deleted item {}", existing.id);

        Ok(existing)
    }
}

impl std::fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStore")
            .field("db", &"<connection>")
            .finish()
    }
}
