// Internal types - not exposed via API
pub mod item;
pub mod item_id;

pub use item::ItemFields;
pub use item_id::ItemId;
