/// Every non-identifier field of an item record
///
/// Used for both create and update. Updates replace all of these fields,
/// so an omitted `description` clears any previously stored one.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFields {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub on_offer: bool,
}
