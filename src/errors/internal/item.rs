use thiserror::Error;

#[derive(Error, Debug)]
pub enum ItemError {
    /// Covers both malformed identifiers and well-formed ones with no stored record
    #[error("Item not found: {0}")]
    NotFound(String),
}
