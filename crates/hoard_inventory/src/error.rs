//! # Inventory Error Types
//!
//! The stack algebra itself never fails: bad amounts, bad indices and absent
//! kinds all map to a defined zero/false/`None` result. The errors below only
//! arise at the configuration boundary, when item kinds are built or loaded.

use thiserror::Error;

/// Errors that can occur while building item kinds, catalogs or configs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HoardError {
    /// Item id was empty after trimming whitespace.
    #[error("item id must not be empty")]
    EmptyItemId,

    /// Two item kinds were registered under the same id.
    #[error("duplicate item id: {0}")]
    DuplicateItem(String),

    /// Item id not present in the catalog.
    #[error("item not found: {0}")]
    UnknownItem(String),

    /// A variant-specific field was missing from a config record.
    #[error("item {item_id} is missing required field `{field}`")]
    MissingField {
        /// The item that was being built.
        item_id: String,
        /// Name of the missing field.
        field: &'static str,
    },

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for configuration operations.
pub type HoardResult<T> = Result<T, HoardError>;
