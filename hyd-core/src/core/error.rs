//! Error types for the Hyd core library.

use thiserror::Error;

/// All errors that can occur within the Hyd core library.
#[derive(Debug, Error)]
pub enum HydError {
    /// An I/O operation on the filesystem failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored list or settings file could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A list index was outside the bounds of the history list.
    #[error("Index {index} out of range for list of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// An entry was missing a required field.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// A settings key or value was not recognised.
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    /// An item id was requested that is not in the list.
    #[error("Item not found: {0}")]
    NotFound(String),
}

/// Convenience alias that pins the error type to [`HydError`].
pub type Result<T> = std::result::Result<T, HydError>;

impl HydError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(e) => format!("File error: {e}"),
            Self::Json(e) => format!("Stored data is unreadable: {e}"),
            Self::IndexOutOfRange { index, .. } => format!("No item at position {index}"),
            Self::ValidationFailed(msg) => msg.clone(),
            Self::InvalidSetting(msg) => msg.clone(),
            Self::NotFound(_) => "Item no longer exists".to_string(),
        }
    }
}
