//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// A message key is not present in the catalog.
    ///
    /// Keys are fixed at build time, so this is an integration defect
    /// between the bundles and the code, never a user error.
    #[error("Missing message key: {0}")]
    MissingMessageKey(String),

    /// Table not found
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// The submission target rejected the form
    #[error("Submit failed: {0}")]
    SubmitFailed(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl CoreError {
    /// Whether it is expected behavior (stale selection, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::TableNotFound(_) => true,
            Self::MissingMessageKey(_)
            | Self::SubmitFailed(_)
            | Self::SerializationError(_)
            | Self::StorageError(_) => false,
        }
    }

    /// Whether the error must abort the current interaction instead of being shown to the user.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingMessageKey(_))
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
