//! Error types for the sheet core.

use thiserror::Error;

use crate::character::CharacterId;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while loading or mutating sheet data.
///
/// Every variant is recoverable: a failed track mutation is a no-op and a
/// bad item degrades to a warning, never aborting sheet preparation.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A track name outside harm/luck/experience was addressed.
    #[error("unknown track: {0}")]
    UnknownTrack(String),

    /// A document carried a character kind outside the closed set.
    #[error("unknown character kind: {0}")]
    UnknownKind(String),

    /// An item carried a category outside the closed set.
    #[error("unknown item category: {0}")]
    UnknownCategory(String),

    /// A document was written by an incompatible schema version.
    #[error("unsupported schema version {0}")]
    UnsupportedVersion(u32),

    /// No character with the given id exists in the store.
    #[error("character {0} not found")]
    NotFound(CharacterId),

    /// A document failed to parse as JSON.
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),
}
