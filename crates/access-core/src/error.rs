//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Duplicate menu key: {0}")]
    DuplicateMenuKey(String),

    #[error("Menu item {key} references unknown parent {parent}")]
    UnknownParent { key: String, parent: String },

    #[error("Menu item {key} declares parent {declared} but is nested under {actual}")]
    ParentKeyMismatch {
        key: String,
        declared: String,
        actual: String,
    },

    #[error("Menu parent chain forms a cycle at: {0}")]
    MenuCycle(String),

    #[error("Invalid route pattern {pattern}: {reason}")]
    InvalidRoutePattern { pattern: String, reason: String },

    #[error("Duplicate POS option: {0}")]
    DuplicatePosOption(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Catalog load error: {0}")]
    CatalogLoadError(String),

    #[error("Session source error: {0}")]
    SessionSourceError(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(err: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::CatalogLoadError(err.to_string())
    }
}
