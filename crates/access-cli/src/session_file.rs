//! Session source backed by a JSON file holding a login payload

use std::path::PathBuf;

use access_core::ports::SessionSource;
use access_core::{DomainError, SessionPayload};
use async_trait::async_trait;

pub struct FileSessionSource {
    path: PathBuf,
}

impl FileSessionSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SessionSource for FileSessionSource {
    /// A `null` document means nobody is signed in.
    async fn fetch_session(&self) -> Result<Option<SessionPayload>, DomainError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::SessionSourceError(format!("{}: {}", self.path.display(), e))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            DomainError::SessionSourceError(format!("{}: {}", self.path.display(), e))
        })
    }
}
