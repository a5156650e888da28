//! Session source trait (port)

use async_trait::async_trait;

use crate::domain::SessionPayload;
use crate::error::DomainError;

/// Asynchronous session resolution owned by the authentication layer.
/// `Ok(None)` means there is no signed-in user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionSource: Send + Sync {
    async fn fetch_session(&self) -> Result<Option<SessionPayload>, DomainError>;
}
