// ============================================================================
// Access Core - Session Store
// File: crates/access-core/src/services/session_store.rs
// ============================================================================
//! Holder of the current session snapshot.
//!
//! Readers take an `Arc` and keep deciding against it while a newer snapshot
//! is installed. Every transition bumps an epoch, so a refresh that finishes
//! after a later login, logout or refresh is dropped instead of applied.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::domain::{Session, SessionPayload, SessionState};
use crate::ports::SessionSource;

#[derive(Debug)]
struct Slot {
    epoch: u64,
    state: Arc<SessionState>,
}

#[derive(Debug)]
pub struct SessionStore {
    slot: RwLock<Slot>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Starts out loading: nothing has been resolved yet.
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(Slot {
                epoch: 0,
                state: Arc::new(SessionState::Loading),
            }),
        }
    }

    pub fn snapshot(&self) -> Arc<SessionState> {
        Arc::clone(&self.slot.read().state)
    }

    fn replace(&self, state: SessionState) -> (u64, Arc<SessionState>) {
        let mut slot = self.slot.write();
        slot.epoch += 1;
        slot.state = Arc::new(state);
        (slot.epoch, Arc::clone(&slot.state))
    }

    /// Mark resolution as in flight; returns the epoch it belongs to.
    pub fn begin_loading(&self) -> u64 {
        self.replace(SessionState::Loading).0
    }

    /// Install a fresh snapshot from a login payload. An invalid payload
    /// leaves the store unauthenticated.
    pub fn login(&self, payload: SessionPayload) -> Arc<SessionState> {
        self.replace(Self::state_from(Some(payload))).1
    }

    pub fn logout(&self) -> Arc<SessionState> {
        info!("Session discarded");
        self.replace(SessionState::Unauthenticated).1
    }

    fn state_from(payload: Option<SessionPayload>) -> SessionState {
        match payload.map(Session::from_payload) {
            Some(Ok(session)) => {
                info!(role = %session.role, session_id = %session.id, "Session established");
                SessionState::authenticated(session)
            }
            Some(Err(e)) => {
                warn!(error = %e, "Rejected session payload, treating as unauthenticated");
                SessionState::Unauthenticated
            }
            None => SessionState::Unauthenticated,
        }
    }

    /// Resolve the session through `source`. Source failures count as signed
    /// out; there is no retry here.
    pub async fn refresh(&self, source: &dyn SessionSource) -> Arc<SessionState> {
        let epoch = self.begin_loading();
        let resolved = match source.fetch_session().await {
            Ok(payload) => Self::state_from(payload),
            Err(e) => {
                warn!(error = %e, "Session resolution failed");
                SessionState::Unauthenticated
            }
        };

        let mut slot = self.slot.write();
        if slot.epoch != epoch {
            info!(epoch, current = slot.epoch, "Discarding stale session resolution");
            return Arc::clone(&slot.state);
        }
        slot.epoch += 1;
        slot.state = Arc::new(resolved);
        Arc::clone(&slot.state)
    }
}
