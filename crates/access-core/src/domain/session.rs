// ============================================================================
// Access Core - Session Snapshot
// File: crates/access-core/src/domain/session.rs
// Description: Immutable per-login permission snapshot and its resolution state
// ============================================================================

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::access_record::MenuAccess;
use super::role::Role;
use crate::error::DomainError;

/// Identity block of the login response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SessionUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[validate(email(message = "Session email is not a valid address"))]
    pub email: String,

    #[serde(default)]
    pub name: String,
}

/// Session payload as returned by the credential check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPayload {
    pub user: SessionUser,
    pub role: String,
    #[serde(default)]
    pub menu_access: Option<MenuAccess>,
}

impl SessionPayload {
    pub fn new(user: SessionUser, role: Role, menu_access: MenuAccess) -> Self {
        Self {
            user,
            role: role.as_str().to_string(),
            menu_access: Some(menu_access),
        }
    }
}

/// Validated session snapshot. Never mutated; replaced wholesale on re-login.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub user: SessionUser,
    pub role: Role,
    pub menu_access: MenuAccess,
    pub established_at: DateTime<Utc>,
}

impl Session {
    pub fn from_payload(payload: SessionPayload) -> Result<Self, DomainError> {
        payload.user.validate()?;
        let role = Role::parse(&payload.role)
            .ok_or_else(|| DomainError::UnknownRole(payload.role.clone()))?;

        Ok(Self {
            id: Uuid::new_v4(),
            user: SessionUser {
                id: payload.user.id,
                email: payload.user.email.trim().to_string(),
                name: payload.user.name.trim().to_string(),
            },
            role,
            menu_access: payload.menu_access.unwrap_or_default(),
            established_at: Utc::now(),
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Three-valued view of the asynchronous session boundary
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    #[default]
    Loading,
    Unauthenticated,
    Authenticated(Arc<Session>),
}

impl SessionState {
    pub fn authenticated(session: Session) -> Self {
        SessionState::Authenticated(Arc::new(session))
    }

    /// Build the state from the raw flags an external session provider exposes.
    /// `is_loading` wins; a missing or invalid payload is unauthenticated.
    pub fn from_flags(
        payload: Option<SessionPayload>,
        is_authenticated: bool,
        is_loading: bool,
    ) -> Self {
        if is_loading {
            return SessionState::Loading;
        }
        if !is_authenticated {
            return SessionState::Unauthenticated;
        }
        match payload.map(Session::from_payload) {
            Some(Ok(session)) => SessionState::authenticated(session),
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Rejected session payload, treating as unauthenticated");
                SessionState::Unauthenticated
            }
            None => SessionState::Unauthenticated,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated(session) => Some(session.as_ref()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn role(&self) -> Option<Role> {
        self.session().map(|s| s.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AccessRecord;

    fn payload(role: &str) -> SessionPayload {
        SessionPayload {
            user: SessionUser {
                id: None,
                email: "cashier@bistro.io".to_string(),
                name: " Rina ".to_string(),
            },
            role: role.to_string(),
            menu_access: None,
        }
    }

    #[test]
    fn test_from_payload_parses_role() {
        let session = Session::from_payload(payload("cashier")).unwrap();
        assert_eq!(session.role, Role::Cashier);
        assert_eq!(session.user.name, "Rina");
        assert!(session.menu_access.is_empty());
    }

    #[test]
    fn test_unknown_role_rejected() {
        let err = Session::from_payload(payload("owner")).unwrap_err();
        assert!(matches!(err, DomainError::UnknownRole(r) if r == "owner"));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut p = payload("manager");
        p.user.email = "not-an-email".to_string();
        assert!(matches!(
            Session::from_payload(p),
            Err(DomainError::ValidationError(_))
        ));
    }

    #[test]
    fn test_payload_json_shape() {
        let raw = r#"{
            "user": {"email": "manager@bistro.io", "name": "Ade"},
            "role": "manager",
            "menuAccess": {"reports": {"checked": false, "children": {"vat": true}}}
        }"#;
        let p: SessionPayload = serde_json::from_str(raw).unwrap();
        let session = Session::from_payload(p).unwrap();
        assert_eq!(
            session.menu_access.get("reports"),
            Some(&AccessRecord::with_children(false, [("vat", true)]))
        );
    }

    #[test]
    fn test_from_flags() {
        assert!(SessionState::from_flags(Some(payload("admin")), true, true).is_loading());
        assert!(matches!(
            SessionState::from_flags(Some(payload("admin")), false, false),
            SessionState::Unauthenticated
        ));
        assert!(matches!(
            SessionState::from_flags(None, true, false),
            SessionState::Unauthenticated
        ));
        assert!(matches!(
            SessionState::from_flags(Some(payload("owner")), true, false),
            SessionState::Unauthenticated
        ));
        let state = SessionState::from_flags(Some(payload("waiter")), true, false);
        assert_eq!(state.role(), Some(Role::Waiter));
    }

    #[test]
    fn test_default_state_is_loading() {
        assert!(SessionState::default().is_loading());
    }
}
