//! Fixtures shared by the unit tests

use crate::domain::{MenuAccess, Role, Session, SessionPayload, SessionState, SessionUser};

pub(crate) fn session(role: Role, access: MenuAccess) -> Session {
    Session::from_payload(SessionPayload::new(
        SessionUser {
            id: None,
            email: "staff@bistro.io".to_string(),
            name: "Staff".to_string(),
        },
        role,
        access,
    ))
    .unwrap()
}

pub(crate) fn state(role: Role, access: MenuAccess) -> SessionState {
    SessionState::authenticated(session(role, access))
}
