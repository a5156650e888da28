// ============================================================================
// Access Core - Permission Store
// File: crates/access-core/src/services/permission_store.rs
// ============================================================================
//! Boolean questions about a session's rights.
//!
//! The free functions work on a raw [`MenuAccess`] map. [`PermissionStore`]
//! wraps them with the session-level rules: no session denies everything,
//! admin roles allow everything, before the map is ever consulted.

use crate::domain::{MenuAccess, Session, SessionState};

/// True iff the module is present and `checked`.
pub fn has_module_access(menu_access: &MenuAccess, module_key: &str) -> bool {
    menu_access
        .get(module_key)
        .map(|record| record.checked)
        .unwrap_or(false)
}

/// True iff the module is checked and its `children` map grants the submodule.
pub fn has_sub_module_access(
    menu_access: &MenuAccess,
    module_key: &str,
    sub_module_key: &str,
) -> bool {
    match menu_access.get(module_key) {
        Some(record) => record.checked && record.child_flag(sub_module_key),
        None => false,
    }
}

/// True iff the module is checked or any of its submodules is granted.
pub fn has_any_module_access(menu_access: &MenuAccess, module_key: &str) -> bool {
    menu_access
        .get(module_key)
        .map(|record| record.checked || record.any_child_granted())
        .unwrap_or(false)
}

#[derive(Debug, Clone, Copy)]
enum Grant<'a> {
    Nothing,
    Everything,
    Matrix(&'a MenuAccess),
}

/// Read-only view over one session snapshot
#[derive(Debug, Clone, Copy)]
pub struct PermissionStore<'a> {
    grant: Grant<'a>,
}

impl<'a> PermissionStore<'a> {
    pub fn for_session(session: Option<&'a Session>) -> Self {
        let grant = match session {
            None => Grant::Nothing,
            Some(session) if session.is_admin() => Grant::Everything,
            Some(session) => Grant::Matrix(&session.menu_access),
        };
        Self { grant }
    }

    pub fn for_state(state: &'a SessionState) -> Self {
        Self::for_session(state.session())
    }

    /// Store that answers `false` to everything
    pub fn deny_all() -> Self {
        Self {
            grant: Grant::Nothing,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.grant, Grant::Everything)
    }

    pub fn has_module_access(&self, module_key: &str) -> bool {
        match self.grant {
            Grant::Nothing => false,
            Grant::Everything => true,
            Grant::Matrix(access) => has_module_access(access, module_key),
        }
    }

    pub fn has_sub_module_access(&self, module_key: &str, sub_module_key: &str) -> bool {
        match self.grant {
            Grant::Nothing => false,
            Grant::Everything => true,
            Grant::Matrix(access) => has_sub_module_access(access, module_key, sub_module_key),
        }
    }

    pub fn has_any_module_access(&self, module_key: &str) -> bool {
        match self.grant {
            Grant::Nothing => false,
            Grant::Everything => true,
            Grant::Matrix(access) => has_any_module_access(access, module_key),
        }
    }

    /// Module-level check when `sub_module_key` is `None`, submodule check otherwise
    pub fn allows(&self, module_key: &str, sub_module_key: Option<&str>) -> bool {
        match sub_module_key {
            Some(sub) => self.has_sub_module_access(module_key, sub),
            None => self.has_module_access(module_key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccessRecord, Role};
    use crate::test_support::session;

    #[test]
    fn test_absent_module_denied() {
        let access = MenuAccess::new().with("pos", AccessRecord::leaf(true));
        assert!(has_module_access(&access, "pos"));
        assert!(!has_module_access(&access, "inventory"));
        assert!(!has_sub_module_access(&access, "inventory", "stock"));
        assert!(!has_any_module_access(&access, "inventory"));
    }

    #[test]
    fn test_module_gates_submodule() {
        // manager with reports unchecked but vat flagged
        let access =
            MenuAccess::new().with("reports", AccessRecord::with_children(false, [("vat", true)]));
        assert!(!has_sub_module_access(&access, "reports", "vat"));
        assert!(has_any_module_access(&access, "reports"));
    }

    #[test]
    fn test_leaf_module_has_no_submodules() {
        let access = MenuAccess::new().with("expense", AccessRecord::leaf(true));
        assert!(!has_sub_module_access(&access, "expense", "expense-list"));
    }

    #[test]
    fn test_missing_child_key_denied() {
        let access = MenuAccess::new().with(
            "pos",
            AccessRecord::with_children(true, [("discount", false), ("refund", true)]),
        );
        assert!(has_sub_module_access(&access, "pos", "refund"));
        assert!(!has_sub_module_access(&access, "pos", "discount"));
        assert!(!has_sub_module_access(&access, "pos", "void"));
    }

    #[test]
    fn test_no_session_denies_everything() {
        let store = PermissionStore::for_session(None);
        assert!(!store.is_admin());
        assert!(!store.has_module_access("dashboard"));
        assert!(!store.has_sub_module_access("pos", "refund"));
        assert!(!store.has_any_module_access("pos"));
        assert!(!PermissionStore::for_state(&SessionState::Loading).has_module_access("pos"));
        assert!(!PermissionStore::deny_all().allows("pos", None));
    }

    #[test]
    fn test_admin_bypass_with_empty_map() {
        for role in [Role::Admin, Role::SuperAdmin] {
            let s = session(role, MenuAccess::new());
            let store = PermissionStore::for_session(Some(&s));
            assert!(store.is_admin());
            assert!(store.has_module_access("anything"));
            assert!(store.has_sub_module_access("reports", "vat"));
            assert!(store.has_any_module_access("staff"));
        }
    }

    #[test]
    fn test_non_admin_roles_fail_closed_on_unknown_keys() {
        for role in Role::ALL.into_iter().filter(|r| !r.is_admin()) {
            let s = session(role, MenuAccess::new().with("pos", AccessRecord::leaf(true)));
            let store = PermissionStore::for_session(Some(&s));
            assert!(store.has_module_access("pos"));
            assert!(!store.has_module_access("unknown-module"));
            assert!(!store.has_sub_module_access("unknown-module", "child"));
            assert!(!store.allows("pos", Some("refund")));
        }
    }
}
