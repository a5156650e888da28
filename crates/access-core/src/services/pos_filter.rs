// ============================================================================
// Access Core - POS Option Filter
// File: crates/access-core/src/services/pos_filter.rs
// ============================================================================
//! Which point-of-sale buttons the current cashier may press.
//!
//! Buttons are submodules of the `pos` module. An option is available when the
//! module is enabled, its own flag is `true`, and it exists in the catalog.

use access_shared::constants::POS_MODULE_KEY;

use crate::domain::{PosCatalog, PosOption};
use crate::services::permission_store::PermissionStore;

pub fn has_pos_module_access(store: &PermissionStore<'_>) -> bool {
    store.has_module_access(POS_MODULE_KEY)
}

/// Catalog-ordered options the session may use
pub fn accessible_pos_options<'c>(
    store: &PermissionStore<'_>,
    catalog: &'c PosCatalog,
) -> Vec<&'c PosOption> {
    catalog
        .iter()
        .filter(|option| store.has_sub_module_access(POS_MODULE_KEY, &option.key))
        .collect()
}

/// Point lookup. Admin roles are allowed any button.
pub fn has_pos_button_access(store: &PermissionStore<'_>, catalog: &PosCatalog, button_key: &str) -> bool {
    if store.is_admin() {
        return true;
    }
    catalog.contains(button_key) && store.has_sub_module_access(POS_MODULE_KEY, button_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_pos_options;
    use crate::domain::{AccessRecord, MenuAccess, Role};
    use crate::test_support::session;

    fn catalog() -> PosCatalog {
        PosCatalog::new(builtin_pos_options()).unwrap()
    }

    #[test]
    fn test_cashier_button_lookup() {
        let s = session(
            Role::Cashier,
            MenuAccess::new().with(
                "pos",
                AccessRecord::with_children(true, [("discount", false), ("refund", true)]),
            ),
        );
        let store = PermissionStore::for_session(Some(&s));
        let catalog = catalog();
        assert!(has_pos_module_access(&store));
        assert!(has_pos_button_access(&store, &catalog, "refund"));
        assert!(!has_pos_button_access(&store, &catalog, "discount"));
        assert!(!has_pos_button_access(&store, &catalog, "void"));
    }

    #[test]
    fn test_options_follow_catalog_order() {
        let s = session(
            Role::Cashier,
            MenuAccess::new().with(
                "pos",
                AccessRecord::with_children(
                    true,
                    [("open-drawer", true), ("hold-order", true), ("refund", true)],
                ),
            ),
        );
        let catalog = catalog();
        let keys: Vec<&str> = accessible_pos_options(&PermissionStore::for_session(Some(&s)), &catalog)
            .into_iter()
            .map(|o| o.key.as_str())
            .collect();
        assert_eq!(keys, vec!["hold-order", "refund", "open-drawer"]);
    }

    #[test]
    fn test_flag_outside_catalog_ignored() {
        let s = session(
            Role::Waiter,
            MenuAccess::new().with("pos", AccessRecord::with_children(true, [("teleport", true)])),
        );
        let store = PermissionStore::for_session(Some(&s));
        let catalog = catalog();
        assert!(accessible_pos_options(&store, &catalog).is_empty());
        assert!(!has_pos_button_access(&store, &catalog, "teleport"));
    }

    #[test]
    fn test_disabled_module_blocks_buttons() {
        let s = session(
            Role::Cashier,
            MenuAccess::new().with("pos", AccessRecord::with_children(false, [("refund", true)])),
        );
        let store = PermissionStore::for_session(Some(&s));
        let catalog = catalog();
        assert!(!has_pos_module_access(&store));
        assert!(accessible_pos_options(&store, &catalog).is_empty());
        assert!(!has_pos_button_access(&store, &catalog, "refund"));
    }

    #[test]
    fn test_admin_gets_everything() {
        let s = session(Role::Admin, MenuAccess::new());
        let store = PermissionStore::for_session(Some(&s));
        let catalog = catalog();
        assert!(has_pos_module_access(&store));
        assert_eq!(accessible_pos_options(&store, &catalog).len(), catalog.len());
        assert!(has_pos_button_access(&store, &catalog, "void"));
    }

    #[test]
    fn test_no_session_gets_nothing() {
        let store = PermissionStore::deny_all();
        let catalog = catalog();
        assert!(!has_pos_module_access(&store));
        assert!(accessible_pos_options(&store, &catalog).is_empty());
        assert!(!has_pos_button_access(&store, &catalog, "refund"));
    }
}
