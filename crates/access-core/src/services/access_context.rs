// ============================================================================
// Access Core - Access Context
// File: crates/access-core/src/services/access_context.rs
// Description: Per-snapshot facade handed to navigation and rendering code
// ============================================================================

use std::sync::Arc;

use access_shared::config::GuardSettings;

use crate::catalog::AccessCatalog;
use crate::domain::{MenuItemDef, PosOption, Role, SessionState};
use crate::services::menu_filter;
use crate::services::permission_store::PermissionStore;
use crate::services::pos_filter;
use crate::services::route_guard::{GuardDecision, Navigator, ProtectOptions, RouteGuard};

/// Everything the UI asks about access, answered for one session snapshot.
///
/// Build a new context whenever the [`SessionStore`](super::SessionStore)
/// publishes a new snapshot; a context never observes a later login.
#[derive(Debug, Clone)]
pub struct AccessContext {
    state: Arc<SessionState>,
    catalog: Arc<AccessCatalog>,
    guard: RouteGuard,
}

impl AccessContext {
    pub fn new(state: Arc<SessionState>, catalog: Arc<AccessCatalog>, settings: GuardSettings) -> Self {
        let guard = RouteGuard::new(settings, Arc::clone(&catalog));
        Self { state, catalog, guard }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn guard(&self) -> &RouteGuard {
        &self.guard
    }

    pub fn permissions(&self) -> PermissionStore<'_> {
        PermissionStore::for_state(&self.state)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn user_role(&self) -> Option<Role> {
        self.state.role()
    }

    pub fn is_admin(&self) -> bool {
        self.permissions().is_admin()
    }

    pub fn accessible_menu_items(&self) -> Vec<MenuItemDef> {
        menu_filter::accessible_menu_items(&self.catalog.menu, &self.permissions())
    }

    pub fn can_access_route(&self, path: &str) -> bool {
        self.guard.can_access(&self.state, path)
    }

    pub fn has_access_to_module(&self, module_key: &str) -> bool {
        self.permissions().has_module_access(module_key)
    }

    pub fn has_access_to_sub_module(&self, module_key: &str, sub_module_key: &str) -> bool {
        self.permissions().has_sub_module_access(module_key, sub_module_key)
    }

    pub fn has_any_access_to_module(&self, module_key: &str) -> bool {
        self.permissions().has_any_module_access(module_key)
    }

    pub fn has_pos_access(&self) -> bool {
        pos_filter::has_pos_module_access(&self.permissions())
    }

    pub fn accessible_pos_options(&self) -> Vec<&PosOption> {
        pos_filter::accessible_pos_options(&self.permissions(), &self.catalog.pos)
    }

    pub fn has_access_to_pos_button(&self, button_key: &str) -> bool {
        pos_filter::has_pos_button_access(&self.permissions(), &self.catalog.pos, button_key)
    }

    pub fn decide_route(&self, path: &str, options: &ProtectOptions) -> GuardDecision {
        self.guard.decide_with(&self.state, path, options)
    }

    pub fn protect<T>(
        &self,
        path: &str,
        options: &ProtectOptions,
        children: impl FnOnce() -> T,
        fallback: impl FnOnce() -> T,
        navigator: &dyn Navigator,
    ) -> T {
        self.guard
            .protect(&self.state, path, options, children, fallback, navigator)
    }
}
