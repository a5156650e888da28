// ============================================================================
// Access Core - Route Guard
// File: crates/access-core/src/services/route_guard.rs
// ============================================================================
//! Navigation gate.
//!
//! Each navigation is evaluated on its own against the current session
//! snapshot; the guard keeps no state between calls. Rule order for an
//! authenticated session:
//!
//! 1. authentication pages are always reachable
//! 2. public paths (home, dashboard, POS landing) are always reachable
//! 3. anything else must resolve to a module/submodule the session holds,
//!    through the route table first and the menu tree's URLs second
//!
//! A denial redirects and renders the fallback; it is never an error.

use std::sync::Arc;

use access_shared::config::GuardSettings;
use access_shared::utils::{has_path_prefix, mask_email, normalize_path};
use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::AccessCatalog;
use crate::domain::{RouteTarget, SessionState};
use crate::services::permission_store::PermissionStore;

/// Navigation side effect requested by the guard
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn redirect(&self, to: &str);
}

/// Why an authenticated navigation was allowed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowReason {
    AuthPage,
    PublicPath,
    AdminBypass,
    Permitted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GuardDecision {
    /// Session not resolved yet; no access decision is made
    Loading,
    Unauthenticated { redirect_to: Option<String> },
    Allowed { reason: AllowReason },
    Denied {
        redirect_to: String,
        target: Option<RouteTarget>,
    },
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allowed { .. })
    }

    pub fn redirect_to(&self) -> Option<&str> {
        match self {
            GuardDecision::Unauthenticated { redirect_to } => redirect_to.as_deref(),
            GuardDecision::Denied { redirect_to, .. } => Some(redirect_to),
            _ => None,
        }
    }
}

/// Per-call options of [`RouteGuard::protect`]
#[derive(Debug, Clone, Default)]
pub struct ProtectOptions {
    /// Overrides the configured default redirect on denial
    pub redirect_to: Option<String>,
}

impl ProtectOptions {
    pub fn redirect_to(to: impl Into<String>) -> Self {
        Self {
            redirect_to: Some(to.into()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RouteGuard {
    settings: GuardSettings,
    catalog: Arc<AccessCatalog>,
}

impl RouteGuard {
    pub fn new(settings: GuardSettings, catalog: Arc<AccessCatalog>) -> Self {
        Self { settings, catalog }
    }

    pub fn is_auth_page(&self, path: &str) -> bool {
        has_path_prefix(path, &self.settings.auth_prefix)
    }

    pub fn is_public_path(&self, path: &str) -> bool {
        let path = normalize_path(path);
        self.settings
            .public_paths
            .iter()
            .any(|public| normalize_path(public) == path)
    }

    /// Permission keys guarding `path`: route table first, menu URLs second.
    pub fn resolve_target(&self, path: &str) -> Option<RouteTarget> {
        if let Some(target) = self.catalog.routes.resolve(path) {
            return Some(target);
        }

        let menu = &self.catalog.menu;
        let node = menu.node(menu.find_by_url(path)?);
        Some(match &node.parent_key {
            Some(parent_key) => RouteTarget {
                module_key: parent_key.clone(),
                sub_module_key: Some(node.key.clone()),
            },
            None => RouteTarget {
                module_key: node.key.clone(),
                sub_module_key: None,
            },
        })
    }

    /// Rules 1 to 3 for an already authenticated permission set
    fn evaluate(&self, store: &PermissionStore<'_>, path: &str) -> Result<AllowReason, Option<RouteTarget>> {
        if self.is_auth_page(path) {
            return Ok(AllowReason::AuthPage);
        }
        if self.is_public_path(path) {
            return Ok(AllowReason::PublicPath);
        }
        if store.is_admin() {
            return Ok(AllowReason::AdminBypass);
        }

        match self.resolve_target(path) {
            Some(target) if store.allows(&target.module_key, target.sub_module_key.as_deref()) => {
                Ok(AllowReason::Permitted)
            }
            target => Err(target),
        }
    }

    /// Boolean form of the rule set; false while loading or signed out.
    pub fn can_access(&self, state: &SessionState, path: &str) -> bool {
        match state {
            SessionState::Authenticated(_) => {
                self.evaluate(&PermissionStore::for_state(state), path).is_ok()
            }
            _ => false,
        }
    }

    pub fn decide(&self, state: &SessionState, path: &str) -> GuardDecision {
        self.decide_with(state, path, &ProtectOptions::default())
    }

    pub fn decide_with(
        &self,
        state: &SessionState,
        path: &str,
        options: &ProtectOptions,
    ) -> GuardDecision {
        let session = match state {
            SessionState::Loading => return GuardDecision::Loading,
            SessionState::Unauthenticated => {
                return GuardDecision::Unauthenticated {
                    redirect_to: self.settings.unauthenticated_redirect.clone(),
                }
            }
            SessionState::Authenticated(session) => session,
        };

        match self.evaluate(&PermissionStore::for_state(state), path) {
            Ok(reason) => {
                debug!(path, ?reason, role = %session.role, "Route allowed");
                GuardDecision::Allowed { reason }
            }
            Err(target) => {
                let redirect_to = options
                    .redirect_to
                    .clone()
                    .unwrap_or_else(|| self.settings.default_redirect.clone());
                warn!(
                    path,
                    role = %session.role,
                    user = %mask_email(&session.user.email),
                    module = target.as_ref().map(|t| t.module_key.as_str()).unwrap_or("-"),
                    sub_module = target
                        .as_ref()
                        .and_then(|t| t.sub_module_key.as_deref())
                        .unwrap_or("-"),
                    redirect_to = %redirect_to,
                    "Route access denied"
                );
                GuardDecision::Denied {
                    redirect_to,
                    target,
                }
            }
        }
    }

    /// Render `children` only when the navigation is allowed. Every other
    /// outcome renders `fallback`; a denial also asks `navigator` to redirect.
    pub fn protect<T>(
        &self,
        state: &SessionState,
        path: &str,
        options: &ProtectOptions,
        children: impl FnOnce() -> T,
        fallback: impl FnOnce() -> T,
        navigator: &dyn Navigator,
    ) -> T {
        match self.decide_with(state, path, options) {
            GuardDecision::Allowed { .. } => children(),
            GuardDecision::Loading => fallback(),
            GuardDecision::Unauthenticated { redirect_to } => {
                if let Some(to) = redirect_to {
                    navigator.redirect(&to);
                }
                fallback()
            }
            GuardDecision::Denied { redirect_to, .. } => {
                navigator.redirect(&redirect_to);
                fallback()
            }
        }
    }
}
