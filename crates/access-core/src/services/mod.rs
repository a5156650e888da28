//! Access decisions made against a session snapshot

pub mod permission_store;
pub mod menu_filter;
pub mod route_guard;
pub mod pos_filter;
pub mod session_store;
pub mod access_context;

pub use permission_store::PermissionStore;
pub use route_guard::{AllowReason, GuardDecision, Navigator, ProtectOptions, RouteGuard};
pub use session_store::SessionStore;
pub use access_context::AccessContext;
