//! # Access Core
//!
//! Role-based access control for the restaurant back-office: the permission
//! matrix carried by a session, the menu filter, the route guard and the POS
//! option filter.

pub mod domain;
pub mod services;
pub mod ports;
pub mod catalog;
pub mod error;

#[cfg(test)]
mod test_support;

// Re-export domain entities
pub use domain::*;
pub use catalog::AccessCatalog;
pub use error::DomainError;
pub use services::{AccessContext, GuardDecision, Navigator, PermissionStore, ProtectOptions, RouteGuard, SessionStore};
