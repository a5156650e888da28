// ============================================================================
// Access Core - Role
// File: crates/access-core/src/domain/role.rs
// Description: Fixed staff role enumeration carried by a session
// ============================================================================

use serde::{Deserialize, Serialize};

/// Staff role enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    SuperAdmin,
    Admin,
    Manager,
    Supervisor,
    Cashier,
    Waiter,
    Staff,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::SuperAdmin,
        Role::Admin,
        Role::Manager,
        Role::Supervisor,
        Role::Cashier,
        Role::Waiter,
        Role::Staff,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super-admin",
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Supervisor => "supervisor",
            Role::Cashier => "cashier",
            Role::Waiter => "waiter",
            Role::Staff => "staff",
        }
    }

    /// Case-insensitive. The only separator variants accepted are those of
    /// `super-admin` (`super_admin`, `super admin`, `superadmin`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "super-admin" | "super_admin" | "super admin" | "superadmin" => Some(Role::SuperAdmin),
            "admin" => Some(Role::Admin),
            "manager" => Some(Role::Manager),
            "supervisor" => Some(Role::Supervisor),
            "cashier" => Some(Role::Cashier),
            "waiter" => Some(Role::Waiter),
            "staff" => Some(Role::Staff),
            _ => None,
        }
    }

    /// Admin roles skip every per-module check.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::SuperAdmin | Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
