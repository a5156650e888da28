//! # Access Core - Domain Module
//!
//! Session snapshot, permission matrix and the static catalogs the decisions
//! are made against.

pub mod role;
pub mod access_record;
pub mod session;
pub mod menu_item;
pub mod route_table;
pub mod pos_option;

// Re-export all entities and enums
pub use role::Role;
pub use access_record::{AccessRecord, MenuAccess};
pub use session::{Session, SessionPayload, SessionState, SessionUser};
pub use menu_item::{MenuItemDef, MenuNode, MenuTree, NodeId};
pub use route_table::{RouteRule, RouteTable, RouteTarget};
pub use pos_option::{PosCatalog, PosCategory, PosOption};
