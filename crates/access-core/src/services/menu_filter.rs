// ============================================================================
// Access Core - Menu Filter
// File: crates/access-core/src/services/menu_filter.rs
// ============================================================================
//! Prunes the static menu tree down to what a session may navigate to.
//!
//! Filtering only removes items. Siblings keep their source order, and an
//! item without direct access stays when any descendant (at any depth)
//! survives, so every ancestor of a reachable page remains navigable.

use crate::domain::{MenuItemDef, MenuNode, MenuTree, NodeId};
use crate::services::permission_store::PermissionStore;

/// Whether the item itself is permitted, ignoring its descendants.
/// Items without a `parent_key` are checked as modules.
pub fn item_permitted(node: &MenuNode, store: &PermissionStore<'_>) -> bool {
    match &node.parent_key {
        None => store.has_module_access(&node.key),
        Some(parent_key) => store.has_sub_module_access(parent_key, &node.key),
    }
}

/// Accessible copy of the whole tree. Admins get it unmodified.
pub fn accessible_menu_items(tree: &MenuTree, store: &PermissionStore<'_>) -> Vec<MenuItemDef> {
    if store.is_admin() {
        return tree.to_definitions();
    }
    tree.roots()
        .iter()
        .filter_map(|id| filter_node(tree, *id, store))
        .collect()
}

fn filter_node(tree: &MenuTree, id: NodeId, store: &PermissionStore<'_>) -> Option<MenuItemDef> {
    let node = tree.node(id);
    let children: Vec<MenuItemDef> = node
        .children()
        .iter()
        .filter_map(|child| filter_node(tree, *child, store))
        .collect();

    if !item_permitted(node, store) && children.is_empty() {
        return None;
    }

    Some(MenuItemDef {
        key: node.key.clone(),
        label: node.label.clone(),
        url: node.url.clone(),
        parent_key: node.parent_key.clone(),
        children,
    })
}

/// Keys of every item in the accessible tree, in depth-first order
pub fn accessible_keys(tree: &MenuTree, store: &PermissionStore<'_>) -> Vec<String> {
    fn collect(items: &[MenuItemDef], out: &mut Vec<String>) {
        for item in items {
            out.push(item.key.clone());
            collect(&item.children, out);
        }
    }

    let mut keys = Vec::new();
    collect(&accessible_menu_items(tree, store), &mut keys);
    keys
}
