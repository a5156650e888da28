// ============================================================================
// Access Core - Menu Tree
// File: crates/access-core/src/domain/menu_item.rs
// Description: Static navigation definition stored as an arena indexed by key
// ============================================================================

use std::collections::HashMap;

use access_shared::utils::normalize_path;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainError;

/// Menu item definition, as authored in the static catalog. Also the shape of
/// the pruned tree handed back to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDef {
    #[validate(length(min = 1, max = 64, message = "Menu key must be between 1 and 64 characters"))]
    pub key: String,

    #[validate(length(min = 1, max = 100, message = "Menu label must be between 1 and 100 characters"))]
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255, message = "Menu URL must be between 1 and 255 characters"))]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_key: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItemDef>,
}

impl MenuItemDef {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            url: None,
            parent_key: None,
            children: Vec::new(),
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn parent(mut self, parent_key: impl Into<String>) -> Self {
        self.parent_key = Some(parent_key.into());
        self
    }

    /// Nest `children` under this item, stamping their `parent_key`.
    pub fn children(mut self, children: Vec<MenuItemDef>) -> Self {
        let key = self.key.clone();
        self.children = children
            .into_iter()
            .map(|child| child.parent(key.clone()))
            .collect();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    pub key: String,
    pub label: String,
    pub url: Option<String>,
    /// Permission parent. `None` means the item is checked as a module.
    pub parent_key: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl MenuNode {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena of menu nodes. Nodes refer to each other by [`NodeId`] only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuTree {
    nodes: Vec<MenuNode>,
    roots: Vec<NodeId>,
    index: HashMap<String, NodeId>,
    by_url: HashMap<String, NodeId>,
}

impl MenuTree {
    /// Build from nested definitions. A child that declares a `parent_key` must
    /// name the item it is nested under.
    pub fn from_nested(items: Vec<MenuItemDef>) -> Result<Self, DomainError> {
        let mut tree = Self::default();
        for item in items {
            let id = tree.insert_nested(item, None)?;
            tree.roots.push(id);
        }
        Ok(tree)
    }

    /// Build from a flat list linked through `parent_key`. Declaration order is
    /// sibling order.
    pub fn from_flat(items: Vec<MenuItemDef>) -> Result<Self, DomainError> {
        let mut tree = Self::default();
        for item in items {
            if !item.children.is_empty() {
                return Err(DomainError::ValidationError(format!(
                    "Flat menu item {} must not carry nested children",
                    item.key
                )));
            }
            tree.push_node(item, None)?;
        }

        for idx in 0..tree.nodes.len() {
            let id = NodeId(idx);
            match tree.nodes[idx].parent_key.clone() {
                None => tree.roots.push(id),
                Some(parent_key) => {
                    let parent = *tree.index.get(&parent_key).ok_or_else(|| {
                        DomainError::UnknownParent {
                            key: tree.nodes[idx].key.clone(),
                            parent: parent_key.clone(),
                        }
                    })?;
                    tree.nodes[idx].parent = Some(parent);
                    tree.nodes[parent.0].children.push(id);
                }
            }
        }

        // Every parent exists, so anything unreachable from a root sits on a cycle
        let mut reachable = vec![false; tree.nodes.len()];
        let mut stack: Vec<NodeId> = tree.roots.clone();
        while let Some(id) = stack.pop() {
            reachable[id.0] = true;
            stack.extend(tree.nodes[id.0].children.iter().copied());
        }
        if let Some(idx) = reachable.iter().position(|seen| !seen) {
            return Err(DomainError::MenuCycle(tree.nodes[idx].key.clone()));
        }

        Ok(tree)
    }

    /// Nested when any top-level item carries children, flat otherwise.
    pub fn from_definitions(items: Vec<MenuItemDef>) -> Result<Self, DomainError> {
        let nested = items.iter().any(|item| !item.children.is_empty());
        let linked = items.iter().any(|item| item.parent_key.is_some());
        if !nested && linked {
            Self::from_flat(items)
        } else {
            Self::from_nested(items)
        }
    }

    fn insert_nested(
        &mut self,
        mut item: MenuItemDef,
        parent: Option<NodeId>,
    ) -> Result<NodeId, DomainError> {
        let actual_parent_key = parent.map(|p| self.nodes[p.0].key.clone());
        if let Some(declared) = &item.parent_key {
            if actual_parent_key.as_ref() != Some(declared) {
                return Err(DomainError::ParentKeyMismatch {
                    key: item.key.clone(),
                    declared: declared.clone(),
                    actual: actual_parent_key.unwrap_or_else(|| "<top level>".to_string()),
                });
            }
        }

        let children = std::mem::take(&mut item.children);
        let id = self.push_node(item, parent)?;
        for child in children {
            let child_id = self.insert_nested(child, Some(id))?;
            self.nodes[id.0].children.push(child_id);
        }
        Ok(id)
    }

    fn push_node(&mut self, item: MenuItemDef, parent: Option<NodeId>) -> Result<NodeId, DomainError> {
        item.validate()?;
        if self.index.contains_key(&item.key) {
            return Err(DomainError::DuplicateMenuKey(item.key));
        }

        let id = NodeId(self.nodes.len());
        if let Some(url) = &item.url {
            self.by_url.entry(normalize_path(url)).or_insert(id);
        }
        self.index.insert(item.key.clone(), id);
        self.nodes.push(MenuNode {
            key: item.key,
            label: item.label,
            url: item.url,
            parent_key: item.parent_key,
            parent,
            children: Vec::new(),
        });
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node(&self, id: NodeId) -> &MenuNode {
        &self.nodes[id.0]
    }

    pub fn get(&self, key: &str) -> Option<NodeId> {
        self.index.get(key).copied()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Structural ancestors, nearest first
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = self.nodes[id.0].parent;
        while let Some(parent) = current {
            out.push(parent);
            current = self.nodes[parent.0].parent;
        }
        out
    }

    /// Reverse lookup from a navigation path to the item that links to it
    pub fn find_by_url(&self, path: &str) -> Option<NodeId> {
        self.by_url.get(&normalize_path(path)).copied()
    }

    /// Rebuild the nested definition rooted at `id`, keeping every descendant.
    pub fn to_definition(&self, id: NodeId) -> MenuItemDef {
        let node = self.node(id);
        MenuItemDef {
            key: node.key.clone(),
            label: node.label.clone(),
            url: node.url.clone(),
            parent_key: node.parent_key.clone(),
            children: node
                .children
                .iter()
                .map(|child| self.to_definition(*child))
                .collect(),
        }
    }

    pub fn to_definitions(&self) -> Vec<MenuItemDef> {
        self.roots.iter().map(|id| self.to_definition(*id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sales_tree() -> Vec<MenuItemDef> {
        vec![
            MenuItemDef::new("dashboard", "Dashboard").url("/dashboard"),
            MenuItemDef::new("sales", "Sales").children(vec![
                MenuItemDef::new("pos", "POS").url("/sales/pos"),
                MenuItemDef::new("invoice", "Invoice").url("/sales/invoice"),
            ]),
        ]
    }

    #[test]
    fn test_nested_build_preserves_order() {
        let tree = MenuTree::from_nested(sales_tree()).unwrap();
        assert_eq!(tree.len(), 4);
        let sales = tree.get("sales").unwrap();
        let keys: Vec<&str> = tree
            .children(sales)
            .iter()
            .map(|id| tree.node(*id).key.as_str())
            .collect();
        assert_eq!(keys, vec!["pos", "invoice"]);
        assert_eq!(tree.node(tree.get("pos").unwrap()).parent_key.as_deref(), Some("sales"));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let items = vec![
            MenuItemDef::new("sales", "Sales"),
            MenuItemDef::new("x", "X").children(vec![MenuItemDef::new("sales", "Again")]),
        ];
        assert!(matches!(
            MenuTree::from_nested(items),
            Err(DomainError::DuplicateMenuKey(k)) if k == "sales"
        ));
    }

    #[test]
    fn test_parent_key_mismatch_rejected() {
        let mut sales = MenuItemDef::new("sales", "Sales");
        sales.children.push(MenuItemDef::new("pos", "POS").parent("reports"));
        assert!(matches!(
            MenuTree::from_nested(vec![sales]),
            Err(DomainError::ParentKeyMismatch { .. })
        ));
    }

    #[test]
    fn test_flat_build_links_parents() {
        let items = vec![
            MenuItemDef::new("pos", "POS").parent("sales").url("/sales/pos"),
            MenuItemDef::new("sales", "Sales"),
            MenuItemDef::new("invoice", "Invoice").parent("sales"),
        ];
        let tree = MenuTree::from_flat(items).unwrap();
        assert_eq!(tree.roots().len(), 1);
        let sales = tree.get("sales").unwrap();
        assert_eq!(tree.children(sales).len(), 2);
        assert_eq!(tree.ancestors(tree.get("pos").unwrap()), vec![sales]);
    }

    #[test]
    fn test_flat_unknown_parent_rejected() {
        let items = vec![MenuItemDef::new("pos", "POS").parent("sales")];
        assert!(matches!(
            MenuTree::from_flat(items),
            Err(DomainError::UnknownParent { .. })
        ));
    }

    #[test]
    fn test_flat_cycle_rejected() {
        let items = vec![
            MenuItemDef::new("a", "A").parent("b"),
            MenuItemDef::new("b", "B").parent("a"),
            MenuItemDef::new("root", "Root"),
        ];
        assert!(matches!(MenuTree::from_flat(items), Err(DomainError::MenuCycle(_))));
    }

    #[test]
    fn test_invalid_item_rejected() {
        let items = vec![MenuItemDef::new("", "Nameless")];
        assert!(matches!(
            MenuTree::from_nested(items),
            Err(DomainError::ValidationError(_))
        ));
    }

    #[test]
    fn test_find_by_url_normalizes() {
        let tree = MenuTree::from_nested(sales_tree()).unwrap();
        let found = tree.find_by_url("/sales/invoice/?page=2").unwrap();
        assert_eq!(tree.node(found).key, "invoice");
        assert!(tree.find_by_url("/sales").is_none());
    }

    #[test]
    fn test_from_definitions_round_trip() {
        let defs = sales_tree();
        let tree = MenuTree::from_definitions(defs.clone()).unwrap();
        assert_eq!(tree.to_definitions(), defs);
    }
}
