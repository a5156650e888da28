// ============================================================================
// Access Core - Access Record (Permission Matrix)
// File: crates/access-core/src/domain/access_record.rs
// Description: Per-module access flags attached to a session
// ============================================================================

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Module access flags. Only a literal JSON `true` grants anything; missing,
/// `null`, strings and numbers all deserialize as denied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRecord {
    #[serde(default, deserialize_with = "strict_flag")]
    pub checked: bool,

    /// Submodule flags; `None` marks a leaf permission
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "strict_children"
    )]
    pub children: Option<BTreeMap<String, bool>>,
}

fn strict_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value == Value::Bool(true))
}

fn strict_children<'de, D>(deserializer: D) -> Result<Option<BTreeMap<String, bool>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(Some(
            map.into_iter()
                .map(|(key, flag)| (key, flag == Value::Bool(true)))
                .collect(),
        )),
        _ => Ok(None),
    }
}

impl AccessRecord {
    pub fn leaf(checked: bool) -> Self {
        Self {
            checked,
            children: None,
        }
    }

    pub fn with_children<I, K>(checked: bool, children: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: Into<String>,
    {
        Self {
            checked,
            children: Some(children.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Stored submodule flag, ignoring the module gate
    pub fn child_flag(&self, sub_module_key: &str) -> bool {
        self.children
            .as_ref()
            .and_then(|children| children.get(sub_module_key))
            .copied()
            .unwrap_or(false)
    }

    pub fn any_child_granted(&self) -> bool {
        self.children
            .as_ref()
            .map(|children| children.values().any(|granted| *granted))
            .unwrap_or(false)
    }

    /// Submodule keys whose stored flag is `true`, in key order
    pub fn granted_children(&self) -> impl Iterator<Item = &str> {
        self.children
            .iter()
            .flat_map(|children| children.iter())
            .filter(|(_, granted)| **granted)
            .map(|(key, _)| key.as_str())
    }
}

/// Module key → access record, as delivered in the login payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuAccess(BTreeMap<String, AccessRecord>);

impl MenuAccess {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, module_key: &str) -> Option<&AccessRecord> {
        self.0.get(module_key)
    }

    pub fn insert(&mut self, module_key: impl Into<String>, record: AccessRecord) {
        self.0.insert(module_key.into(), record);
    }

    pub fn with(mut self, module_key: impl Into<String>, record: AccessRecord) -> Self {
        self.insert(module_key, record);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>> FromIterator<(K, AccessRecord)> for MenuAccess {
    fn from_iter<T: IntoIterator<Item = (K, AccessRecord)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_literal_true_grants() {
        let record: AccessRecord = serde_json::from_str(
            r#"{"checked": "yes", "children": {"vat": true, "sales": 1, "expense": "true", "stock": null}}"#,
        )
        .unwrap();
        assert!(!record.checked);
        assert!(record.child_flag("vat"));
        assert!(!record.child_flag("sales"));
        assert!(!record.child_flag("expense"));
        assert!(!record.child_flag("stock"));
    }

    #[test]
    fn test_missing_fields_default_to_denied_leaf() {
        let record: AccessRecord = serde_json::from_str("{}").unwrap();
        assert!(!record.checked);
        assert!(record.is_leaf());
    }

    #[test]
    fn test_malformed_children_become_leaf() {
        let record: AccessRecord =
            serde_json::from_str(r#"{"checked": true, "children": ["refund"]}"#).unwrap();
        assert!(record.checked);
        assert!(record.is_leaf());
        assert!(!record.child_flag("refund"));
    }

    #[test]
    fn test_any_child_granted() {
        let record = AccessRecord::with_children(false, [("vat", false), ("sales", true)]);
        assert!(record.any_child_granted());
        assert_eq!(record.granted_children().collect::<Vec<_>>(), vec!["sales"]);
        assert!(!AccessRecord::leaf(true).any_child_granted());
    }

    #[test]
    fn test_menu_access_transparent_json() {
        let access: MenuAccess = serde_json::from_str(
            r#"{"pos": {"checked": true, "children": {"refund": true}}, "reports": {"checked": false}}"#,
        )
        .unwrap();
        assert_eq!(access.len(), 2);
        assert!(access.get("pos").unwrap().child_flag("refund"));
        assert!(access.get("inventory").is_none());
    }
}
