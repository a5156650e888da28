// ============================================================================
// Access Core - POS Option Catalog
// File: crates/access-core/src/domain/pos_option.rs
// Description: Point-of-sale action buttons gated by the POS module flags
// ============================================================================

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosCategory {
    Order,
    Payment,
    Adjustment,
    Cash,
}

impl PosCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosCategory::Order => "order",
            PosCategory::Payment => "payment",
            PosCategory::Adjustment => "adjustment",
            PosCategory::Cash => "cash",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PosOption {
    #[validate(length(min = 1, max = 64, message = "POS option key must be between 1 and 64 characters"))]
    pub key: String,

    #[validate(length(min = 1, max = 100, message = "POS option label must be between 1 and 100 characters"))]
    pub label: String,

    pub category: PosCategory,
}

impl PosOption {
    pub fn new(key: impl Into<String>, label: impl Into<String>, category: PosCategory) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            category,
        }
    }
}

/// Ordered, duplicate-free list of POS options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PosCatalog {
    options: Vec<PosOption>,
}

impl PosCatalog {
    pub fn new(options: Vec<PosOption>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for option in &options {
            option.validate()?;
            if !seen.insert(option.key.as_str()) {
                return Err(DomainError::DuplicatePosOption(option.key.clone()));
            }
        }
        Ok(Self { options })
    }

    pub fn iter(&self) -> impl Iterator<Item = &PosOption> {
        self.options.iter()
    }

    pub fn get(&self, key: &str) -> Option<&PosOption> {
        self.options.iter().find(|option| option.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_option_rejected() {
        let result = PosCatalog::new(vec![
            PosOption::new("refund", "Refund", PosCategory::Payment),
            PosOption::new("refund", "Refund again", PosCategory::Payment),
        ]);
        assert!(matches!(result, Err(DomainError::DuplicatePosOption(k)) if k == "refund"));
    }

    #[test]
    fn test_lookup_keeps_order() {
        let catalog = PosCatalog::new(vec![
            PosOption::new("void", "Void", PosCategory::Order),
            PosOption::new("discount", "Discount", PosCategory::Adjustment),
        ])
        .unwrap();
        let keys: Vec<&str> = catalog.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, vec!["void", "discount"]);
        assert_eq!(catalog.get("discount").unwrap().category, PosCategory::Adjustment);
        assert!(!catalog.contains("reprint"));
    }

    #[test]
    fn test_category_json() {
        let option: PosOption =
            serde_json::from_str(r#"{"key": "open-drawer", "label": "Open drawer", "category": "cash"}"#)
                .unwrap();
        assert_eq!(option.category.as_str(), "cash");
    }
}
