// ============================================================================
// Access Core - Route Table
// File: crates/access-core/src/domain/route_table.rs
// Description: Maps navigation paths to the module/submodule they require
// ============================================================================

use access_shared::utils::path_segments;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainError;

/// One routing rule. `pattern` is segment based; `[id]` style segments match
/// any single segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RouteRule {
    #[validate(length(min = 1, max = 255, message = "Route pattern must be between 1 and 255 characters"))]
    pub pattern: String,

    #[validate(length(min = 1, max = 64, message = "Module key must be between 1 and 64 characters"))]
    pub module_key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_module_key: Option<String>,
}

impl RouteRule {
    pub fn module(pattern: impl Into<String>, module_key: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            module_key: module_key.into(),
            sub_module_key: None,
        }
    }

    pub fn sub_module(
        pattern: impl Into<String>,
        module_key: impl Into<String>,
        sub_module_key: impl Into<String>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            module_key: module_key.into(),
            sub_module_key: Some(sub_module_key.into()),
        }
    }
}

/// Permission keys a path resolves to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteTarget {
    pub module_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_module_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param,
}

#[derive(Debug, Clone)]
struct CompiledRule {
    rule: RouteRule,
    segments: Vec<Segment>,
    literals: usize,
}

impl CompiledRule {
    fn compile(rule: RouteRule) -> Result<Self, DomainError> {
        rule.validate()?;
        if !rule.pattern.starts_with('/') {
            return Err(DomainError::InvalidRoutePattern {
                pattern: rule.pattern.clone(),
                reason: "must start with '/'".to_string(),
            });
        }

        let mut segments = Vec::new();
        for raw in path_segments(&rule.pattern) {
            let segment = if raw.starts_with('[') && raw.ends_with(']') && raw.len() > 2 {
                Segment::Param
            } else if raw.contains('[') || raw.contains(']') {
                return Err(DomainError::InvalidRoutePattern {
                    pattern: rule.pattern.clone(),
                    reason: format!("malformed parameter segment '{}'", raw),
                });
            } else {
                Segment::Literal(raw)
            };
            segments.push(segment);
        }
        let literals = segments
            .iter()
            .filter(|s| matches!(s, Segment::Literal(_)))
            .count();

        Ok(Self {
            rule,
            segments,
            literals,
        })
    }

    fn matches(&self, path: &[String]) -> bool {
        self.segments.len() <= path.len()
            && self.segments.iter().zip(path).all(|(segment, actual)| match segment {
                Segment::Literal(expected) => expected == actual,
                Segment::Param => true,
            })
    }
}

/// Ordered routing table. The most specific matching rule wins; ties go to the
/// rule declared first.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    rules: Vec<CompiledRule>,
}

impl RouteTable {
    pub fn new(rules: Vec<RouteRule>) -> Result<Self, DomainError> {
        let rules = rules
            .into_iter()
            .map(CompiledRule::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn resolve(&self, path: &str) -> Option<RouteTarget> {
        let segments = path_segments(path);
        let mut best: Option<&CompiledRule> = None;
        for candidate in self.rules.iter().filter(|r| r.matches(&segments)) {
            let better = match best {
                None => true,
                Some(current) => {
                    (candidate.segments.len(), candidate.literals)
                        > (current.segments.len(), current.literals)
                }
            };
            if better {
                best = Some(candidate);
            }
        }

        best.map(|compiled| RouteTarget {
            module_key: compiled.rule.module_key.clone(),
            sub_module_key: compiled.rule.sub_module_key.clone(),
        })
    }
}
