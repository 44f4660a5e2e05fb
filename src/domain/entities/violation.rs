//! Violation entity - an edge no policy rule admits

use std::fmt;

use serde::Serialize;

use crate::domain::entities::Edge;
use crate::domain::policies::PolicyRule;
use crate::domain::value_objects::{Layer, Severity};

/// Why an edge was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    /// No rule covers the (source layer, target layer) pair
    NoRule,
    /// A rule covers the pair but not the domain relation
    ScopeMismatch,
    /// The target could not be resolved statically
    UnresolvedTarget,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::NoRule => "no-rule",
            ViolationKind::ScopeMismatch => "scope-mismatch",
            ViolationKind::UnresolvedTarget => "unresolved-target",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One endpoint of a violating edge, as classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub layer: Layer,
    pub domain: Option<String>,
}

/// A policy finding. Returned as data, never raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub edge: Edge,
    pub kind: ViolationKind,
    pub severity: Severity,
    pub source: Endpoint,
    /// `None` for unresolved targets
    pub target: Option<Endpoint>,
    /// Rule that matched the layer pair but failed on scope
    pub nearest_rule: Option<PolicyRule>,
}

impl Violation {
    /// Human-readable explanation of the finding
    pub fn message(&self) -> String {
        match (&self.kind, &self.target) {
            (ViolationKind::UnresolvedTarget, _) => {
                format!("cannot resolve reference '{}' statically", self.edge.reference)
            }
            (ViolationKind::ScopeMismatch, Some(target)) => {
                let relation = if self.source.domain == target.domain {
                    "within the same domain"
                } else {
                    "across domains"
                };
                match &self.nearest_rule {
                    Some(rule) => format!(
                        "{} may reference {} only {} ({}); this reference is {}",
                        self.source.layer,
                        target.layer,
                        scope_phrase(rule),
                        rule.scope,
                        relation
                    ),
                    None => format!(
                        "{} may not reference {} {}",
                        self.source.layer, target.layer, relation
                    ),
                }
            }
            (_, Some(target)) => format!(
                "no rule permits {} -> {}",
                self.source.layer, target.layer
            ),
            (_, None) => format!("no rule permits {} -> <unknown>", self.source.layer),
        }
    }

    /// Domain the violation is grouped under in reports
    pub fn group(&self) -> &str {
        self.source.domain.as_deref().unwrap_or("(no domain)")
    }
}

fn scope_phrase(rule: &PolicyRule) -> &'static str {
    use crate::domain::value_objects::Scope;
    match rule.scope {
        Scope::SameDomain => "within its own domain",
        Scope::CrossDomain => "in other domains",
        Scope::Any => "in any domain",
    }
}
