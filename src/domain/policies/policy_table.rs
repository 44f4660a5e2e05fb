//! Policy Table
//!
//! The interaction matrix: which layer may reference which, and in which
//! domain scope. The table is data loaded from configuration. Pairs it does
//! not list are denied.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Layer, Scope};
use crate::error::ConfigError;

/// An allowed (source layer → target layer, scope) combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PolicyRule {
    pub from: Layer,
    pub to: Layer,
    pub scope: Scope,
}

impl PolicyRule {
    pub fn new(from: Layer, to: Layer, scope: Scope) -> Self {
        Self { from, to, scope }
    }
}

impl std::fmt::Display for PolicyRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.scope)
    }
}

/// Result of evaluating one edge against the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed(PolicyRule),
    /// No rule for the layer pair
    NoRule,
    /// A rule exists for the pair but its scope excludes this edge
    OutOfScope(PolicyRule),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed(_))
    }
}

/// Closed set of policy rules, at most one per (source, target) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyTable {
    rules: BTreeMap<(Layer, Layer), PolicyRule>,
}

impl PolicyTable {
    /// Build the table, rejecting overlapping or uncheckable rules.
    ///
    /// Two rules for the same pair are a conflict even when their scopes
    /// differ; a pair maps to exactly one scope.
    pub fn from_rules(rules: impl IntoIterator<Item = PolicyRule>) -> Result<Self, ConfigError> {
        let mut table: BTreeMap<(Layer, Layer), (usize, PolicyRule)> = BTreeMap::new();

        for (index, rule) in rules.into_iter().enumerate() {
            let position = index + 1;
            if !rule.from.is_checked() || !rule.to.is_checked() {
                return Err(ConfigError::UncheckedLayer {
                    context: format!("policy rule #{} ({})", position, rule),
                });
            }
            if let Some((first_index, first)) = table.get(&(rule.from, rule.to)) {
                return Err(ConfigError::ConflictingRules {
                    from: rule.from,
                    to: rule.to,
                    first: first.scope,
                    first_index: *first_index,
                    second: rule.scope,
                    second_index: position,
                });
            }
            table.insert((rule.from, rule.to), (position, rule));
        }

        Ok(Self {
            rules: table
                .into_iter()
                .map(|(key, (_, rule))| (key, rule))
                .collect(),
        })
    }

    pub fn rule_for(&self, from: Layer, to: Layer) -> Option<&PolicyRule> {
        self.rules.get(&(from, to))
    }

    pub fn evaluate(&self, from: Layer, to: Layer, same_domain: bool) -> Decision {
        match self.rule_for(from, to) {
            None => Decision::NoRule,
            Some(rule) if rule.scope.admits(same_domain) => Decision::Allowed(*rule),
            Some(rule) => Decision::OutOfScope(*rule),
        }
    }

    /// Rules in (source, target) order
    pub fn rules(&self) -> impl Iterator<Item = &PolicyRule> {
        self.rules.values()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Rules of the API → Service → Selector → Model convention.
///
/// Every checked layer may reach the shared `core` package.
pub fn default_rules() -> Vec<PolicyRule> {
    use Layer::*;
    use Scope::*;

    let mut rules = vec![
        PolicyRule::new(Api, Service, SameDomain),
        PolicyRule::new(Api, Selector, SameDomain),
        PolicyRule::new(Service, Selector, SameDomain),
        PolicyRule::new(Service, Service, CrossDomain),
        PolicyRule::new(Selector, Model, SameDomain),
    ];
    rules.extend(
        [Api, Service, Selector, Model, Core]
            .into_iter()
            .map(|from| PolicyRule::new(from, Core, Any)),
    );
    rules
}
