//! Violation Checker
//!
//! Evaluates every edge against the policy table. A pure function of its
//! inputs: the same units, edges and policy always produce the same sorted
//! violations, whatever order the edges arrive in.

use crate::domain::entities::{Edge, EdgeTarget, Endpoint, Unit, Violation, ViolationKind};
use crate::domain::policies::{Decision, PolicyTable};
use crate::domain::value_objects::{Severity, UnitId};

use super::resolver::ModuleIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    /// Severity of edges whose target could not be resolved
    pub unresolved: Severity,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            unresolved: Severity::Warning,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    pub violations: Vec<Violation>,
    /// Edges with an unclassified or unknown endpoint unit
    pub skipped: usize,
}

pub fn check(
    units: &[Unit],
    edges: &[Edge],
    policy: &PolicyTable,
    options: &CheckOptions,
) -> CheckOutcome {
    let index = ModuleIndex::new(units);

    let mut outcome = CheckOutcome::default();
    for edge in edges {
        // Unresolved references are reported whatever the source layer is.
        if edge.target == EdgeTarget::Unknown {
            match lookup(&index, units, &edge.source) {
                Some(source) => outcome.violations.push(Violation {
                    edge: edge.clone(),
                    kind: ViolationKind::UnresolvedTarget,
                    severity: options.unresolved,
                    source: endpoint(source),
                    target: None,
                    nearest_rule: None,
                }),
                None => outcome.skipped += 1,
            }
            continue;
        }

        let Some(source) = classified(&index, units, &edge.source) else {
            outcome.skipped += 1;
            continue;
        };
        let EdgeTarget::Unit(target) = &edge.target else {
            continue;
        };
        let Some(target) = classified(&index, units, target) else {
            outcome.skipped += 1;
            continue;
        };

        let (kind, nearest_rule) =
            match policy.evaluate(source.layer, target.layer, source.same_domain(target)) {
                Decision::Allowed(_) => continue,
                Decision::NoRule => (ViolationKind::NoRule, None),
                Decision::OutOfScope(rule) => (ViolationKind::ScopeMismatch, Some(rule)),
            };
        outcome.violations.push(Violation {
            edge: edge.clone(),
            kind,
            severity: Severity::Error,
            source: endpoint(source),
            target: Some(endpoint(target)),
            nearest_rule,
        });
    }

    outcome
        .violations
        .sort_by(|a, b| a.edge.sort_key().cmp(&b.edge.sort_key()));
    outcome
}

fn lookup<'a>(index: &ModuleIndex, units: &'a [Unit], id: &UnitId) -> Option<&'a Unit> {
    index.position(id).map(|position| &units[position])
}

fn classified<'a>(index: &ModuleIndex, units: &'a [Unit], id: &UnitId) -> Option<&'a Unit> {
    lookup(index, units, id).filter(|unit| unit.is_classified())
}

fn endpoint(unit: &Unit) -> Endpoint {
    Endpoint {
        layer: unit.layer,
        domain: unit.domain.clone(),
    }
}
