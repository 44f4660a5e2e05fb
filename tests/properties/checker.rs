//! Property tests for the violation checker.

use proptest::prelude::*;

use layerguard::domain::entities::{Edge, EdgeTarget, Unit};
use layerguard::domain::policies::{PolicyRule, PolicyTable};
use layerguard::domain::services::{check, CheckOptions};
use layerguard::domain::value_objects::{Layer, Scope, SourceLocation, UnitId};

const DOMAINS: [&str; 3] = ["user", "log", "notification"];

/// One unit per (domain, checked layer)
fn units() -> Vec<Unit> {
    DOMAINS
        .iter()
        .flat_map(|domain| {
            Layer::CHECKED.into_iter().map(move |layer| {
                Unit::new(
                    UnitId::new(format!("apps.{}.{}", domain, layer.as_str())),
                    format!("apps/{}/{}.py", domain, layer.as_str()),
                    Some(domain.to_string()),
                    layer,
                )
            })
        })
        .collect()
}

fn scope() -> impl Strategy<Value = Scope> {
    prop_oneof![
        Just(Scope::SameDomain),
        Just(Scope::CrossDomain),
        Just(Scope::Any)
    ]
}

/// At most one rule per layer pair, so the table always builds
fn policy() -> impl Strategy<Value = PolicyTable> {
    let pairs = Layer::CHECKED.len() * Layer::CHECKED.len();
    proptest::collection::vec(proptest::option::of(scope()), pairs).prop_map(|cells| {
        let rules = cells.into_iter().enumerate().filter_map(|(i, scope)| {
            let from = Layer::CHECKED[i / Layer::CHECKED.len()];
            let to = Layer::CHECKED[i % Layer::CHECKED.len()];
            scope.map(|scope| PolicyRule::new(from, to, scope))
        });
        PolicyTable::from_rules(rules).unwrap()
    })
}

/// Edges between random units; the line number keeps each edge distinct
fn edges(unit_count: usize) -> impl Strategy<Value = Vec<Edge>> {
    proptest::collection::vec((0..unit_count, 0..unit_count), 0..40).prop_map(move |pairs| {
        let units = units();
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (from, to))| {
                let source = &units[from];
                let target = &units[to];
                Edge::new(
                    source.id.clone(),
                    EdgeTarget::Unit(target.id.clone()),
                    Some("f".to_string()),
                    format!("{}.f", target.id),
                    SourceLocation::new(source.path.clone(), i + 1, 1),
                )
            })
            .collect()
    })
}

fn unit_by_id<'a>(units: &'a [Unit], id: &UnitId) -> &'a Unit {
    units.iter().find(|u| &u.id == id).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the violation set does not depend on edge order.
    #[test]
    fn property_check_is_order_independent(
        policy in policy(),
        (edges, shuffled) in edges(DOMAINS.len() * Layer::CHECKED.len())
            .prop_flat_map(|edges| (Just(edges.clone()), Just(edges).prop_shuffle())),
    ) {
        let units = units();
        let options = CheckOptions::default();

        let first = check(&units, &edges, &policy, &options);
        let second = check(&units, &shuffled, &policy, &options);
        let again = check(&units, &edges, &policy, &options);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &again);
    }

    /// PROPERTY: an edge some rule allows never yields a violation, and an
    /// edge no rule allows yields exactly one.
    #[test]
    fn property_allowed_edges_pass_denied_edges_fail_once(
        policy in policy(),
        edges in edges(DOMAINS.len() * Layer::CHECKED.len()),
    ) {
        let units = units();
        let outcome = check(&units, &edges, &policy, &CheckOptions::default());
        prop_assert_eq!(outcome.skipped, 0);

        for edge in &edges {
            let source = unit_by_id(&units, &edge.source);
            let target = unit_by_id(&units, edge.target.unit().unwrap());
            let allowed = policy
                .evaluate(source.layer, target.layer, source.same_domain(target))
                .is_allowed();

            let hits = outcome.violations.iter().filter(|v| &v.edge == edge).count();
            prop_assert_eq!(hits, if allowed { 0 } else { 1 }, "edge {:?}", edge);
        }
    }

    /// PROPERTY: an empty table denies every edge.
    #[test]
    fn property_empty_policy_denies_everything(
        edges in edges(DOMAINS.len() * Layer::CHECKED.len()),
    ) {
        let units = units();
        let policy = PolicyTable::from_rules(Vec::new()).unwrap();
        let outcome = check(&units, &edges, &policy, &CheckOptions::default());
        prop_assert_eq!(outcome.violations.len(), edges.len());
    }
}
