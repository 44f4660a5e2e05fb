//! Scenario: calls between layers and domains
//!
//! A: user/services.py calls log/services.py -> allowed
//! B: user/api.py calls log/selectors.py -> one violation
//! C: user/selectors.py calls user/services.py -> one violation

use layerguard::config::Config;
use layerguard::domain::entities::{Outcome, Report, ViolationKind};
use layerguard::domain::value_objects::{Layer, Severity};
use layerguard::infrastructure::{MemorySourceTree, PythonExtractor};
use layerguard::CheckUseCase;

fn run(tree: MemorySourceTree) -> Report {
    CheckUseCase::new(tree, PythonExtractor::new(), Config::default())
        .execute()
        .unwrap()
}

fn base() -> MemorySourceTree {
    MemorySourceTree::new()
        .with_file("apps/log/services.py", "def record_event(kind):\n    return kind\n")
        .with_file("apps/log/selectors.py", "def list_logs(user_id):\n    return []\n")
        .with_file("apps/user/services.py", "def register(email):\n    return email\n")
}

/// SCENARIO A: service to service across domains
#[test]
fn scenario_a_cross_domain_service_call_is_allowed() {
    let tree = base().with_file(
        "apps/user/services.py",
        "from apps.log.services import record_event\n\n\ndef register(email):\n    record_event('register')\n",
    );

    let report = run(tree);
    assert!(report.violations.is_empty(), "{:?}", report.violations);
    assert_eq!(report.edges, 1);
    assert_eq!(report.outcome(Severity::Error), Outcome::Pass);
    assert!(report.is_clean());
}

/// SCENARIO B: api reading another domain's selectors
#[test]
fn scenario_b_cross_domain_api_to_selector_is_one_violation() {
    let tree = base().with_file(
        "apps/user/api.py",
        "from apps.log import selectors\n\n\ndef get_logs(request):\n    return selectors.list_logs(request.user)\n",
    );

    let report = run(tree);
    assert_eq!(report.violations.len(), 1);

    let violation = &report.violations[0];
    assert_eq!(violation.kind, ViolationKind::ScopeMismatch);
    assert_eq!(violation.severity, Severity::Error);
    assert_eq!(violation.edge.source.as_str(), "apps.user.api");
    assert_eq!(violation.edge.reference, "apps.log.selectors.list_logs");
    assert_eq!(violation.edge.location.line, 5);
    assert_eq!(violation.source.layer, Layer::Api);
    assert_eq!(violation.target.as_ref().map(|t| t.layer), Some(Layer::Selector));
    assert_eq!(report.outcome(Severity::Error), Outcome::Fail);
}

/// SCENARIO C: selector reaching up into a service
#[test]
fn scenario_c_selector_to_service_is_one_violation() {
    let tree = base().with_file(
        "apps/user/selectors.py",
        "from .services import register\n\n\ndef lookup(email):\n    return register(email)\n",
    );

    let report = run(tree);
    assert_eq!(report.violations.len(), 1);

    let violation = &report.violations[0];
    assert_eq!(violation.kind, ViolationKind::NoRule);
    assert_eq!(violation.edge.source.as_str(), "apps.user.selectors");
    assert!(violation.nearest_rule.is_none());
}

/// Violations in several files come out sorted by location
#[test]
fn violations_are_sorted_by_location() {
    let tree = base()
        .with_file(
            "apps/user/selectors.py",
            "from .services import register\n\n\ndef lookup(email):\n    return register(email)\n",
        )
        .with_file(
            "apps/user/api.py",
            "from apps.log.selectors import list_logs\nfrom apps.log.services import record_event\n\nlist_logs(1)\nrecord_event(2)\n",
        );

    let report = run(tree);
    let locations: Vec<String> = report
        .violations
        .iter()
        .map(|v| v.edge.location.to_string())
        .collect();
    assert_eq!(
        locations,
        vec![
            "apps/user/api.py:4".to_string(),
            "apps/user/api.py:5".to_string(),
            "apps/user/selectors.py:5".to_string(),
        ]
    );
}

/// Everything may use core
#[test]
fn core_is_reachable_from_every_layer() {
    let tree = base()
        .with_file("apps/core/utils.py", "def now():\n    return 0\n")
        .with_file("apps/user/api.py", "from apps.core.utils import now\nnow()\n")
        .with_file("apps/log/models.py", "from apps.core import utils\nutils.now()\n");

    let report = run(tree);
    assert!(report.violations.is_empty(), "{:?}", report.violations);
    assert_eq!(report.edges, 2);
}
