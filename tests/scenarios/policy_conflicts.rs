//! Scenario D: duplicate (service, selector) rules abort the run before any
//! edge is checked.

use std::path::Path;

use layerguard::config::Config;
use layerguard::domain::policies::PolicyRule;
use layerguard::domain::value_objects::{Layer, Scope};
use layerguard::error::{ConfigError, LayerGuardError};
use layerguard::infrastructure::{MemorySourceTree, PythonExtractor};
use layerguard::CheckUseCase;

const DUPLICATE_RULES: &str = r#"
[[policy]]
from = "service"
to = "selector"
scope = "same-domain"

[[policy]]
from = "service"
to = "selector"
scope = "same-domain"
"#;

#[test]
fn scenario_d_duplicate_rules_are_a_config_error() {
    let config = Config::from_toml_str(DUPLICATE_RULES, Path::new("layerguard.toml")).unwrap();
    let err = config.policy_table().unwrap_err();

    assert_eq!(
        err,
        ConfigError::ConflictingRules {
            from: Layer::Service,
            to: Layer::Selector,
            first: Scope::SameDomain,
            first_index: 1,
            second: Scope::SameDomain,
            second_index: 2,
        }
    );
}

#[test]
fn scenario_d_check_reports_no_violations() {
    let mut config = Config::default();
    config
        .policy
        .push(PolicyRule::new(Layer::Service, Layer::Selector, Scope::Any));

    let tree = MemorySourceTree::new()
        .with_file("apps/user/selectors.py", "from .services import f\nf()\n")
        .with_file("apps/user/services.py", "def f():\n    pass\n");

    let result = CheckUseCase::new(tree, PythonExtractor::new(), config).execute();
    match result {
        Err(LayerGuardError::Config(ConfigError::ConflictingRules { from, to, .. })) => {
            assert_eq!((from, to), (Layer::Service, Layer::Selector));
        }
        other => panic!("expected a conflicting-rules error, got {:?}", other),
    }
}
