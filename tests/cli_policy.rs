//! `layerguard policy` renders the interaction matrix.

mod common;

use common::*;

#[test]
fn policy_shows_default_matrix() {
    let project = TestProject::new();
    let result = project.run(&["policy", "--color", "never"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("built-in defaults"));
    assert!(result.stdout.contains("10 rules; unlisted pairs are denied"));
}

#[test]
fn policy_reflects_config_file() {
    let project = TestProject::new().with_file(
        "layerguard.toml",
        "[[policy]]\nfrom = \"api\"\nto = \"service\"\nscope = \"any\"\n",
    );
    let result = project.run(&["policy", "--color", "never"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("layerguard.toml"));
    assert!(result.stdout.contains("1 rule; unlisted pairs are denied"));
}

#[test]
fn policy_conflict_is_fatal() {
    let project = TestProject::new().with_file("layerguard.toml", CONFLICTING_POLICY_TOML);
    let result = project.run(&["policy"]);

    assert_eq!(result.exit_code, 2);
    assert!(result.stderr.contains("rule #1"), "stderr:\n{}", result.stderr);
}
