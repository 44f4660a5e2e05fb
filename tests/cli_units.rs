//! `layerguard units` shows classification and resolved edges.

mod common;

use common::*;

#[test]
fn units_text_lists_layers_by_domain() {
    let project = clean_project().with_file("apps/core/auth.py", "def current_user():\n    return None\n");
    let result = project.run(&["units", "--color", "never"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("apps.user.api"), "stdout:\n{}", result.stdout);
    assert!(result.stdout.contains("apps.core.auth"), "stdout:\n{}", result.stdout);
    assert!(result.stdout.contains("5 units"), "stdout:\n{}", result.stdout);
}

#[test]
fn units_json_records() {
    let project = clean_project().with_file("apps/core/auth.py", "def current_user():\n    return None\n");
    let result = project.run(&["units", "--format", "json"]);

    let units = result.events("unit");
    assert_eq!(units.len(), 5);
    let core = units
        .iter()
        .find(|u| u["unit"] == "apps.core.auth")
        .expect("core unit listed");
    assert_eq!(core["layer"], "core");
    assert_eq!(core["domain"], "core");
    assert_eq!(core["exports"][0], "current_user");

    assert!(result.events("edge").is_empty());
}

#[test]
fn units_edges_flag_adds_edge_records() {
    let project = clean_project();
    let result = project.run(&["units", "--format", "json", "--edges"]);

    let edges = result.events("edge");
    assert!(
        edges
            .iter()
            .any(|e| e["source"] == "apps.user.services" && e["target"] == "apps.log.services"),
        "edges: {:?}",
        edges
    );
}
