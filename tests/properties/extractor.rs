//! Property tests for the Python reference extractor.

use std::path::Path;

use proptest::prelude::*;

use layerguard::domain::ports::ReferenceExtractor;
use layerguard::infrastructure::PythonExtractor;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: extraction never panics, whatever the input.
    #[test]
    fn property_extract_never_panics(source in "\\PC{0,200}") {
        let _ = PythonExtractor::new().extract(Path::new("apps/user/api.py"), &source);
    }

    /// PROPERTY: every imported name that is never used still yields a
    /// reference, and references come out sorted by position.
    #[test]
    fn property_unused_imports_are_references(
        names in proptest::collection::btree_set("fn_[a-z]{2,6}", 1..6),
    ) {
        let source: String = names
            .iter()
            .map(|name| format!("from apps.log.services import {}\n", name))
            .collect();

        let extraction = PythonExtractor::new()
            .extract(Path::new("apps/user/services.py"), &source)
            .unwrap();
        prop_assert_eq!(extraction.references.len(), names.len());

        let positions: Vec<(usize, usize)> =
            extraction.references.iter().map(|r| r.position()).collect();
        let mut sorted = positions.clone();
        sorted.sort();
        prop_assert_eq!(sorted, positions);
    }
}
