//! Unit entity - a classified source module

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::domain::value_objects::{Layer, UnitId};

/// A named source module with its owning domain and layer.
///
/// Created during classification; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub id: UnitId,
    /// Path relative to the project root
    pub path: PathBuf,
    pub domain: Option<String>,
    pub layer: Layer,
    /// `__init__` module of a package
    pub is_package: bool,
    /// Top-level names defined by the module
    pub exports: BTreeSet<String>,
}

impl Unit {
    pub fn new(id: UnitId, path: impl Into<PathBuf>, domain: Option<String>, layer: Layer) -> Self {
        let path = path.into();
        let is_package = path
            .file_stem()
            .map(|stem| stem == "__init__")
            .unwrap_or(false);
        Self {
            id,
            path,
            domain,
            layer,
            is_package,
            exports: BTreeSet::new(),
        }
    }

    pub fn with_exports(mut self, exports: BTreeSet<String>) -> Self {
        self.exports = exports;
        self
    }

    /// Units tagged `other` are reported as unclassified
    pub fn is_classified(&self) -> bool {
        self.layer.is_checked()
    }

    /// The package relative imports in this unit are resolved against
    pub fn package(&self) -> Option<UnitId> {
        if self.is_package {
            Some(self.id.clone())
        } else {
            self.id.parent()
        }
    }

    /// Returns true when both units belong to the same named domain
    pub fn same_domain(&self, other: &Unit) -> bool {
        match (&self.domain, &other.domain) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
