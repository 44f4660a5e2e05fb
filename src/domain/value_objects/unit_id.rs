//! Unit identifier value object - a dotted Python module path

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Dotted module path identifying a source unit (`apps.user.services`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(String);

impl UnitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive a module id from a path relative to its module root.
    ///
    /// `apps/user/services.py` → `apps.user.services`;
    /// `apps/user/__init__.py` → `apps.user`.
    /// Returns `None` for a root-level `__init__.py`, which names no module.
    pub fn from_module_path(relative: &Path) -> Option<Self> {
        let mut parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        let file = parts.pop()?;
        let stem = match file.rsplit_once('.') {
            Some((stem, _ext)) => stem.to_string(),
            None => file,
        };
        if stem != "__init__" {
            parts.push(stem);
        }
        if parts.is_empty() {
            return None;
        }
        Some(Self(parts.join(".")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First dotted component (the top-level package)
    pub fn top_level(&self) -> &str {
        self.0.split('.').next().unwrap_or(self.0.as_str())
    }

    /// Enclosing package (`apps.user.services` → `apps.user`)
    pub fn parent(&self) -> Option<UnitId> {
        self.0
            .rsplit_once('.')
            .map(|(parent, _)| UnitId(parent.to_string()))
    }

    /// Append a dotted child (`apps.user` + `services`)
    pub fn child(&self, name: &str) -> UnitId {
        if self.0.is_empty() {
            UnitId(name.to_string())
        } else {
            UnitId(format!("{}.{}", self.0, name))
        }
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UnitId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
