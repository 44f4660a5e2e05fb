//! Scope value object - which domain relation a policy rule admits
//!
//! - `same-domain`: source and target live in the same domain
//! - `cross-domain`: source and target live in different domains
//! - `any`: either

use std::fmt;

use serde::{Deserialize, Serialize};

/// Domain scope of a policy rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    SameDomain,
    CrossDomain,
    Any,
}

impl Scope {
    /// Returns true if an edge with the given domain relation is admitted
    pub fn admits(&self, same_domain: bool) -> bool {
        match self {
            Scope::SameDomain => same_domain,
            Scope::CrossDomain => !same_domain,
            Scope::Any => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::SameDomain => "same-domain",
            Scope::CrossDomain => "cross-domain",
            Scope::Any => "any",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
