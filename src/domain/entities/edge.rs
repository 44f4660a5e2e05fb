//! Edge entity - a directed reference from one unit to another

use std::fmt;

use crate::domain::value_objects::{SourceLocation, UnitId};

/// Where an edge points.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EdgeTarget {
    /// A unit of the analysed project
    Unit(UnitId),
    /// Sentinel for references that cannot be resolved statically
    Unknown,
}

impl EdgeTarget {
    pub fn unit(&self) -> Option<&UnitId> {
        match self {
            EdgeTarget::Unit(id) => Some(id),
            EdgeTarget::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, EdgeTarget::Unknown)
    }
}

impl fmt::Display for EdgeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeTarget::Unit(id) => write!(f, "{}", id),
            EdgeTarget::Unknown => f.write_str("<unknown>"),
        }
    }
}

/// One reference site. Derived from source, read-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: UnitId,
    pub target: EdgeTarget,
    /// Referenced symbol within the target, if any
    pub symbol: Option<String>,
    /// The reference as written after resolution (`apps.log.services.log_action`)
    pub reference: String,
    pub location: SourceLocation,
}

impl Edge {
    pub fn new(
        source: UnitId,
        target: EdgeTarget,
        symbol: Option<String>,
        reference: impl Into<String>,
        location: SourceLocation,
    ) -> Self {
        Self {
            source,
            target,
            symbol,
            reference: reference.into(),
            location,
        }
    }

    /// Self-references never become edges
    pub fn is_self_reference(&self) -> bool {
        self.target.unit() == Some(&self.source)
    }

    /// Total order used everywhere edges or violations are listed
    #[allow(clippy::type_complexity)]
    pub fn sort_key(
        &self,
    ) -> (
        &SourceLocation,
        &str,
        &EdgeTarget,
        &UnitId,
        Option<&str>,
    ) {
        (
            &self.location,
            self.reference.as_str(),
            &self.target,
            &self.source,
            self.symbol.as_deref(),
        )
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.reference)
    }
}
