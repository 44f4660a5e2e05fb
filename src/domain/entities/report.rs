//! Report entity - the output of one analysis run

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::entities::{Unit, Violation};
use crate::domain::value_objects::{display_path, Severity, UnitId};
use crate::error::ParseError;

/// A unit the convention could not place in a checked layer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnclassifiedUnit {
    pub path: PathBuf,
    pub id: UnitId,
    pub domain: Option<String>,
}

impl From<&Unit> for UnclassifiedUnit {
    fn from(unit: &Unit) -> Self {
        Self {
            path: unit.path.clone(),
            id: unit.id.clone(),
            domain: unit.domain.clone(),
        }
    }
}

impl UnclassifiedUnit {
    pub fn display_path(&self) -> String {
        display_path(&self.path)
    }
}

/// Pass/fail verdict for a report at a given threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No violations at all
    Pass,
    /// Violations exist but none reach the threshold
    PassWithWarnings,
    /// At least one violation reaches the threshold
    Fail,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Fail)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Pass => "pass",
            Outcome::PassWithWarnings => "warn",
            Outcome::Fail => "fail",
        }
    }
}

/// Analysis results: violations plus everything that could not be checked.
///
/// All lists are kept sorted so that rendering is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub units: usize,
    pub edges: usize,
    /// Edges with an unclassified endpoint, excluded from checks
    pub skipped_edges: usize,
    pub violations: Vec<Violation>,
    pub unclassified: Vec<UnclassifiedUnit>,
    pub parse_errors: Vec<ParseError>,
}

impl Report {
    pub fn new(
        units: usize,
        edges: usize,
        skipped_edges: usize,
        mut violations: Vec<Violation>,
        mut unclassified: Vec<UnclassifiedUnit>,
        mut parse_errors: Vec<ParseError>,
    ) -> Self {
        violations.sort_by(|a, b| a.edge.sort_key().cmp(&b.edge.sort_key()));
        unclassified.sort_by_key(|u| u.display_path());
        parse_errors.sort_by(|a, b| {
            display_path(&a.file)
                .cmp(&display_path(&b.file))
                .then(a.line.cmp(&b.line))
        });
        Self {
            units,
            edges,
            skipped_edges,
            violations,
            unclassified,
            parse_errors,
        }
    }

    pub fn errors(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warnings(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .count()
    }

    /// Violations grouped by the source unit's domain, each group in report order
    pub fn by_domain(&self) -> BTreeMap<&str, Vec<&Violation>> {
        let mut groups: BTreeMap<&str, Vec<&Violation>> = BTreeMap::new();
        for violation in &self.violations {
            groups.entry(violation.group()).or_default().push(violation);
        }
        groups
    }

    pub fn outcome(&self, threshold: Severity) -> Outcome {
        if self.violations.is_empty() {
            Outcome::Pass
        } else if self
            .violations
            .iter()
            .any(|v| v.severity.reaches(threshold))
        {
            Outcome::Fail
        } else {
            Outcome::PassWithWarnings
        }
    }

    /// Zero violations and nothing left unchecked
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty() && self.unclassified.is_empty() && self.parse_errors.is_empty()
    }
}
