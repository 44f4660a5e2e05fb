//! Record types of the machine-readable report.
//!
//! Records contain only project-relative paths and no timestamps, so two
//! runs over the same tree serialize byte-identically.

use serde::Serialize;

use layerguard::domain::entities::{Edge, Outcome, Report, UnclassifiedUnit, Unit, Violation};
use layerguard::domain::policies::PolicyRule;
use layerguard::domain::value_objects::{Layer, Severity};
use layerguard::error::ParseError;

/// A rejected edge
#[derive(Debug, Clone, Serialize)]
pub struct ViolationEvent<'a> {
    pub event: &'static str,
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub source: &'a str,
    pub source_layer: Layer,
    pub source_domain: Option<&'a str>,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_layer: Option<Layer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_domain: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<&'a str>,
    pub reference: &'a str,
    pub kind: &'static str,
    pub severity: Severity,
    /// Rule matching the layer pair, for scope mismatches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<PolicyRule>,
    pub message: String,
}

impl<'a> From<&'a Violation> for ViolationEvent<'a> {
    fn from(v: &'a Violation) -> Self {
        Self {
            event: "violation",
            file: v.edge.location.display_file(),
            line: v.edge.location.line,
            column: v.edge.location.column,
            source: v.edge.source.as_str(),
            source_layer: v.source.layer,
            source_domain: v.source.domain.as_deref(),
            target: v.edge.target.to_string(),
            target_layer: v.target.as_ref().map(|t| t.layer),
            target_domain: v.target.as_ref().and_then(|t| t.domain.as_deref()),
            symbol: v.edge.symbol.as_deref(),
            reference: &v.edge.reference,
            kind: v.kind.as_str(),
            severity: v.severity,
            rule: v.nearest_rule,
            message: v.message(),
        }
    }
}

/// A unit excluded from policy checks
#[derive(Debug, Clone, Serialize)]
pub struct UnclassifiedEvent<'a> {
    pub event: &'static str,
    pub file: String,
    pub unit: &'a str,
    pub domain: Option<&'a str>,
}

impl<'a> From<&'a UnclassifiedUnit> for UnclassifiedEvent<'a> {
    fn from(u: &'a UnclassifiedUnit) -> Self {
        Self {
            event: "unclassified",
            file: u.display_path(),
            unit: u.id.as_str(),
            domain: u.domain.as_deref(),
        }
    }
}

/// A unit that could not be parsed
#[derive(Debug, Clone, Serialize)]
pub struct ParseErrorEvent<'a> {
    pub event: &'static str,
    pub file: String,
    pub line: Option<usize>,
    pub message: &'a str,
}

impl<'a> From<&'a ParseError> for ParseErrorEvent<'a> {
    fn from(e: &'a ParseError) -> Self {
        Self {
            event: "parse_error",
            file: layerguard::domain::value_objects::display_path(&e.file),
            line: e.line,
            message: &e.message,
        }
    }
}

/// Final record of a check report
#[derive(Debug, Clone, Serialize)]
pub struct SummaryEvent {
    pub event: &'static str,
    pub outcome: &'static str,
    pub severity_threshold: Severity,
    pub units: usize,
    pub edges: usize,
    pub skipped_edges: usize,
    pub violations: usize,
    pub errors: usize,
    pub warnings: usize,
    pub unclassified: usize,
    pub parse_errors: usize,
}

impl SummaryEvent {
    pub fn new(report: &Report, threshold: Severity) -> Self {
        let outcome: Outcome = report.outcome(threshold);
        Self {
            event: "summary",
            outcome: outcome.as_str(),
            severity_threshold: threshold,
            units: report.units,
            edges: report.edges,
            skipped_edges: report.skipped_edges,
            violations: report.violations.len(),
            errors: report.errors(),
            warnings: report.warnings(),
            unclassified: report.unclassified.len(),
            parse_errors: report.parse_errors.len(),
        }
    }
}

/// A classified unit (`units` command)
#[derive(Debug, Clone, Serialize)]
pub struct UnitEvent<'a> {
    pub event: &'static str,
    pub unit: &'a str,
    pub file: String,
    pub domain: Option<&'a str>,
    pub layer: Layer,
    pub exports: Vec<&'a str>,
}

impl<'a> From<&'a Unit> for UnitEvent<'a> {
    fn from(u: &'a Unit) -> Self {
        Self {
            event: "unit",
            unit: u.id.as_str(),
            file: layerguard::domain::value_objects::display_path(&u.path),
            domain: u.domain.as_deref(),
            layer: u.layer,
            exports: u.exports.iter().map(String::as_str).collect(),
        }
    }
}

/// A resolved edge (`units --edges`)
#[derive(Debug, Clone, Serialize)]
pub struct EdgeEvent<'a> {
    pub event: &'static str,
    pub source: &'a str,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<&'a str>,
    pub reference: &'a str,
    pub file: String,
    pub line: usize,
    pub column: usize,
}

impl<'a> From<&'a Edge> for EdgeEvent<'a> {
    fn from(e: &'a Edge) -> Self {
        Self {
            event: "edge",
            source: e.source.as_str(),
            target: e.target.to_string(),
            symbol: e.symbol.as_deref(),
            reference: &e.reference,
            file: e.location.display_file(),
            line: e.location.line,
            column: e.location.column,
        }
    }
}

/// Fatal error, emitted in JSON mode before exiting
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
        }
    }
}

/// Serialize a whole report: violations, unclassified units, parse errors,
/// then the summary.
pub fn report_lines(report: &Report, threshold: Severity) -> std::io::Result<Vec<u8>> {
    let mut out = Vec::new();
    for violation in &report.violations {
        super::write_typed_event(&mut out, &ViolationEvent::from(violation))?;
    }
    for unit in &report.unclassified {
        super::write_typed_event(&mut out, &UnclassifiedEvent::from(unit))?;
    }
    for error in &report.parse_errors {
        super::write_typed_event(&mut out, &ParseErrorEvent::from(error))?;
    }
    super::write_typed_event(&mut out, &SummaryEvent::new(report, threshold))?;
    Ok(out)
}
