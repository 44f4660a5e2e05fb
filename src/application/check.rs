//! Check Use Case
//!
//! Orchestrates one analysis run: discover files, classify them into units,
//! extract and resolve references in parallel, then evaluate every edge
//! against the policy table.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::PathBuf;

use rayon::prelude::*;

use crate::config::Config;
use crate::domain::entities::{Edge, Report, UnclassifiedUnit, Unit};
use crate::domain::ports::{Extraction, ReferenceExtractor, SourceTree};
use crate::domain::services::{check, CheckOptions, Classifier, ReferenceResolver, SourceFilter};
use crate::domain::value_objects::UnitId;
use crate::error::{LayerGuardResult, ParseError};

/// Units and edges of a project, before policy evaluation
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    /// Sorted by unit id
    pub units: Vec<Unit>,
    /// Sorted by edge sort key
    pub edges: Vec<Edge>,
    pub parse_errors: Vec<ParseError>,
}

/// Check Use Case
///
/// Generic over the source tree and the extractor so tests can run on an
/// in-memory project.
pub struct CheckUseCase<T, X> {
    tree: T,
    extractor: X,
    config: Config,
}

impl<T, X> CheckUseCase<T, X>
where
    T: SourceTree,
    X: ReferenceExtractor,
{
    pub fn new(tree: T, extractor: X, config: Config) -> Self {
        Self {
            tree,
            extractor,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Classify units and collect their resolved edges.
    ///
    /// Fails on an invalid or ambiguous convention; unparseable units are
    /// recorded in `parse_errors` and contribute no edges.
    pub fn analyze(&self) -> LayerGuardResult<Analysis> {
        let filter = SourceFilter::new(&self.config.project)?;
        let classifier = Classifier::new(&self.config.convention, &self.config.project.roots)?;

        let files: Vec<PathBuf> = self
            .tree
            .files()?
            .into_iter()
            .filter(|file| filter.accepts(file))
            .collect();
        tracing::debug!(files = files.len(), "discovered source files");

        let mut units = self.classify(&classifier, &files)?;
        tracing::info!(
            units = units.len(),
            unclassified = units.iter().filter(|u| !u.is_classified()).count(),
            "classified units"
        );

        let extractions: Vec<Result<Extraction, ParseError>> =
            units.par_iter().map(|unit| self.extract(unit)).collect();

        let mut parse_errors = Vec::new();
        let mut references = Vec::with_capacity(units.len());
        for (unit, extraction) in units.iter_mut().zip(extractions) {
            match extraction {
                Ok(extraction) => {
                    unit.exports = extraction.exports;
                    references.push(extraction.references);
                }
                Err(err) => {
                    tracing::warn!("skipping unparseable unit {}", err);
                    parse_errors.push(err);
                    references.push(Vec::new());
                }
            }
        }

        let resolver = ReferenceResolver::new(&units);
        let mut edges: Vec<Edge> = units
            .par_iter()
            .zip(references.par_iter())
            .flat_map_iter(|(unit, refs)| resolver.edges(unit, refs))
            .collect();
        edges.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        parse_errors.sort();
        tracing::debug!(edges = edges.len(), "resolved edges");

        Ok(Analysis {
            units,
            edges,
            parse_errors,
        })
    }

    /// Run the full check and build the report
    pub fn execute(&self) -> LayerGuardResult<Report> {
        // Policy conflicts abort before any file is read
        let policy = self.config.policy_table()?;
        let analysis = self.analyze()?;

        let options = CheckOptions {
            unresolved: self.config.report.unresolved,
        };
        let outcome = check(&analysis.units, &analysis.edges, &policy, &options);

        let unclassified: Vec<UnclassifiedUnit> = analysis
            .units
            .iter()
            .filter(|unit| !unit.is_classified())
            .map(UnclassifiedUnit::from)
            .collect();

        let report = Report::new(
            analysis.units.len(),
            analysis.edges.len(),
            outcome.skipped,
            outcome.violations,
            unclassified,
            analysis.parse_errors,
        );
        tracing::info!(
            violations = report.violations.len(),
            errors = report.errors(),
            warnings = report.warnings(),
            skipped = report.skipped_edges,
            "check finished"
        );
        Ok(report)
    }

    fn classify(&self, classifier: &Classifier, files: &[PathBuf]) -> LayerGuardResult<Vec<Unit>> {
        let mut units: BTreeMap<UnitId, Unit> = BTreeMap::new();
        for file in files {
            let Some(unit) = classifier.unit(file)? else {
                tracing::debug!("{} names no module, skipping", file.display());
                continue;
            };
            match units.entry(unit.id.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(unit);
                }
                Entry::Occupied(mut slot) => {
                    // `pkg/__init__.py` shadows `pkg.py`, as in the import system
                    let (kept, dropped) = if unit.is_package && !slot.get().is_package {
                        let previous = slot.insert(unit);
                        (slot.get().path.clone(), previous.path)
                    } else {
                        (slot.get().path.clone(), unit.path)
                    };
                    tracing::warn!(
                        "{} and {} define the same module; using {}",
                        kept.display(),
                        dropped.display(),
                        kept.display()
                    );
                }
            }
        }
        Ok(units.into_values().collect())
    }

    fn extract(&self, unit: &Unit) -> Result<Extraction, ParseError> {
        let bytes = self
            .tree
            .read(&unit.path)
            .map_err(|e| ParseError::new(&unit.path, None, format!("cannot read file: {}", e)))?;
        let source = String::from_utf8(bytes)
            .map_err(|_| ParseError::new(&unit.path, None, "file is not valid UTF-8"))?;
        self.extractor.extract(&unit.path, &source)
    }
}
