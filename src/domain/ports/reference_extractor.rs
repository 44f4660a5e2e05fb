//! ReferenceExtractor port - turns source text into unresolved references
//!
//! Extractors know the syntax of one language. They report what a unit
//! imports and where it uses those imports; resolving the references to
//! units happens in the domain (`ReferenceResolver`).

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::ParseError;

/// A reference as written in source, before resolution.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum RawReference {
    /// Statically known module, optionally a name imported from it
    Static {
        /// Dotted module path as written (without leading dots)
        module: String,
        /// Number of leading dots of a relative import; 0 for absolute
        level: usize,
        /// Name imported with `from module import name`
        symbol: Option<String>,
        /// Dotted attribute path accessed through the binding at the use site
        member: Option<String>,
        line: usize,
        column: usize,
    },
    /// Target computed at runtime (`import_module(name)`)
    Dynamic {
        expression: String,
        line: usize,
        column: usize,
    },
}

impl RawReference {
    pub fn position(&self) -> (usize, usize) {
        match self {
            RawReference::Static { line, column, .. } | RawReference::Dynamic { line, column, .. } => {
                (*line, *column)
            }
        }
    }
}

/// What one unit defines and references
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub exports: BTreeSet<String>,
    pub references: Vec<RawReference>,
}

/// Language-specific reference extraction
pub trait ReferenceExtractor: Sync {
    /// Parse `source` (the contents of `file`) and collect its references.
    ///
    /// A file that does not parse yields a `ParseError`; callers record it
    /// and continue with other units.
    fn extract(&self, file: &Path, source: &str) -> Result<Extraction, ParseError>;
}
