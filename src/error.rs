//! Error types for layerguard
//!
//! Uses `thiserror` for library errors. Violations are findings, not errors,
//! and never appear here.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::value_objects::{display_path, Layer, Scope};

/// Result type alias for layerguard operations
pub type LayerGuardResult<T> = Result<T, LayerGuardError>;

/// Main error type for layerguard operations
#[derive(Error, Debug)]
pub enum LayerGuardError {
    /// Fatal configuration problem; aborts before analysis
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Project root does not exist or is not a directory
    #[error("project root not found: {}", .path.display())]
    ProjectNotFound { path: PathBuf },

    /// Directory walk failed
    #[error("failed to walk {}: {message}", .root.display())]
    Walk { root: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Ambiguous or conflicting convention/policy. Always fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Two layer rules claim the same file
    #[error(
        "ambiguous layer convention: '{}' matches both '{first}' and '{second}'",
        display_path(.path)
    )]
    AmbiguousConvention {
        path: PathBuf,
        first: String,
        second: String,
    },

    /// The same pattern is declared for two layers
    #[error("pattern '{pattern}' is declared for both layer '{first}' and layer '{second}'")]
    DuplicatePattern {
        pattern: String,
        first: Layer,
        second: Layer,
    },

    /// Two policy rules cover the same (source, target) pair
    #[error(
        "conflicting policy rules for {from} -> {to}: rule #{first_index} ({first}) and rule #{second_index} ({second})"
    )]
    ConflictingRules {
        from: Layer,
        to: Layer,
        first: Scope,
        first_index: usize,
        second: Scope,
        second_index: usize,
    },

    /// A rule or convention entry names the unchecked `other` layer
    #[error("{context} uses layer 'other', which is never policy-checked")]
    UncheckedLayer { context: String },

    /// Glob pattern failed to compile
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Config file could not be read or deserialized
    #[error("invalid config file {}: {message}", .file.display())]
    Invalid { file: PathBuf, message: String },

    /// Explicitly requested config file does not exist
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),
}

/// A source unit that could not be parsed. Recorded, never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[error("{}{}: {message}", display_path(.file), .line.map(|l| format!(":{}", l)).unwrap_or_default())]
pub struct ParseError {
    pub file: PathBuf,
    pub line: Option<usize>,
    pub message: String,
}

impl ParseError {
    pub fn new(file: impl Into<PathBuf>, line: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            message: message.into(),
        }
    }
}
