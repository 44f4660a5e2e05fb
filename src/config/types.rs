//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::policies::{default_rules, PolicyRule, PolicyTable};
use crate::domain::value_objects::{Layer, Severity};
use crate::error::ConfigError;

use super::loader::{self, ConfigWarning};

/// Which files are analysed and how module ids are derived
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Module roots, relative to the project root. Unit ids are dotted
    /// paths relative to the deepest root containing the file.
    pub roots: Vec<PathBuf>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            roots: vec![PathBuf::from(".")],
            include: vec!["**/*.py".to_string()],
            exclude: vec![
                "**/migrations/**".to_string(),
                "**/__pycache__/**".to_string(),
                ".venv/**".to_string(),
                "venv/**".to_string(),
            ],
        }
    }
}

/// One `[[convention.layer]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerRuleConfig {
    pub layer: Layer,
    /// Globs relative to the domain directory
    pub patterns: Vec<String>,
}

impl LayerRuleConfig {
    pub fn new(layer: Layer, patterns: &[&str]) -> Self {
        Self {
            layer,
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Domain/layer naming convention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConventionConfig {
    /// Globs matching domain directories
    pub domains: Vec<String>,
    /// Directories whose files are layer `core`
    pub shared: Vec<String>,
    #[serde(rename = "layer")]
    pub layers: Vec<LayerRuleConfig>,
}

impl Default for ConventionConfig {
    fn default() -> Self {
        Self {
            domains: vec!["apps/*".to_string()],
            shared: vec!["apps/core".to_string()],
            layers: vec![
                LayerRuleConfig::new(Layer::Api, &["api.py", "api/**/*.py"]),
                LayerRuleConfig::new(Layer::Service, &["services.py", "services/**/*.py"]),
                LayerRuleConfig::new(Layer::Selector, &["selectors.py", "selectors/**/*.py"]),
                LayerRuleConfig::new(
                    Layer::Model,
                    &["model.py", "models.py", "models/**/*.py"],
                ),
            ],
        }
    }
}

/// Report and exit-status settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Severity assigned to edges whose target cannot be resolved
    pub unresolved: Severity,
    /// Lowest severity that fails the run
    pub severity_threshold: Severity,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            unresolved: Severity::Warning,
            severity_threshold: Severity::Error,
        }
    }
}

/// Main configuration structure (`layerguard.toml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub project: ProjectConfig,
    pub convention: ConventionConfig,
    pub policy: Vec<PolicyRule>,
    pub report: ReportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project: ProjectConfig::default(),
            convention: ConventionConfig::default(),
            policy: default_rules(),
            report: ReportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }

    /// Parse configuration from TOML text; `origin` is used in messages.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        loader::parse_with_warnings(content, origin).map(|(config, _)| config)
    }

    /// Build the policy table, failing on conflicting rules
    pub fn policy_table(&self) -> Result<PolicyTable, ConfigError> {
        PolicyTable::from_rules(self.policy.iter().copied())
    }
}
