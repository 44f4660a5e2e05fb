//! Module Classifier
//!
//! Assigns each source file a unit id, an owning domain and a layer, from
//! its path alone:
//!
//! 1. Files under a `shared` directory are layer `core`.
//! 2. Files under a `domains` directory take the layer of the single layer
//!    rule matching their path relative to that directory, or `other`.
//! 3. Everything else is `other` without a domain.
//!
//! Two rules for different layers matching one file is a `ConfigError`.

use std::path::{Component, Path, PathBuf};

use globset::GlobSet;

use crate::config::{ConventionConfig, LayerRuleConfig};
use crate::domain::entities::Unit;
use crate::domain::value_objects::{Layer, UnitId};
use crate::error::ConfigError;

use super::glob::{compile, compile_set};

/// Domain and layer assigned to one path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub domain: Option<String>,
    pub layer: Layer,
}

#[derive(Debug, Clone)]
struct LayerRule {
    layer: Layer,
    patterns: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Classifier {
    roots: Vec<PathBuf>,
    domains: GlobSet,
    shared: GlobSet,
    rules: Vec<LayerRule>,
    layer_patterns: GlobSet,
    /// Rule index of each pattern in `layer_patterns`
    pattern_owner: Vec<usize>,
}

impl Classifier {
    /// Compile the convention, rejecting rules that can never be checked
    /// and patterns claimed by two layers.
    pub fn new(convention: &ConventionConfig, roots: &[PathBuf]) -> Result<Self, ConfigError> {
        validate_rules(&convention.layers)?;

        let mut builder = globset::GlobSetBuilder::new();
        let mut pattern_owner = Vec::new();
        let mut rules = Vec::new();
        for (index, rule) in convention.layers.iter().enumerate() {
            for pattern in &rule.patterns {
                builder.add(compile(pattern)?);
                pattern_owner.push(index);
            }
            rules.push(LayerRule {
                layer: rule.layer,
                patterns: rule.patterns.clone(),
            });
        }
        let layer_patterns = builder.build().map_err(|e| ConfigError::InvalidPattern {
            pattern: "[[convention.layer]]".to_string(),
            message: e.kind().to_string(),
        })?;

        let mut roots: Vec<PathBuf> = roots.iter().map(|r| normalize(r)).collect();
        // Deepest root wins
        roots.sort_by_key(|r| std::cmp::Reverse(r.components().count()));

        Ok(Self {
            roots,
            domains: compile_set(&convention.domains)?,
            shared: compile_set(&convention.shared)?,
            rules,
            layer_patterns,
            pattern_owner,
        })
    }

    /// Classify a path relative to the project root
    pub fn classify(&self, path: &Path) -> Result<Classification, ConfigError> {
        let parts = components(path);
        if parts.is_empty() {
            return Ok(Classification {
                domain: None,
                layer: Layer::Other,
            });
        }

        // Shared directories take precedence over domains
        for depth in 1..parts.len() {
            let dir = parts[..depth].join("/");
            if self.shared.is_match(&dir) {
                return Ok(Classification {
                    domain: Some(parts[depth - 1].clone()),
                    layer: Layer::Core,
                });
            }
        }

        for depth in 1..parts.len() {
            let dir = parts[..depth].join("/");
            if !self.domains.is_match(&dir) {
                continue;
            }
            let domain = parts[depth - 1].clone();
            let inner = parts[depth..].join("/");
            let layer = self.layer_for(path, &inner)?;
            return Ok(Classification {
                domain: Some(domain),
                layer: layer.unwrap_or(Layer::Other),
            });
        }

        Ok(Classification {
            domain: None,
            layer: Layer::Other,
        })
    }

    /// Dotted module id, relative to the deepest module root containing the file
    pub fn unit_id(&self, path: &Path) -> Option<UnitId> {
        let path = normalize(path);
        let relative = self
            .roots
            .iter()
            .find_map(|root| path.strip_prefix(root).ok())
            .unwrap_or(path.as_path());
        UnitId::from_module_path(relative)
    }

    /// Classify a path into a unit without exports, or `None` if the path
    /// names no module
    pub fn unit(&self, path: &Path) -> Result<Option<Unit>, ConfigError> {
        let Some(id) = self.unit_id(path) else {
            return Ok(None);
        };
        let classification = self.classify(path)?;
        Ok(Some(Unit::new(
            id,
            path,
            classification.domain,
            classification.layer,
        )))
    }

    fn layer_for(&self, path: &Path, inner: &str) -> Result<Option<Layer>, ConfigError> {
        let mut matched: Vec<usize> = self
            .layer_patterns
            .matches(inner)
            .into_iter()
            .map(|pattern| self.pattern_owner[pattern])
            .collect();
        matched.sort_unstable();
        matched.dedup();

        let Some(&first) = matched.first() else {
            return Ok(None);
        };
        let first_rule = &self.rules[first];
        if let Some(&other) = matched
            .iter()
            .find(|&&index| self.rules[index].layer != first_rule.layer)
        {
            return Err(ConfigError::AmbiguousConvention {
                path: path.to_path_buf(),
                first: self.describe(first, inner),
                second: self.describe(other, inner),
            });
        }
        Ok(Some(first_rule.layer))
    }

    /// `layer: pattern` for the first pattern of a rule that matches
    fn describe(&self, index: usize, inner: &str) -> String {
        let rule = &self.rules[index];
        let pattern = rule
            .patterns
            .iter()
            .find(|p| compile(p).map(|g| g.compile_matcher().is_match(inner)).unwrap_or(false))
            .or_else(|| rule.patterns.first())
            .map(String::as_str)
            .unwrap_or("");
        format!("{}: {}", rule.layer, pattern)
    }
}

fn validate_rules(rules: &[LayerRuleConfig]) -> Result<(), ConfigError> {
    let mut seen: Vec<(&str, Layer)> = Vec::new();
    for (index, rule) in rules.iter().enumerate() {
        if !rule.layer.is_checked() {
            return Err(ConfigError::UncheckedLayer {
                context: format!("convention layer rule #{}", index + 1),
            });
        }
        for pattern in &rule.patterns {
            if let Some((_, layer)) = seen
                .iter()
                .find(|(p, l)| *p == pattern.as_str() && *l != rule.layer)
            {
                return Err(ConfigError::DuplicatePattern {
                    pattern: pattern.clone(),
                    first: *layer,
                    second: rule.layer,
                });
            }
            seen.push((pattern.as_str(), rule.layer));
        }
    }
    Ok(())
}

/// Drop `.` components so `./apps` and `apps` compare equal
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

fn components(path: &Path) -> Vec<String> {
    normalize(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect()
}
