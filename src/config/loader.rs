//! Configuration loading
//!
//! Resolution order:
//! 1. CLI flags (applied by the command layer)
//! 2. Environment variables (`LAYERGUARD_*`)
//! 3. Explicit `--config` file, else `<root>/layerguard.toml`
//! 4. Built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::Severity;
use crate::error::ConfigError;

use super::types::Config;

/// File name looked up in the project root
pub const CONFIG_FILE_NAME: &str = "layerguard.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    BuiltIn,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::BuiltIn => f.write_str("built-in defaults"),
        }
    }
}

/// Effective configuration plus provenance and warnings
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound(path.to_path_buf())
        } else {
            ConfigError::Invalid {
                file: path.to_path_buf(),
                message: e.to_string(),
            }
        }
    })?;
    parse_with_warnings(&content, path)
}

/// Deserialize TOML text, recording keys the schema does not know.
pub fn parse_with_warnings(
    content: &str,
    origin: &Path,
) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Invalid {
        file: origin.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: origin.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the effective configuration for a project.
///
/// An explicit path must exist. Without one, `<root>/layerguard.toml` is
/// used when present and the built-in defaults otherwise.
pub fn resolve(project_root: &Path, explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let (config, source, warnings) = match explicit {
        Some(path) => {
            let (config, warnings) = load_with_warnings(path)?;
            (config, ConfigSource::File(path.to_path_buf()), warnings)
        }
        None => {
            let candidate = project_root.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                let (config, warnings) = load_with_warnings(&candidate)?;
                (config, ConfigSource::File(candidate), warnings)
            } else {
                tracing::debug!(
                    root = %project_root.display(),
                    "no {} found, using built-in defaults",
                    CONFIG_FILE_NAME
                );
                (Config::default(), ConfigSource::BuiltIn, Vec::new())
            }
        }
    };

    Ok(LoadedConfig {
        config: with_env_overrides(config),
        source,
        warnings,
    })
}

/// Apply environment variable overrides (`LAYERGUARD_*` prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // LAYERGUARD_SEVERITY_THRESHOLD
    if let Some(value) = get_env("LAYERGUARD_SEVERITY_THRESHOLD") {
        match value.parse::<Severity>() {
            Ok(severity) => config.report.severity_threshold = severity,
            Err(err) => tracing::warn!("ignoring LAYERGUARD_SEVERITY_THRESHOLD: {}", err),
        }
    }

    // LAYERGUARD_UNRESOLVED
    if let Some(value) = get_env("LAYERGUARD_UNRESOLVED") {
        match value.parse::<Severity>() {
            Ok(severity) => config.report.unresolved = severity,
            Err(err) => tracing::warn!("ignoring LAYERGUARD_UNRESOLVED: {}", err),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "project",
        "roots",
        "include",
        "exclude",
        "convention",
        "domains",
        "shared",
        "layer",
        "patterns",
        "policy",
        "from",
        "to",
        "scope",
        "report",
        "unresolved",
        "severity_threshold",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
