//! Command handlers
//!
//! Each handler resolves configuration, runs the library use case and
//! renders the result. Handlers return the process exit code; fatal errors
//! propagate as `anyhow::Error` and map to exit code 2 in `main`.

pub mod check;
pub mod init;
pub mod policy;
pub mod units;

use std::path::Path;

use anyhow::{Context, Result};
use layerguard::config::{self, ConfigSource, LoadedConfig};

/// Resolve configuration and print non-fatal warnings to stderr.
pub(crate) fn load_config(root: &Path, explicit: Option<&Path>) -> Result<LoadedConfig> {
    let loaded = config::resolve(root, explicit)
        .with_context(|| format!("failed to load configuration for {}", root.display()))?;
    for warning in &loaded.warnings {
        eprintln!("Warning: {}", warning);
        tracing::warn!(key = %warning.key, "unknown config key");
    }
    Ok(loaded)
}

/// Config provenance without the project root prefix, so output does not
/// depend on where the project lives.
pub(crate) fn source_label(root: &Path, source: &ConfigSource) -> String {
    match source {
        ConfigSource::File(path) => path
            .strip_prefix(root)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| path.display().to_string()),
        ConfigSource::BuiltIn => source.to_string(),
    }
}
