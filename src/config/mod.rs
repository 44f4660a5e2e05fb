//! Configuration module for layerguard
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (`LAYERGUARD_*`)
//! 3. Project config (`layerguard.toml` or `--config`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod template;
mod types;

pub use loader::{
    resolve, with_env_overrides, ConfigSource, ConfigWarning, LoadedConfig, CONFIG_FILE_NAME,
};
pub use template::DEFAULT_CONFIG_TOML;
pub use types::{Config, ConventionConfig, LayerRuleConfig, ProjectConfig, ReportConfig};
