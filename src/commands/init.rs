//! Init command - write a default layerguard.toml

use std::path::Path;

use anyhow::{bail, Context, Result};
use layerguard::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TOML};
use layerguard::infrastructure::atomic_write;

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn cmd_init(root: &Path, force: bool, verbose: u8, color: Option<ColorWhen>) -> Result<()> {
    if !root.is_dir() {
        bail!("project root not found: {}", root.display());
    }

    let path = root.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        bail!(
            "{} already exists at {}. Use --force to overwrite.",
            CONFIG_FILE_NAME,
            path.display()
        );
    }

    atomic_write(&path, DEFAULT_CONFIG_TOML.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote default configuration");

    let ui = UiContext::new(verbose, color);
    println!(
        "{} Created {}",
        Icon::Success.colored(ui.color, ui.unicode),
        path.display()
    );
    Ok(())
}
