use std::path::Path;

use anyhow::Result;

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;
use crate::ui::views::policy::{render_policy_header, render_policy_matrix};

pub fn cmd_policy(
    root: &Path,
    config: Option<&Path>,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let loaded = super::load_config(root, config)?;
    let table = loaded.config.policy_table()?;

    let ui = UiContext::new(verbose, color);
    print!("{}", render_policy_header(&super::source_label(root, &loaded.source), &ui));
    print!("{}", render_policy_matrix(&table, &ui));
    Ok(())
}
