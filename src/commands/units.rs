use std::io::Write;
use std::path::Path;

use anyhow::Result;
use layerguard::presentation::factory::create_check_use_case;

use crate::cli::{ColorWhen, Format};
use crate::ui::context::UiContext;
use crate::ui::json::records::{EdgeEvent, UnitEvent};
use crate::ui::json::write_typed_event;
use crate::ui::views::units::{render_units, render_units_header};

pub fn cmd_units(
    root: &Path,
    config: Option<&Path>,
    format: Format,
    show_edges: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let loaded = super::load_config(root, config)?;
    let label = super::source_label(root, &loaded.source);
    let analysis = create_check_use_case(root, loaded.config)?.analyze()?;

    let mut out = std::io::stdout().lock();
    match format {
        Format::Json => {
            for unit in &analysis.units {
                write_typed_event(&mut out, &UnitEvent::from(unit))?;
            }
            if show_edges {
                for edge in &analysis.edges {
                    write_typed_event(&mut out, &EdgeEvent::from(edge))?;
                }
            }
        }
        Format::Text => {
            let ui = UiContext::new(verbose, color);
            write!(out, "{}", render_units_header(&label, &ui))?;
            write!(out, "{}", render_units(&analysis, show_edges, &ui))?;
        }
    }
    out.flush()?;
    Ok(())
}
