use std::collections::BTreeMap;

use layerguard::application::check::Analysis;
use layerguard::domain::entities::{Edge, Unit};
use layerguard::domain::value_objects::{display_path, UnitId};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_units_header(config_source: &str, ui: &UiContext) -> String {
    let mut header = CommandHeader::new(Icon::Units, "Units");
    header.add("Config", config_source);
    header.render(ui.color, ui.unicode)
}

/// Units grouped by domain, each with its layer and file; with
/// `show_edges`, the resolved edges leaving each unit.
pub fn render_units(analysis: &Analysis, show_edges: bool, ui: &UiContext) -> String {
    let mut groups: BTreeMap<&str, Vec<&Unit>> = BTreeMap::new();
    for unit in &analysis.units {
        groups
            .entry(unit.domain.as_deref().unwrap_or("(no domain)"))
            .or_default()
            .push(unit);
    }

    let mut edges: BTreeMap<&UnitId, Vec<&Edge>> = BTreeMap::new();
    if show_edges {
        for edge in &analysis.edges {
            edges.entry(&edge.source).or_default().push(edge);
        }
    }

    let mut out = String::new();
    for (domain, units) in groups {
        out.push('\n');
        out.push_str(&ColoredText::info(domain).bold().render(ui.color));
        out.push('\n');
        for unit in units {
            let layer = format!("{:<9}", unit.layer.as_str());
            let layer = if unit.is_classified() {
                layer
            } else {
                ColoredText::dim(layer).render(ui.color)
            };
            out.push_str(&format!(
                "  {} {} {} ({} exports)\n",
                layer,
                unit.id,
                ColoredText::dim(display_path(&unit.path)).render(ui.color),
                unit.exports.len()
            ));
            for edge in edges.get(&unit.id).into_iter().flatten() {
                out.push_str(&format!(
                    "    {} {} (line {})\n",
                    Icon::Arrow.colored(ui.color, ui.unicode),
                    edge.reference,
                    edge.location.line
                ));
            }
        }
    }

    out.push_str(&format!(
        "\n{} units, {} edges, {} parse errors\n",
        analysis.units.len(),
        analysis.edges.len(),
        analysis.parse_errors.len()
    ));
    out
}
