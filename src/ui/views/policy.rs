use layerguard::domain::policies::PolicyTable;
use layerguard::domain::value_objects::Layer;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

const LABEL_WIDTH: usize = 10;
const CELL_WIDTH: usize = 14;

pub fn render_policy_header(config_source: &str, ui: &UiContext) -> String {
    let mut header = CommandHeader::new(Icon::Policy, "Policy");
    header.add("Config", config_source);
    header.render(ui.color, ui.unicode)
}

/// Interaction matrix: rows are source layers, columns target layers, cells
/// the allowed scope or `-` when denied.
pub fn render_policy_matrix(table: &PolicyTable, ui: &UiContext) -> String {
    let mut out = String::from("\n");

    let mut heading = format!("{:<LABEL_WIDTH$}", "from \\ to");
    for to in Layer::CHECKED {
        heading.push_str(&format!("{:<CELL_WIDTH$}", to.as_str()));
    }
    out.push_str(&ColoredText::info(heading.trim_end()).bold().render(ui.color));
    out.push('\n');

    for from in Layer::CHECKED {
        let mut row = format!("{:<LABEL_WIDTH$}", from.as_str());
        for to in Layer::CHECKED {
            let cell = format!(
                "{:<CELL_WIDTH$}",
                table
                    .rule_for(from, to)
                    .map(|rule| rule.scope.as_str())
                    .unwrap_or("-")
            );
            if table.rule_for(from, to).is_some() {
                row.push_str(&ColoredText::success(cell).render(ui.color));
            } else {
                row.push_str(&ColoredText::dim(cell).render(ui.color));
            }
        }
        out.push_str(row.trim_end());
        out.push('\n');
    }

    let noun = if table.len() == 1 { "rule" } else { "rules" };
    out.push_str(&format!("\n{} {}; unlisted pairs are denied\n", table.len(), noun));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use layerguard::domain::policies::default_rules;

    #[test]
    fn default_matrix_rows() {
        let table = PolicyTable::from_rules(default_rules()).unwrap();
        let rendered = render_policy_matrix(&table, &UiContext::plain(0));
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(
            lines[1],
            "from \\ to api           service       selector      model         core"
        );
        assert_eq!(
            lines[2],
            "api       -             same-domain   same-domain   -             any"
        );
        assert_eq!(
            lines[3],
            "service   -             cross-domain  same-domain   -             any"
        );
        assert_eq!(lines.last().copied(), Some("10 rules; unlisted pairs are denied"));
    }
}
