use layerguard::domain::entities::{Outcome, Report, ViolationKind};
use layerguard::domain::value_objects::{display_path, Severity};

use crate::ui::blocks::finding::{Finding, FindingStatus};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_check_header(config_source: &str, threshold: Severity, ui: &UiContext) -> String {
    let mut header = CommandHeader::new(Icon::Check, "Layer Check");
    header.add("Config", config_source);
    header.add("Threshold", threshold.as_str());
    header.render(ui.color, ui.unicode)
}

/// Violations grouped by domain, then unclassified units and parse errors
pub fn render_check_report(report: &Report, ui: &UiContext) -> String {
    let mut out = String::new();

    for (domain, violations) in report.by_domain() {
        out.push('\n');
        out.push_str(&ColoredText::info(domain).bold().render(ui.color));
        out.push('\n');
        for violation in violations {
            let status = match violation.severity {
                Severity::Error => FindingStatus::Error,
                Severity::Warning => FindingStatus::Warning,
            };
            let mut details = vec![format!("{}: {}", violation.kind, violation.message())];
            if ui.verbose > 0 && violation.kind != ViolationKind::UnresolvedTarget {
                if let Some(target) = &violation.target {
                    details.push(format!(
                        "{} ({}) -> {} ({})",
                        violation.source.layer,
                        violation.source.domain.as_deref().unwrap_or("-"),
                        target.layer,
                        target.domain.as_deref().unwrap_or("-")
                    ));
                }
            }
            let finding = Finding {
                status,
                location: violation.edge.location.to_string(),
                message: format!("{} -> {}", violation.edge.source, violation.edge.reference),
                details,
            };
            out.push_str(&finding.render(ui.color, ui.unicode));
        }
    }

    if !report.unclassified.is_empty() {
        out.push('\n');
        out.push_str(&format!("Unclassified units ({})\n", report.unclassified.len()));
        for unit in &report.unclassified {
            let finding = Finding {
                status: FindingStatus::Info,
                location: unit.display_path(),
                message: unit.id.to_string(),
                details: Vec::new(),
            };
            out.push_str(&finding.render(ui.color, ui.unicode));
        }
    }

    if !report.parse_errors.is_empty() {
        out.push('\n');
        out.push_str(&format!("Parse errors ({})\n", report.parse_errors.len()));
        for error in &report.parse_errors {
            let location = match error.line {
                Some(line) => format!("{}:{}", display_path(&error.file), line),
                None => display_path(&error.file),
            };
            let finding = Finding {
                status: FindingStatus::Warning,
                location,
                message: error.message.clone(),
                details: Vec::new(),
            };
            out.push_str(&finding.render(ui.color, ui.unicode));
        }
    }

    out
}

pub fn render_check_summary(report: &Report, threshold: Severity, ui: &UiContext) -> String {
    let outcome = report.outcome(threshold);
    let (icon, title) = match outcome {
        Outcome::Fail => (Icon::Error, ColoredText::error("Check FAILED")),
        Outcome::PassWithWarnings => (Icon::Warning, ColoredText::warning("Check passed with warnings")),
        Outcome::Pass => (Icon::Success, ColoredText::success("No layer violations")),
    };

    format!(
        "\n{} {}: {}, {}; {} unclassified, {} ({} units, {} edges, {} skipped)\n",
        icon.colored(ui.color, ui.unicode),
        title.bold().render(ui.color),
        plural(report.errors(), "error"),
        plural(report.warnings(), "warning"),
        report.unclassified.len(),
        plural(report.parse_errors.len(), "parse error"),
        report.units,
        report.edges,
        report.skipped_edges
    )
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
