//! GitHub Actions workflow annotations

use layerguard::domain::entities::Violation;
use layerguard::domain::value_objects::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

impl From<Severity> for AnnotationLevel {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Warning => AnnotationLevel::Warning,
            Severity::Error => AnnotationLevel::Error,
        }
    }
}

/// `::error file=...,line=...,title=...::message` for one violation
pub fn violation_annotation(violation: &Violation) -> String {
    let file = violation.edge.location.display_file();
    github_actions_annotation(
        violation.severity.into(),
        &violation.message(),
        Some(&file),
        Some(violation.edge.location.line),
        Some(&format!("layerguard {}", violation.kind)),
    )
}

pub fn github_actions_annotation(
    level: AnnotationLevel,
    message: &str,
    file: Option<&str>,
    line: Option<usize>,
    title: Option<&str>,
) -> String {
    let level_str = match level {
        AnnotationLevel::Warning => "warning",
        AnnotationLevel::Error => "error",
    };

    let mut props = Vec::new();
    if let Some(file) = file {
        props.push(format!("file={}", escape_workflow_command_value(file)));
    }
    if let Some(line) = line {
        props.push(format!("line={}", line));
    }
    if let Some(title) = title {
        props.push(format!("title={}", escape_workflow_command_value(title)));
    }

    let prop_str = if props.is_empty() {
        String::new()
    } else {
        format!(" {}", props.join(","))
    };

    format!(
        "::{}{}::{}",
        level_str,
        prop_str,
        escape_workflow_command_message(message)
    )
}

fn escape_workflow_command_message(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

/// Property values additionally escape the `:` and `,` separators
fn escape_workflow_command_value(s: &str) -> String {
    escape_workflow_command_message(s)
        .replace(':', "%3A")
        .replace(',', "%2C")
}
