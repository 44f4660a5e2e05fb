use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use layerguard::domain::entities::Report;
use layerguard::domain::value_objects::Severity;
use layerguard::infrastructure::atomic_write;
use layerguard::presentation::factory::create_check_use_case;

use crate::cli::{ColorWhen, Format};
use crate::ui::ci::violation_annotation;
use crate::ui::context::UiContext;
use crate::ui::json::records::{report_lines, ErrorEvent};
use crate::ui::json::write_typed_event;
use crate::ui::views::check::{render_check_header, render_check_report, render_check_summary};

pub struct CheckArgs<'a> {
    pub root: &'a Path,
    pub config: Option<&'a Path>,
    pub severity_threshold: Option<Severity>,
    pub format: Format,
    pub output: Option<&'a Path>,
    pub verbose: u8,
    pub color: Option<ColorWhen>,
}

pub fn cmd_check(args: CheckArgs<'_>) -> Result<ExitCode> {
    match run(&args) {
        Ok(code) => Ok(code),
        Err(err) => {
            if args.format == Format::Json {
                write_error_record(&mut std::io::stdout().lock(), &err);
            }
            Err(err)
        }
    }
}

/// Returns whether the record was written.
fn write_error_record<W: Write>(out: &mut W, err: &anyhow::Error) -> bool {
    let event = ErrorEvent::new("check", error_code(err), format!("{:#}", err));
    match write_typed_event(out, &event) {
        Ok(()) => true,
        Err(write_err) => {
            tracing::debug!(error = %write_err, "failed to write JSON error record");
            false
        }
    }
}

fn run(args: &CheckArgs<'_>) -> Result<ExitCode> {
    let loaded = super::load_config(args.root, args.config)?;
    let threshold = args
        .severity_threshold
        .unwrap_or(loaded.config.report.severity_threshold);
    let label = super::source_label(args.root, &loaded.source);

    let use_case = create_check_use_case(args.root, loaded.config)?;
    let report = use_case.execute()?;

    let outcome = report.outcome(threshold);
    tracing::info!(
        outcome = outcome.as_str(),
        errors = report.errors(),
        warnings = report.warnings(),
        "check finished"
    );

    let rendered = match args.format {
        Format::Json => report_lines(&report, threshold)?,
        Format::Text => {
            let ui = if args.output.is_some() {
                UiContext::plain(args.verbose)
            } else {
                UiContext::new(args.verbose, args.color)
            };
            render_text(&report, &label, threshold, &ui).into_bytes()
        }
    };

    match args.output {
        Some(path) => {
            atomic_write(path, &rendered)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            eprintln!("Report written to {}", path.display());
        }
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(&rendered)?;
            out.flush()?;
        }
    }

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn render_text(report: &Report, label: &str, threshold: Severity, ui: &UiContext) -> String {
    let mut out = render_check_header(label, threshold, ui);
    out.push_str(&render_check_report(report, ui));
    out.push_str(&render_check_summary(report, threshold, ui));
    if ui.annotations {
        for violation in &report.violations {
            out.push_str(&violation_annotation(violation));
            out.push('\n');
        }
    }
    out
}

fn error_code(err: &anyhow::Error) -> &'static str {
    use layerguard::error::{ConfigError, LayerGuardError};

    if err.downcast_ref::<ConfigError>().is_some() {
        return "config";
    }
    match err.downcast_ref::<LayerGuardError>() {
        Some(LayerGuardError::Config(_)) => "config",
        Some(LayerGuardError::ProjectNotFound { .. }) => "project_not_found",
        Some(LayerGuardError::Walk { .. }) => "walk",
        Some(LayerGuardError::Io(_)) | None => "io",
    }
}
