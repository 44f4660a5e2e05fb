//! layerguard CLI - layer-boundary checker for Python projects
//!
//! Usage: layerguard <COMMAND>
//!
//! Commands:
//!   check   Check every reference against the layer policy
//!   init    Write a default layerguard.toml
//!   units   List classified units (debugging)
//!   policy  Show the layer interaction matrix

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let verbose = cli.verbose;
    let color = cli.color;

    match cli.command {
        Commands::Check {
            root,
            config,
            severity_threshold,
            format,
            output,
        } => commands::check::cmd_check(commands::check::CheckArgs {
            root: &root,
            config: config.as_deref(),
            severity_threshold: severity_threshold.map(Into::into),
            format,
            output: output.as_deref(),
            verbose,
            color,
        }),
        Commands::Init { root, force } => {
            commands::init::cmd_init(&root, force, verbose, color)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Units {
            root,
            config,
            format,
            edges,
        } => {
            commands::units::cmd_units(&root, config.as_deref(), format, edges, verbose, color)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Policy { root, config } => {
            commands::policy::cmd_policy(&root, config.as_deref(), verbose, color)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Diagnostics go to stderr so stdout stays a clean report.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
