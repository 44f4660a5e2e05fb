use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use layerguard::domain::value_objects::Severity;

/// layerguard - layer-boundary checker for Python projects
#[derive(Parser, Debug)]
#[command(name = "layerguard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Color output: auto, always, never
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeverityArg {
    Warning,
    Error,
}

impl From<SeverityArg> for Severity {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::Warning => Severity::Warning,
            SeverityArg::Error => Severity::Error,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check every reference in the project against the layer policy
    Check {
        /// Project root
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Config file (default: <root>/layerguard.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Lowest severity that fails the run
        #[arg(long, value_enum)]
        severity_threshold: Option<SeverityArg>,

        /// Report format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a default layerguard.toml
    Init {
        /// Project root
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Overwrite an existing layerguard.toml
        #[arg(long)]
        force: bool,
    },

    /// List classified units (debugging)
    Units {
        /// Project root
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Config file (default: <root>/layerguard.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Also list resolved edges
        #[arg(long)]
        edges: bool,
    },

    /// Show the layer interaction matrix
    Policy {
        /// Project root
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Config file (default: <root>/layerguard.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_check_defaults() {
        let cli = Cli::try_parse_from(["layerguard", "check"]).unwrap();
        if let Commands::Check {
            root,
            config,
            severity_threshold,
            format,
            output,
        } = cli.command
        {
            assert_eq!(root, PathBuf::from("."));
            assert!(config.is_none());
            assert!(severity_threshold.is_none());
            assert_eq!(format, Format::Text);
            assert!(output.is_none());
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_check_with_options() {
        let cli = Cli::try_parse_from([
            "layerguard",
            "check",
            "backend",
            "-c",
            "ci/layerguard.toml",
            "--severity-threshold",
            "warning",
            "--format",
            "json",
            "-o",
            "report.ndjson",
        ])
        .unwrap();
        if let Commands::Check {
            root,
            config,
            severity_threshold,
            format,
            output,
        } = cli.command
        {
            assert_eq!(root, PathBuf::from("backend"));
            assert_eq!(config, Some(PathBuf::from("ci/layerguard.toml")));
            assert_eq!(severity_threshold, Some(SeverityArg::Warning));
            assert_eq!(format, Format::Json);
            assert_eq!(output, Some(PathBuf::from("report.ndjson")));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_rejects_unknown_severity() {
        let result =
            Cli::try_parse_from(["layerguard", "check", "--severity-threshold", "info"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_init_force() {
        let cli = Cli::try_parse_from(["layerguard", "init", "--force"]).unwrap();
        if let Commands::Init { root, force } = cli.command {
            assert_eq!(root, PathBuf::from("."));
            assert!(force);
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn test_cli_parse_units_edges() {
        let cli = Cli::try_parse_from(["layerguard", "units", "--edges", "--format", "json"])
            .unwrap();
        if let Commands::Units { edges, format, .. } = cli.command {
            assert!(edges);
            assert_eq!(format, Format::Json);
        } else {
            panic!("Expected Units command");
        }
    }

    #[test]
    fn test_cli_parse_policy() {
        let cli = Cli::try_parse_from(["layerguard", "policy", "proj"]).unwrap();
        assert!(matches!(cli.command, Commands::Policy { .. }));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["layerguard"]).is_err());
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["layerguard", "check", "-vv", "--color", "never"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color, Some(ColorWhen::Never));
    }

    #[test]
    fn test_severity_arg_converts() {
        assert_eq!(Severity::from(SeverityArg::Warning), Severity::Warning);
        assert_eq!(Severity::from(SeverityArg::Error), Severity::Error);
    }
}
