//! CLI argument definitions for the fathom installation lifecycle tool.

use std::path::PathBuf;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

/// Command-line interface for the fathom setup tool.
#[derive(Parser, Debug)]
#[command(name = "fathom-setup", version, disable_help_subcommand = true)]
pub(crate) struct Cli {
    /// Root of the fathom source tree the tool operates on.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub(crate) source_root: Utf8PathBuf,
    /// The lifecycle operation to perform.
    #[command(subcommand)]
    pub(crate) command: SetupCommand,
}

/// Lifecycle operations; exactly one runs per invocation.
#[derive(Subcommand, Debug, Clone)]
pub(crate) enum SetupCommand {
    /// Removes the generated version artifact and build output directories.
    Clean,
    /// Removes an installed fathom package directory and executable.
    Uninstall {
        /// Explicit path of the installed package directory to remove.
        #[arg(long, value_name = "DIR")]
        package_dir: Option<PathBuf>,
        /// Explicit path of the installed executable to remove.
        #[arg(long, value_name = "FILE")]
        executable: Option<PathBuf>,
    },
    /// Copies the plugin bundle into a host application directory.
    PluginInstall {
        /// Path to the host application's install directory.
        #[arg(long, value_name = "DIR")]
        host_dir: Option<PathBuf>,
    },
    /// Removes the plugin bundle from a host application directory.
    PluginUninstall {
        /// Path to the host application's install directory.
        #[arg(long, value_name = "DIR")]
        host_dir: Option<PathBuf>,
    },
    /// Runs the package test suite under the external test runner.
    Test,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(args)
    }

    #[test]
    fn parses_plugin_install_with_host_dir() {
        let cli = parse(&["fathom-setup", "plugin-install", "--host-dir", "/opt/host"])
            .expect("parses plugin-install");
        match cli.command {
            SetupCommand::PluginInstall { host_dir } => {
                assert_eq!(host_dir, Some(PathBuf::from("/opt/host")));
            }
            other => panic!("expected plugin-install, got: {other:?}"),
        }
    }

    #[test]
    fn host_dir_is_optional_to_the_parser() {
        // Its absence is diagnosed by the handler, not the parser, so the
        // process still exits normally.
        let cli = parse(&["fathom-setup", "plugin-uninstall"]).expect("parses plugin-uninstall");
        match cli.command {
            SetupCommand::PluginUninstall { host_dir } => assert!(host_dir.is_none()),
            other => panic!("expected plugin-uninstall, got: {other:?}"),
        }
    }

    #[test]
    fn parses_uninstall_overrides() {
        let cli = parse(&[
            "fathom-setup",
            "uninstall",
            "--package-dir",
            "/usr/local/lib/fathom",
            "--executable",
            "/usr/local/bin/fathom",
        ])
        .expect("parses uninstall");
        match cli.command {
            SetupCommand::Uninstall {
                package_dir,
                executable,
            } => {
                assert_eq!(package_dir, Some(PathBuf::from("/usr/local/lib/fathom")));
                assert_eq!(executable, Some(PathBuf::from("/usr/local/bin/fathom")));
            }
            other => panic!("expected uninstall, got: {other:?}"),
        }
    }

    #[test]
    fn source_root_defaults_to_working_directory() {
        let cli = parse(&["fathom-setup", "clean"]).expect("parses clean");
        assert_eq!(cli.source_root, Utf8PathBuf::from("."));
    }

    #[test]
    fn rejects_unrecognised_options() {
        let error = parse(&["fathom-setup", "clean", "--frobnicate"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn requires_exactly_one_operation() {
        let error = parse(&["fathom-setup"]).unwrap_err();
        assert_eq!(
            error.kind(),
            ErrorKind::MissingSubcommand,
            "bare invocation must be a usage error"
        );
    }
}
