//! High-level orchestration for setup operations.
//!
//! One operation runs per invocation. Handlers locate their targets through
//! the [`crate::locate`] capability, delete through [`crate::remove`], and
//! copy through [`crate::plugin`]; all user-visible text flows through the
//! injected [`SetupOutput`] streams.

use std::env;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, ExitCode};

use crate::cli::SetupCommand;
use crate::errors::SetupError;
use crate::layout::SourceTree;
use crate::locate::{ConventionalLocator, InstallLocator, resolve_targets};
use crate::output::SetupOutput;
use crate::{plugin, remove};

/// Fixed arguments handed to the external test runner: execute the discovered
/// test binaries and collect coverage.
const TEST_RUNNER_ARGS: &[&str] = &["llvm-cov", "--tests"];

/// Production dispatcher for setup operations.
#[derive(Debug, Default)]
pub(crate) struct SetupRunner;

impl SetupRunner {
    pub(crate) fn handle<W: Write, E: Write>(
        &self,
        command: SetupCommand,
        tree: &SourceTree,
        output: &mut SetupOutput<W, E>,
    ) -> Result<ExitCode, SetupError> {
        match command {
            SetupCommand::Clean => self.clean(tree, output),
            SetupCommand::Uninstall {
                package_dir,
                executable,
            } => self.uninstall(package_dir, executable, output),
            SetupCommand::PluginInstall { host_dir } => {
                self.plugin_install(tree, host_dir, output)
            }
            SetupCommand::PluginUninstall { host_dir } => {
                self.plugin_uninstall(tree, host_dir, output)
            }
            SetupCommand::Test => self.test(),
        }
    }

    fn clean<W: Write, E: Write>(
        &self,
        tree: &SourceTree,
        output: &mut SetupOutput<W, E>,
    ) -> Result<ExitCode, SetupError> {
        let version_file = tree.version_file();
        output.stdout_line(format_args!("removing {version_file}"))?;
        remove::remove_file(version_file.as_std_path())?;
        remove::remove_tree(tree.build_dir().as_std_path())?;
        remove::remove_tree(tree.dist_dir().as_std_path())?;
        Ok(ExitCode::SUCCESS)
    }

    fn uninstall<W: Write, E: Write>(
        &self,
        package_dir: Option<PathBuf>,
        executable: Option<PathBuf>,
        output: &mut SetupOutput<W, E>,
    ) -> Result<ExitCode, SetupError> {
        self.uninstall_with(package_dir, executable, &ConventionalLocator, output)
    }

    fn uninstall_with<W: Write, E: Write>(
        &self,
        package_dir: Option<PathBuf>,
        executable: Option<PathBuf>,
        discovery: &dyn InstallLocator,
        output: &mut SetupOutput<W, E>,
    ) -> Result<ExitCode, SetupError> {
        let (package_dirs, executable) = resolve_targets(package_dir, executable, discovery);
        remove::remove_installation(&package_dirs, executable.as_deref(), output)?;
        Ok(ExitCode::SUCCESS)
    }

    fn plugin_install<W: Write, E: Write>(
        &self,
        tree: &SourceTree,
        host_dir: Option<PathBuf>,
        output: &mut SetupOutput<W, E>,
    ) -> Result<ExitCode, SetupError> {
        let Some(host_dir) = require_host_dir(host_dir, output)? else {
            return Ok(ExitCode::SUCCESS);
        };
        plugin::install(tree, &host_dir, output)?;
        Ok(ExitCode::SUCCESS)
    }

    fn plugin_uninstall<W: Write, E: Write>(
        &self,
        tree: &SourceTree,
        host_dir: Option<PathBuf>,
        output: &mut SetupOutput<W, E>,
    ) -> Result<ExitCode, SetupError> {
        let Some(host_dir) = require_host_dir(host_dir, output)? else {
            return Ok(ExitCode::SUCCESS);
        };
        plugin::uninstall(tree, &host_dir, output)?;
        Ok(ExitCode::SUCCESS)
    }

    fn test(&self) -> Result<ExitCode, SetupError> {
        let runner = resolve_test_runner();
        let status = Command::new(&runner)
            .args(TEST_RUNNER_ARGS)
            .status()
            .map_err(|source| SetupError::LaunchTestRunner {
                runner: runner.clone(),
                source,
            })?;
        Ok(exit_code_from_status(status.code().unwrap_or(-1)))
    }
}

/// Validates the mandatory `--host-dir` option for the plugin operations.
///
/// A missing option is fatal to the operation, not to the process: the
/// diagnostic goes to the error stream and the caller returns normally.
fn require_host_dir<W: Write, E: Write>(
    host_dir: Option<PathBuf>,
    output: &mut SetupOutput<W, E>,
) -> Result<Option<PathBuf>, SetupError> {
    match host_dir {
        Some(host_dir) => Ok(Some(host_dir)),
        None => {
            output.stderr_line(format_args!(
                "Please specify the path to the host application's install directory with the '--host-dir' option!"
            ))?;
            Ok(None)
        }
    }
}

/// Resolves the external test runner binary.
///
/// Uses the `FATHOM_SETUP_TEST_RUNNER` environment variable when set,
/// otherwise `cargo`.
fn resolve_test_runner() -> OsString {
    env::var_os("FATHOM_SETUP_TEST_RUNNER").unwrap_or_else(|| OsString::from("cargo"))
}

fn exit_code_from_status(status: i32) -> ExitCode {
    if (0..=255).contains(&status) {
        ExitCode::from(status as u8)
    } else {
        ExitCode::FAILURE
    }
}
