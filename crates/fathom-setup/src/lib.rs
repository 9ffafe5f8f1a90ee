//! Command-line runtime for the fathom installation lifecycle tool.
//!
//! The crate owns argument parsing, version-artifact refresh, and dispatch to
//! the operation handlers: clean, uninstall, plugin-install, plugin-uninstall,
//! and test. The interface is designed to be exercised both from the binary
//! entrypoint and from tests where IO streams can be substituted.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod errors;
mod layout;
mod locate;
mod output;
mod plugin;
mod remove;
mod version;

use cli::Cli;
use commands::SetupRunner;
use errors::SetupError;
use layout::SourceTree;
use output::SetupOutput;

/// Runs the setup tool using the provided arguments and IO handles.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    let result = Cli::try_parse_from(args)
        .map_err(SetupError::CliUsage)
        .and_then(|cli| {
            let tree = SourceTree::new(cli.source_root);
            let mut output = SetupOutput::new(&mut *stdout, &mut *stderr);
            version::refresh_artifact(&tree, &mut output)?;
            SetupRunner.handle(cli.command, &tree, &mut output)
        });

    match result {
        Ok(exit_code) => exit_code,
        Err(error) => {
            let _ = writeln!(stderr, "{error}");
            ExitCode::FAILURE
        }
    }
}
