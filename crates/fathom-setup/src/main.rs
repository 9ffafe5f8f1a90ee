//! CLI entrypoint for the fathom installation lifecycle tool.
//!
//! The binary delegates to [`fathom_setup::run`], which parses the requested
//! operation, refreshes the generated version artifact, and dispatches to the
//! matching handler.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    fathom_setup::run(std::env::args_os(), &mut stdout, &mut stderr)
}
